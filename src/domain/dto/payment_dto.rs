//! Stripe 결제 세션 DTO
use serde::{Deserialize, Serialize};

/// `POST /stripe/create-checkout-session` 요청 본문
#[derive(Debug, Serialize)]
pub struct CheckoutSessionRequest<'a> {
    pub order_id: &'a str,
}

/// 생성된 결제 세션
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub session_id: String,
    pub url: String,
}
