//! Stripe 결제 세션 (`/stripe/*`)
use reqwest::Method;

use crate::domain::dto::{CheckoutSession, CheckoutSessionRequest};
use crate::errors::AppResult;
use crate::services::api::CmdolaApi;

pub struct StripeApi<'a> {
    api: &'a CmdolaApi,
}

impl<'a> StripeApi<'a> {
    pub fn new(api: &'a CmdolaApi) -> Self {
        Self { api }
    }

    /// 주문에 대한 Stripe Checkout 세션을 생성합니다.
    pub async fn create_checkout_session(&self, order_id: &str) -> AppResult<CheckoutSession> {
        self.api
            .send_json(
                Method::POST,
                "/stripe/create-checkout-session",
                &CheckoutSessionRequest { order_id },
            )
            .await
    }
}
