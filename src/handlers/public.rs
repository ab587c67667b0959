//! 공개 핸들러 (메뉴, 주문 생성, 주문 추적, 결제)
//!
//! 로그인 없이 손님이 사용하는 경로입니다. 요청을 CMDOLA API로 그대로 전달합니다.

use actix_web::{get, post, web, HttpResponse};
use serde_json::Value;

use crate::errors::AppError;
use crate::services::api::CmdolaApi;

/// `GET /menu`
#[get("/menu")]
pub async fn menu(api: web::Data<CmdolaApi>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(api.menu().get().await?))
}

/// `POST /commandes` - 새 주문 생성
#[post("/commandes")]
pub async fn create_order(
    payload: web::Json<Value>,
    api: web::Data<CmdolaApi>,
) -> Result<HttpResponse, AppError> {
    if !payload.is_object() {
        return Err(AppError::ValidationError(
            "주문 본문은 JSON 객체여야 합니다".to_string(),
        ));
    }

    let created = api.commandes().create(&payload).await?;
    log::info!("📦 새 주문 생성");

    Ok(HttpResponse::Created().json(created))
}

/// `GET /suivi/{numero}` - 주문 번호로 진행 상황 조회
#[get("/suivi/{numero}")]
pub async fn track_order(
    numero: web::Path<String>,
    api: web::Data<CmdolaApi>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(api.commandes().track(&numero).await?))
}

/// `POST /paiement/{order_id}` - Stripe Checkout 세션 생성
#[post("/paiement/{order_id}")]
pub async fn create_payment(
    order_id: web::Path<String>,
    api: web::Data<CmdolaApi>,
) -> Result<HttpResponse, AppError> {
    let session = api.stripe().create_checkout_session(&order_id).await?;
    log::info!("💳 결제 세션 생성 - 주문: {}", order_id);

    Ok(HttpResponse::Ok().json(session))
}
