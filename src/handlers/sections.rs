//! 역할별 화면 핸들러 (`/admin`, `/cuisine`, `/livraison`)
//!
//! 이 경로들은 [`crate::middlewares::GuardMiddleware`]가 먼저 검사하므로
//! 핸들러에 도달했다면 사용자 정보와 토큰이 extensions에 들어 있습니다.
//! API 호출에는 같은 토큰을 Bearer로 전달합니다.

use actix_web::{get, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::{ArchiveQuery, Period, StatusUpdate};
use crate::domain::models::auth::{AuthenticatedUser, CredentialToken};
use crate::errors::AppError;
use crate::services::api::CmdolaApi;

/// `GET /admin` - 사용자 정보, 통계, 내보내기 링크
#[get("")]
pub async fn admin_dashboard(
    user: AuthenticatedUser,
    token: CredentialToken,
    api: web::Data<CmdolaApi>,
) -> Result<HttpResponse, AppError> {
    let api = api.with_token(token.as_str());
    let stats = api.stats().general().await?;

    let exports: serde_json::Map<String, serde_json::Value> =
        [Period::Today, Period::Week, Period::Month, Period::All]
            .into_iter()
            .map(|p| (p.as_str().to_string(), json!(api.stats().export_url(p))))
            .collect();

    Ok(HttpResponse::Ok().json(json!({
        "user": user,
        "stats": stats,
        "exports": exports,
    })))
}

/// `GET /admin/commandes` - 전체 주문 목록
#[get("/commandes")]
pub async fn admin_orders(
    token: CredentialToken,
    api: web::Data<CmdolaApi>,
) -> Result<HttpResponse, AppError> {
    let orders = api.with_token(token.as_str()).commandes().list().await?;
    Ok(HttpResponse::Ok().json(orders))
}

/// `GET /admin/archives?period=week&statut=terminee`
#[get("/archives")]
pub async fn admin_archives(
    token: CredentialToken,
    query: web::Query<ArchiveQuery>,
    api: web::Data<CmdolaApi>,
) -> Result<HttpResponse, AppError> {
    let archives = api
        .with_token(token.as_str())
        .commandes()
        .list_archives(query.period, query.statut)
        .await?;

    Ok(HttpResponse::Ok().json(archives))
}

/// `GET /cuisine` - 진행 중인 주문
#[get("")]
pub async fn kitchen_board(
    user: AuthenticatedUser,
    token: CredentialToken,
    api: web::Data<CmdolaApi>,
) -> Result<HttpResponse, AppError> {
    active_orders_view(user, token, api).await
}

/// `PUT /cuisine/commandes/{id}/status` - 주문 상태 변경
#[put("/commandes/{commande_id}/status")]
pub async fn update_order_status(
    user: AuthenticatedUser,
    token: CredentialToken,
    commande_id: web::Path<String>,
    payload: web::Json<StatusUpdate>,
    api: web::Data<CmdolaApi>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!(
        "🍳 주문 상태 변경 - 주문: {}, 상태: {}, 사용자: {}",
        commande_id,
        payload.statut,
        user.username
    );

    let updated = api
        .with_token(token.as_str())
        .commandes()
        .update_status(&commande_id, &payload.statut)
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// `GET /livraison` - 배달 화면
#[get("")]
pub async fn delivery_board(
    user: AuthenticatedUser,
    token: CredentialToken,
    api: web::Data<CmdolaApi>,
) -> Result<HttpResponse, AppError> {
    active_orders_view(user, token, api).await
}

async fn active_orders_view(
    user: AuthenticatedUser,
    token: CredentialToken,
    api: web::Data<CmdolaApi>,
) -> Result<HttpResponse, AppError> {
    let orders = api
        .with_token(token.as_str())
        .commandes()
        .list_actives()
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "user": user,
        "commandes": orders.commandes,
        "total": orders.total,
    })))
}
