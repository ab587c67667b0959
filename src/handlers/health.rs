//! 헬스체크 핸들러
use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::config::{ApiConfig, Environment};
use crate::services::api::CmdolaApi;

#[derive(Debug, Default, Deserialize)]
pub struct HealthQuery {
    #[serde(default)]
    pub deep: bool,
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// `?deep=true`이면 CMDOLA API의 심층 헬스체크까지 호출하고,
/// API가 응답하지 않으면 `503`을 반환합니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// curl http://localhost:8080/health?deep=true
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "cmdola_web",
///   "version": "0.1.0",
///   "environment": "Production",
///   "restaurant": "rare-burger",
///   "timestamp": "2025-01-01T00:00:00Z"
/// }
/// ```
#[get("/health")]
pub async fn health_check(
    api: web::Data<CmdolaApi>,
    query: web::Query<HealthQuery>,
) -> HttpResponse {
    let mut body = json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": format!("{:?}", Environment::current()),
        "restaurant": ApiConfig::default_restaurant_id(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if !query.deep {
        return HttpResponse::Ok().json(body);
    }

    match api.health().check_deep().await {
        Ok(upstream) => {
            body["api"] = upstream;
            HttpResponse::Ok().json(body)
        }
        Err(e) => {
            log::warn!("⚠️ CMDOLA API 헬스체크 실패: {}", e);
            body["status"] = json!("degraded");
            body["api"] = json!({ "error": e.to_string() });
            HttpResponse::ServiceUnavailable().json(body)
        }
    }
}
