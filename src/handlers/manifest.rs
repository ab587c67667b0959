//! PWA 매니페스트 핸들러
use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use actix_web::{get, web, HttpResponse};

use crate::services::manifest::ManifestService;

/// `GET /manifest.json`
///
/// 설정으로 생성된 매니페스트는 1시간 캐시하고,
/// 기본 매니페스트는 캐시 헤더 없이 반환합니다. 항상 `200`입니다.
#[get("/manifest.json")]
pub async fn manifest(service: web::Data<ManifestService>) -> HttpResponse {
    let outcome = service.manifest().await;

    let mut response = HttpResponse::Ok();
    response.insert_header((CONTENT_TYPE, "application/json"));
    if outcome.is_cacheable() {
        response.insert_header((CACHE_CONTROL, "public, max-age=3600"));
    }

    response.json(outcome.manifest())
}
