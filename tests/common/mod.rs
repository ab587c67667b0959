//! 통합 테스트 공용 헬퍼
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{web, App};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

use cmdola_web::config::GuardConfig;
use cmdola_web::middlewares::GuardMiddleware;
use cmdola_web::routes::configure_all_routes;
use cmdola_web::services::api::CmdolaApi;
use cmdola_web::services::manifest::ManifestService;

/// 발급 서버의 비밀키와 다른 키로 서명 (가드는 서명을 확인하지 않음)
const TEST_SECRET: &[u8] = b"cmdola-web-test-secret";

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// 임의의 클레임으로 HS256 토큰 생성
pub fn mint_token(claims: Value) -> String {
    encode(&Header::default(), &claims, &EncodingKey::from_secret(TEST_SECRET))
        .expect("token minting")
}

/// 1시간 유효한 토큰
pub fn token_for(username: &str, roles: &[&str]) -> String {
    mint_token(json!({
        "username": username,
        "roles": roles,
        "name": username.to_uppercase(),
        "restaurant": "rare-burger",
        "exp": now() + 3600,
    }))
}

pub fn expired_token_for(username: &str, roles: &[&str]) -> String {
    mint_token(json!({
        "username": username,
        "roles": roles,
        "exp": now() - 60,
    }))
}

pub fn api_for(base_url: &str) -> CmdolaApi {
    CmdolaApi::with_client(reqwest::Client::new(), base_url)
}

/// main과 같은 구성의 앱 (Rate Limiting, CORS 제외)
pub fn app(
    api: CmdolaApi,
    config: GuardConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = Arc::new(config);

    App::new()
        .wrap(GuardMiddleware::new(config.clone()))
        .app_data(web::Data::new(ManifestService::new(api.clone())))
        .app_data(web::Data::new(api))
        .app_data(web::Data::from(config))
        .configure(configure_all_routes)
}
