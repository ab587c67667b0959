//! CMDOLA 웹 프론트 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 라우트 가드, CMDOLA API 클라이언트, 매니페스트 서비스를 초기화하고
//! `web::Data`로 핸들러에 주입합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::Governor;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use cmdola_web::config::{cors_allowed_origins, ApiConfig, GuardConfig, RateLimitConfig, ServerConfig};
use cmdola_web::errors::AppError;
use cmdola_web::middlewares::GuardMiddleware;
use cmdola_web::routes::configure_all_routes;
use cmdola_web::services::api::CmdolaApi;
use cmdola_web::services::manifest::ManifestService;
use cmdola_web::utils::display_terminal::{print_boxed_title, print_guard_table};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 CMDOLA 웹 서비스 시작중...");

    let guard_config = Arc::new(GuardConfig::from_env().map_err(into_io_error)?);
    let api = CmdolaApi::from_env().map_err(into_io_error)?;

    info!("🔗 CMDOLA API: {}", ApiConfig::base_url());
    print_guard_table(&guard_config);

    start_http_server(guard_config, api).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류, 서버 실행 오류
async fn start_http_server(guard_config: Arc<GuardConfig>, api: CmdolaApi) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    print_boxed_title("CMDOLA WEB");
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Login: http://{}{}", bind_address, guard_config.login_page);

    // Rate Limiting 설정
    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = rate_limit.governor_config().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)",
        )
    })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );

    let manifest_service = web::Data::new(ManifestService::new(api.clone()));
    let api = web::Data::new(api);
    let guard_data = web::Data::from(guard_config.clone());

    HttpServer::new(move || {
        App::new()
            // 마지막에 등록한 wrap이 가장 먼저 실행됨
            // 실행 순서: Governor → NormalizePath → Logger → CORS → Guard
            .wrap(GuardMiddleware::new(guard_config.clone()))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(Governor::new(&governor_conf))
            .app_data(api.clone())
            .app_data(manifest_service.clone())
            .app_data(guard_data.clone())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=cmdola_web::services::guard=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 쿠키 기반 인증이므로 자격 증명을 허용하며,
/// Origin 목록은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
fn configure_cors() -> Cors {
    let cors = cors_allowed_origins()
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 자격 증명(쿠키 등) 지원
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

fn into_io_error(e: AppError) -> io::Error {
    error!("❌ 초기화 실패: {}", e);
    io::Error::other(e.to_string())
}
