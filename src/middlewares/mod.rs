//! 미들웨어 모듈
//!
//! 요청 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 라우트 가드 (GuardMiddleware)
//! - 토큰 쿠키에서 역할을 읽어 보호 경로 접근을 판정
//! - 실패 시 302 리다이렉트 (필요하면 쿠키 삭제)
//! - 통과한 사용자 정보와 토큰을 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::GuardMiddleware;
//!
//! let config = Arc::new(GuardConfig::from_env()?);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(GuardMiddleware::new(config.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod guard_middleware;
mod guard_inner;

// 미들웨어 재export
pub use guard_middleware::GuardMiddleware;
