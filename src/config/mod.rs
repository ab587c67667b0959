//! # Configuration Module
//!
//! 웹 프론트 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, CMDOLA API 접속 설정
//! - [`auth_config`] - 토큰 쿠키, 로그인 경로, 보호 경로 테이블
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # CMDOLA API
//! export PUBLIC_API_URL="https://api.cmdola.be/api"
//! export PUBLIC_DEFAULT_RESTAURANT_ID="rare-burger"
//!
//! # 라우트 가드
//! export AUTH_COOKIE_NAME="admin_token"
//! export PROTECTED_ROUTES="/admin=admin;/cuisine=admin,chef;/livraison=admin,livreur"
//!
//! # 환경 (development, test, staging, production)
//! export ENVIRONMENT="production"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
