//! 역할 기반 라우트 가드
//!
//! - [`route_guard`] - 경로/토큰/시각으로 판정을 내리는 가드
//! - [`token_decoder`] - 서명 검증 없는 토큰 페이로드 디코딩
//! - [`static_assets`] - 가드를 건너뛰는 정적 파일 판별

pub mod route_guard;
pub mod static_assets;
pub mod token_decoder;

pub use route_guard::RouteGuard;
pub use static_assets::is_static_asset;
pub use token_decoder::{decode_claims, decode_payload};
