//! 에러 타입 모듈
//!
//! - [`errors`] - HTTP 응답으로 변환되는 애플리케이션 에러
//! - [`guard_errors`] - 라우트 가드 내부 판정 사유

pub mod errors;
pub mod guard_errors;

pub use errors::{AppError, AppResult};
pub use guard_errors::GuardError;
