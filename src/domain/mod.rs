//! # Domain Layer
//!
//! - [`models`] - 인증/인가 값 객체 (클레임, 사용자, 보호 규칙, 가드 판정)
//! - [`dto`] - CMDOLA API 요청/응답과 매니페스트 데이터 전송 객체

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
