//! # Domain Models Module
//!
//! 웹 프론트가 다루는 도메인 모델을 정의합니다.
//! 주문, 메뉴 등 비즈니스 데이터는 외부 API가 소유하므로,
//! 여기에는 접근 제어에 필요한 값 객체만 둡니다.

pub mod auth;

pub use auth::*;
