//! # Data Transfer Objects
//!
//! CMDOLA API와 주고받는 요청/응답 구조체와 폼 입력을 정의합니다.
//! 응답 필드는 API 변경에 견디도록 대부분 `#[serde(default)]`를 사용합니다.
//!
//! - [`auth_dto`] - 로그인 폼, `/auth/login`, `/auth/verify`, `/auth/me`
//! - [`order_dto`] - 주문 목록, 아카이브 필터, 상태 변경
//! - [`payment_dto`] - Stripe 결제 세션
//! - [`manifest_dto`] - 레스토랑 설정 일부와 PWA 매니페스트

pub mod auth_dto;
pub mod manifest_dto;
pub mod order_dto;
pub mod payment_dto;

pub use auth_dto::*;
pub use manifest_dto::*;
pub use order_dto::*;
pub use payment_dto::*;
