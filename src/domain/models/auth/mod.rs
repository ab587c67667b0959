//! 인증/인가 도메인 모델
//!
//! - [`IdentityClaims`] - 토큰 페이로드에서 읽은 클레임
//! - [`AuthenticatedUser`] - 가드를 통과한 사용자 (요청 extensions에 저장)
//! - [`CredentialToken`] - 가드를 통과한 원본 토큰 (API 호출용)
//! - [`RouteRule`] - 보호 경로 규칙
//! - [`GuardDecision`] - 가드 판정 결과

pub mod authenticated_user;
pub mod credential_token;
pub mod guard_decision;
pub mod identity_claims;
pub mod route_rule;

pub use authenticated_user::{AuthenticatedUser, OptionalUser};
pub use credential_token::CredentialToken;
pub use guard_decision::GuardDecision;
pub use identity_claims::{IdentityClaims, UNKNOWN_IDENTITY};
pub use route_rule::RouteRule;
