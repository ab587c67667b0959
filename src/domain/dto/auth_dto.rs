//! 인증 관련 DTO
//!
//! 로그인 폼 입력과 CMDOLA API `/auth/*` 응답을 매핑합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 폼 (`POST /login`, form-urlencoded)
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// `POST /auth/login` 요청 본문
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// 로그인 응답에 포함된 레스토랑 정보
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub nom: String,
}

/// `POST /auth/login` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub token: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub restaurant: Option<RestaurantRef>,
}

/// `GET /auth/verify` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
    #[serde(default)]
    pub restaurant: Option<String>,
}

/// `GET /auth/me` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub restaurant: String,
}
