//! `/auth/*` 엔드포인트
use reqwest::Method;

use crate::domain::dto::{LoginRequest, LoginResponse, MeResponse, VerifyResponse};
use crate::errors::AppResult;
use crate::services::api::CmdolaApi;

pub struct AuthApi<'a> {
    api: &'a CmdolaApi,
}

impl<'a> AuthApi<'a> {
    pub fn new(api: &'a CmdolaApi) -> Self {
        Self { api }
    }

    /// 사용자명/비밀번호로 로그인하고 토큰과 역할을 받습니다.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        self.api
            .send_json(
                Method::POST,
                "/auth/login",
                &LoginRequest { username, password },
            )
            .await
    }

    /// 현재 토큰의 유효성을 확인합니다.
    pub async fn verify(&self) -> AppResult<VerifyResponse> {
        self.api.get("/auth/verify").await
    }

    pub async fn me(&self) -> AppResult<MeResponse> {
        self.api.get("/auth/me").await
    }
}
