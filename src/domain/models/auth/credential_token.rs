use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::errors::AppError;

/// 가드를 통과한 요청의 원본 토큰
///
/// 핸들러가 CMDOLA API를 호출할 때 같은 토큰을 Bearer로 전달하는 데 사용합니다.
/// [`super::AuthenticatedUser`]와 함께 미들웨어가 extensions에 저장합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialToken(pub String);

impl CredentialToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for CredentialToken {
    type Error = AppError;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<CredentialToken>() {
            Some(token) => ready(Ok(token.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증 토큰이 없습니다".to_string(),
            ))),
        }
    }
}
