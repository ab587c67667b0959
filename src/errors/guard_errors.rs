//! 라우트 가드 판정 실패 사유
//!
//! 가드 내부에서만 사용되며 호출자에게 전파되지 않습니다.
//! 각 사유는 정해진 리다이렉트 결정으로 변환됩니다.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuardError {
    /// 보호된 경로인데 토큰 쿠키가 없음
    #[error("token cookie is missing")]
    MissingToken,

    /// 페이로드 디코딩 실패 (base64, UTF-8, JSON)
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// `exp` 클레임이 현재 시각보다 과거
    #[error("token expired at {exp} (now {now})")]
    ExpiredToken { exp: i64, now: i64 },

    /// 알려진 역할이 하나도 없음
    #[error("{username} has no recognized role")]
    UnrecognizedRole { username: String },

    /// 알려진 역할이지만 이 경로에 필요한 역할이 아님
    #[error("{username} lacks a role for this route, sending to {home}")]
    InsufficientRole { username: String, home: String },
}

impl GuardError {
    /// 쿠키를 삭제해야 하는 사유인지 여부
    pub fn clears_credential(&self) -> bool {
        matches!(
            self,
            GuardError::MalformedToken(_)
                | GuardError::ExpiredToken { .. }
                | GuardError::UnrecognizedRole { .. }
        )
    }
}
