//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 웹 프론트 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn menu(api: web::Data<CmdolaApi>) -> Result<HttpResponse, AppError> {
//!     let menu = api.menu().get().await?;
//!     Ok(HttpResponse::Ok().json(menu))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 핸들러와 API 클라이언트에서 발생할 수 있는 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 가드를 거치지 않은 요청에서 사용자 정보를 찾을 수 없음 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// CMDOLA API가 에러 상태 코드로 응답함 (상태 코드 그대로 전달)
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// 외부 서비스 통신 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 설정 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// API 에러 응답의 메시지만 반환합니다.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            AppError::ApiError { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ApiError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// API 에러는 업스트림 메시지만 그대로 노출합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = match self {
            AppError::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        };

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
