//! # CMDOLA REST API 클라이언트
//!
//! 메뉴, 주문, 통계, 결제 데이터는 모두 외부 CMDOLA API가 소유합니다.
//! 이 클라이언트는 요청마다 JSON 헤더와 Bearer 토큰을 붙이고,
//! 에러 응답을 [`AppError::ApiError`]로 변환합니다.
//!
//! ## 에러 변환 규칙
//!
//! ```text
//! 2xx                → 본문 JSON 디코딩
//! 비 2xx + {"error"}   → ApiError { status, error }
//! 비 2xx + {"message"} → ApiError { status, message }
//! 그 외               → ApiError { status, "HTTP <code>: <reason>" }
//! 전송/디코딩 실패      → ExternalServiceError
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let api = CmdolaApi::from_env()?;
//! let menu = api.menu().get().await?;
//!
//! // 쿠키 토큰을 그대로 전달
//! let actives = api.with_token(token).commandes().list_actives().await?;
//! ```

use std::time::Duration;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::errors::{AppError, AppResult};
use crate::services::api::{
    AuthApi, CommandesApi, ConfigApi, HealthApi, ImagesApi, MenuApi, StatsApi, StripeApi,
};

/// CMDOLA API 클라이언트
///
/// `reqwest::Client`는 내부적으로 연결 풀을 공유하므로 복제 비용이 작습니다.
/// 토큰은 [`CmdolaApi::with_token`]으로 요청 단위 복제본에만 실립니다.
#[derive(Debug, Clone)]
pub struct CmdolaApi {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl CmdolaApi {
    /// 기본 URL과 타임아웃으로 클라이언트를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - HTTP 클라이언트 생성 실패
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self::with_client(http, base_url))
    }

    /// 이미 구성된 `reqwest::Client`로 생성합니다.
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// `PUBLIC_API_URL`, `API_TIMEOUT_SECS` 환경 변수로 생성합니다.
    pub fn from_env() -> AppResult<Self> {
        Self::new(
            &ApiConfig::base_url(),
            Duration::from_secs(ApiConfig::timeout_secs()),
        )
    }

    /// Bearer 토큰을 실은 복제본을 반환합니다.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn config(&self) -> ConfigApi<'_> {
        ConfigApi::new(self)
    }

    pub fn menu(&self) -> MenuApi<'_> {
        MenuApi::new(self)
    }

    pub fn commandes(&self) -> CommandesApi<'_> {
        CommandesApi::new(self)
    }

    pub fn images(&self) -> ImagesApi<'_> {
        ImagesApi::new(self)
    }

    pub fn stats(&self) -> StatsApi<'_> {
        StatsApi::new(self)
    }

    pub fn health(&self) -> HealthApi<'_> {
        HealthApi::new(self)
    }

    pub fn stripe(&self) -> StripeApi<'_> {
        StripeApi::new(self)
    }

    /// 기본 URL 기준 절대 URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer 토큰만 붙인 요청 빌더 (multipart 업로드용)
    pub(crate) fn bare_request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// JSON 헤더와 Bearer 토큰을 붙인 요청 빌더
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.bare_request(method, path)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.fetch(self.request(Method::GET, path)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.fetch(self.request(Method::DELETE, path)).await
    }

    pub(crate) async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)
            .map_err(|e| AppError::InternalError(format!("요청 본문 직렬화 실패: {}", e)))?;

        self.fetch(self.request(method, path).body(payload)).await
    }

    /// 요청을 보내고 응답을 디코딩합니다.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let request = builder
            .build()
            .map_err(|e| AppError::InternalError(format!("요청 생성 실패: {}", e)))?;
        let url = request.url().to_string();

        log::debug!("🔍 API 요청: {} {}", request.method(), url);

        let response = self.http.execute(request).await.map_err(|e| {
            log::error!("❌ API 통신 실패: {} ({})", e, url);
            AppError::ExternalServiceError(format!("CMDOLA API 요청 실패: {}", e))
        })?;

        log::debug!("✅ 응답: {} ({})", response.status().as_u16(), url);

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            log::error!("❌ API 오류: {} ({})", err, url);
            return Err(err);
        }

        decode_body(response).await
    }
}

/// 에러 응답 본문에서 메시지를 추출합니다.
async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = response.bytes().await.unwrap_or_default();

    AppError::ApiError {
        status: status.as_u16(),
        message: error_message(status, &body),
    }
}

/// JSON 본문에 `error`/`message`가 모두 없을 때 사용하는 메시지
pub const GENERIC_API_ERROR: &str = "Erreur API";

/// 에러 응답 본문에서 메시지를 고릅니다.
///
/// JSON 본문이면 `error` → `message` → [`GENERIC_API_ERROR`],
/// JSON이 아니면 `HTTP <code>: <reason>`.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(json) => ["error", "message"]
            .iter()
            .find_map(|key| json.get(*key).and_then(Value::as_str).filter(|msg| !msg.is_empty()))
            .unwrap_or(GENERIC_API_ERROR)
            .to_string(),
        Err(_) => format!(
            "HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ),
    }
}

/// 성공 응답 본문을 디코딩합니다. 빈 본문은 `null`로 취급합니다.
async fn decode_body<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let body = response
        .bytes()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("API 응답 수신 실패: {}", e)))?;

    let result = if body.is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(&body)
    };

    result.map_err(|e| AppError::ExternalServiceError(format!("API 응답 파싱 실패: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_message_prefers_error_field() {
        let body = br#"{"error": "Identifiants invalides", "message": "ignored"}"#;

        assert_eq!(
            error_message(StatusCode::UNAUTHORIZED, body),
            "Identifiants invalides"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_message_field() {
        let body = br#"{"message": "Commande introuvable"}"#;

        assert_eq!(
            error_message(StatusCode::NOT_FOUND, body),
            "Commande introuvable"
        );
    }

    #[test]
    fn test_error_message_uses_status_when_body_is_not_json() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>"),
            "HTTP 500: Internal Server Error"
        );
    }

    #[test]
    fn test_error_message_for_json_without_known_fields() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, br#"{"detail": "x"}"#),
            GENERIC_API_ERROR
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, br#"{"error": "", "message": ""}"#),
            "Erreur API"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = CmdolaApi::with_client(Client::new(), "http://localhost:5000/api/");

        assert_eq!(api.base_url(), "http://localhost:5000/api");
        assert_eq!(api.url("/menu"), "http://localhost:5000/api/menu");
    }

    #[test]
    fn test_with_token_does_not_touch_original() {
        let api = CmdolaApi::with_client(Client::new(), "http://localhost:5000/api");
        let authed = api.with_token("abc");

        assert_eq!(api.token(), None);
        assert_eq!(authed.token(), Some("abc"));
    }
}
