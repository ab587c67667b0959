//! 서버 및 외부 API 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, CMDOLA API 접속 정보를 관리합니다.

use std::env;

use actix_governor::governor::middleware::StateInformationMiddleware;
use actix_governor::{GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};

/// 클라이언트 IP 기준, 응답에 `x-ratelimit-*` 헤더를 붙이는 Governor 설정
pub type RateLimitGovernorConfig = GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));
        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 운영 환경 여부 (쿠키 Secure 플래그 등에 사용)
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production | Environment::Staging)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// CMDOLA REST API 접속 설정
///
/// 모든 데이터(메뉴, 주문, 통계, 결제)는 외부 API가 소유하며,
/// 이 서비스는 해당 API를 호출하는 클라이언트일 뿐입니다.
pub struct ApiConfig;

impl ApiConfig {
    /// API 기본 URL (끝의 `/`는 제거됨)
    ///
    /// # Environment Variables
    ///
    /// - `PUBLIC_API_URL` (기본값: `http://127.0.0.1:5000/api`)
    pub fn base_url() -> String {
        let raw = env::var("PUBLIC_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000/api".to_string());
        raw.trim_end_matches('/').to_string()
    }

    /// 매니페스트 생성 시 사용하는 기본 레스토랑 ID
    ///
    /// # Environment Variables
    ///
    /// - `PUBLIC_DEFAULT_RESTAURANT_ID` (기본값: `rare-burger`)
    pub fn default_restaurant_id() -> String {
        env::var("PUBLIC_DEFAULT_RESTAURANT_ID").unwrap_or_else(|_| "rare-burger".to_string())
    }

    /// API 요청 타임아웃 (초)
    pub fn timeout_secs() -> u64 {
        env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10)
    }
}

/// Rate Limiting 설정
///
/// ```bash
/// # .env.dev
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND` (기본값 100), `RATE_LIMIT_BURST_SIZE` (기본값 200)
    ///
    /// 파싱에 실패하면 에러를 기록하고 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }

    /// Governor 미들웨어 설정을 만듭니다. 0 값이 있으면 `None`
    pub fn governor_config(&self) -> Option<RateLimitGovernorConfig> {
        if self.per_second == 0 {
            return None;
        }

        GovernorConfigBuilder::default()
            .requests_per_second(self.per_second)
            .burst_size(self.burst_size)
            .use_headers()
            .finish()
    }
}

/// CORS 허용 Origin 목록
///
/// `CORS_ALLOWED_ORIGINS`(쉼표 구분)가 없으면 로컬 개발 주소를 사용합니다.
pub fn cors_allowed_origins() -> Vec<String> {
    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(list) => list
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => [
            "http://localhost:4321",
            "http://127.0.0.1:4321",
            "http://localhost:8080",
            "http://127.0.0.1:8080",
        ]
        .iter()
        .map(|o| o.to_string())
        .collect(),
    }
}
