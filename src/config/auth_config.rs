//! # Route Guard Configuration Module
//!
//! 역할 기반 접근 제어(라우트 가드)에 필요한 설정을 관리합니다.
//! 보호 경로 테이블은 시작 시 한 번 만들어지는 불변 값이며,
//! 미들웨어에 `Arc`로 주입됩니다. 런타임에 수정되지 않습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 토큰 쿠키 이름 (기본값: admin_token)
//! export AUTH_COOKIE_NAME="admin_token"
//!
//! # 보호 경로 테이블 (기본값은 아래와 동일)
//! export PROTECTED_ROUTES="/admin=admin;/cuisine=admin,chef;/livraison=admin,livreur"
//! ```
//!
//! 역할 목록이 비어 있는 항목(`/admin=`)은 디코딩 가능하고 만료되지 않은
//! 토큰만 있으면 통과시키는 규칙이 됩니다.

use std::collections::{BTreeSet, HashSet};
use std::env;

use crate::domain::models::auth::RouteRule;
use crate::errors::AppError;

/// 기본 토큰 쿠키 이름
pub const DEFAULT_AUTH_COOKIE: &str = "admin_token";

/// 기본 로그인 페이지
pub const DEFAULT_LOGIN_PAGE: &str = "/login";

/// 역할별 홈 경로 (우선순위 순서)
#[derive(Debug, Clone, PartialEq)]
pub struct RoleHome {
    pub role: String,
    pub path: String,
}

impl RoleHome {
    pub fn new(role: &str, path: &str) -> Self {
        Self {
            role: role.to_string(),
            path: path.to_string(),
        }
    }
}

/// 라우트 가드 설정
///
/// - `cookie_name`: 토큰을 담는 쿠키 이름
/// - `login_page`: 인증 실패 시 리다이렉트 경로
/// - `login_paths`: 검사를 건너뛰는 로그인 경로 (리다이렉트 루프 방지)
/// - `routes`: 보호 경로 테이블 (앞에서부터 첫 매칭)
/// - `role_homes`: 권한 부족 시 보낼 역할별 홈 (우선순위 순서)
#[derive(Debug, Clone)]
pub struct GuardConfig {
    pub cookie_name: String,
    pub login_page: String,
    pub login_paths: HashSet<String>,
    pub routes: Vec<RouteRule>,
    pub role_homes: Vec<RoleHome>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_AUTH_COOKIE.to_string(),
            login_page: DEFAULT_LOGIN_PAGE.to_string(),
            login_paths: ["/login", "/login/"].iter().map(|p| p.to_string()).collect(),
            routes: vec![
                RouteRule::new("/admin", &["admin"]),
                RouteRule::new("/cuisine", &["admin", "chef"]),
                RouteRule::new("/livraison", &["admin", "livreur"]),
            ],
            role_homes: vec![
                RoleHome::new("admin", "/admin"),
                RoleHome::new("chef", "/cuisine"),
                RoleHome::new("livreur", "/livraison"),
            ],
        }
    }
}

impl GuardConfig {
    /// 환경 변수에서 설정을 읽어 기본값 위에 덮어씁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - `PROTECTED_ROUTES` 형식 오류
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(name) = env::var("AUTH_COOKIE_NAME") {
            let name = name.trim();
            if !name.is_empty() {
                config.cookie_name = name.to_string();
            }
        }

        if let Ok(table) = env::var("PROTECTED_ROUTES") {
            config.routes = parse_route_table(&table)?;
        }

        Ok(config)
    }

    /// 보호 경로 테이블을 교체한 설정을 반환합니다.
    pub fn with_routes(mut self, routes: Vec<RouteRule>) -> Self {
        self.routes = routes;
        self
    }

    /// 로그인 경로인지 확인합니다.
    pub fn is_login_path(&self, path: &str) -> bool {
        self.login_paths.contains(path)
    }

    /// 경로에 매칭되는 첫 번째 보호 규칙을 찾습니다.
    pub fn matching_rule(&self, path: &str) -> Option<&RouteRule> {
        self.routes.iter().find(|rule| rule.matches(path))
    }

    /// 사용자가 가진 역할 중 우선순위가 가장 높은 역할의 홈 경로
    pub fn home_for(&self, roles: &BTreeSet<String>) -> Option<&str> {
        self.role_homes
            .iter()
            .find(|home| roles.contains(&home.role))
            .map(|home| home.path.as_str())
    }
}

/// `PROTECTED_ROUTES` 형식의 문자열을 파싱합니다.
///
/// 항목은 `;`로, 역할은 `,`로 구분합니다: `/admin=admin;/cuisine=admin,chef`
pub fn parse_route_table(table: &str) -> Result<Vec<RouteRule>, AppError> {
    let mut routes = Vec::new();

    for entry in table.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let (prefix, roles) = entry.split_once('=').ok_or_else(|| {
            AppError::ConfigError(format!("보호 경로 항목에 '='가 없습니다: {}", entry))
        })?;

        let prefix = prefix.trim().trim_end_matches('/');
        if !prefix.starts_with('/') {
            return Err(AppError::ConfigError(format!(
                "보호 경로는 '/'로 시작해야 합니다: {}",
                entry
            )));
        }

        let roles: Vec<&str> = roles
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();

        routes.push(RouteRule::new(prefix, &roles));
    }

    if routes.is_empty() {
        return Err(AppError::ConfigError(
            "PROTECTED_ROUTES에 유효한 항목이 없습니다".to_string(),
        ));
    }

    Ok(routes)
}
