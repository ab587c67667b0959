//! 라우트 접근 가드
//!
//! 요청마다 한 번 호출되어 통과/리다이렉트/쿠키 삭제를 결정합니다.
//! I/O와 잠금 없이 (경로, 토큰, 설정, 현재 시각)만으로 결정하는 순수 함수이며,
//! 같은 입력과 같은 시각에 대해 항상 같은 결과를 돌려줍니다.
//!
//! ```text
//! 정적 파일? ──────────────► Continue
//! 로그인 경로? ────────────► Continue
//! 보호 규칙 없음? ─────────► Continue
//! 토큰 없음? ─────────────► RedirectTo(login)
//! 디코딩 실패 / 만료? ────► ClearCredentialAndRedirect(login)
//! 역할 일치? ─────────────► ContinueWithIdentity(user)
//! 다른 알려진 역할? ──────► RedirectTo(역할 홈)
//! 알려진 역할 없음 ───────► ClearCredentialAndRedirect(login)
//! ```

use std::sync::Arc;

use crate::config::GuardConfig;
use crate::domain::models::auth::{AuthenticatedUser, GuardDecision, RouteRule};
use crate::errors::GuardError;
use crate::services::guard::static_assets::is_static_asset;
use crate::services::guard::token_decoder::decode_claims;

/// 라우트 접근 가드
///
/// 불변 설정을 `Arc`로 공유하므로 워커 간 복제 비용이 없습니다.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    config: Arc<GuardConfig>,
}

impl RouteGuard {
    pub fn new(config: Arc<GuardConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// 요청 하나에 대한 판정을 내립니다.
    ///
    /// # Arguments
    ///
    /// * `path` - 요청 경로
    /// * `token` - 쿠키에서 읽은 토큰 (빈 문자열은 없는 것으로 취급)
    /// * `now` - 현재 시각 (Unix timestamp, 초)
    pub fn evaluate(&self, path: &str, token: Option<&str>, now: i64) -> GuardDecision {
        if is_static_asset(path) || self.config.is_login_path(path) {
            return GuardDecision::Continue;
        }

        let Some(rule) = self.config.matching_rule(path) else {
            return GuardDecision::Continue;
        };

        match self.authorize(rule, token, now) {
            Ok(user) => {
                log::info!(
                    "✅ {} ({}) 접근 허용: {}",
                    user.username,
                    join_roles(&user),
                    path
                );
                GuardDecision::ContinueWithIdentity(user)
            }
            Err(err) => {
                log::warn!("❌ {} 접근 거부: {}", path, err);
                if let GuardError::InsufficientRole { .. } = err {
                    log::warn!("   필요 역할: {:?}", rule.allowed_roles);
                }
                self.decision_for(err)
            }
        }
    }

    fn authorize(
        &self,
        rule: &RouteRule,
        token: Option<&str>,
        now: i64,
    ) -> Result<AuthenticatedUser, GuardError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(GuardError::MissingToken)?;

        let claims = decode_claims(token)?;

        if claims.is_expired(now) {
            return Err(GuardError::ExpiredToken {
                exp: claims.exp.unwrap_or_default(),
                now,
            });
        }

        if rule.admits(&claims.roles) {
            return Ok(claims.into_user());
        }

        let username = claims.display_username().to_string();
        match self.config.home_for(&claims.roles) {
            Some(home) => Err(GuardError::InsufficientRole {
                username,
                home: home.to_string(),
            }),
            None => Err(GuardError::UnrecognizedRole { username }),
        }
    }

    fn decision_for(&self, err: GuardError) -> GuardDecision {
        let login_page = self.config.login_page.clone();

        match err {
            GuardError::InsufficientRole { home, .. } => GuardDecision::RedirectTo(home),
            err if err.clears_credential() => GuardDecision::ClearCredentialAndRedirect(login_page),
            _ => GuardDecision::RedirectTo(login_page),
        }
    }
}

fn join_roles(user: &AuthenticatedUser) -> String {
    user.roles.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;
    use serde_json::{json, Value};

    const NOW: i64 = 1_750_000_000;

    fn guard() -> RouteGuard {
        RouteGuard::new(Arc::new(GuardConfig::default()))
    }

    fn token(payload: Value) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.signature",
            URL_SAFE_NO_PAD.encode(payload.to_string())
        )
    }

    fn login() -> GuardDecision {
        GuardDecision::ClearCredentialAndRedirect("/login".to_string())
    }

    #[test]
    fn test_static_assets_always_continue() {
        let guard = guard();
        let garbage = "garbage";

        for path in ["/admin/logo.png", "/cuisine/app.JS", "/livraison/fonts/a.woff2"] {
            assert_eq!(guard.evaluate(path, None, NOW), GuardDecision::Continue);
            assert_eq!(guard.evaluate(path, Some(garbage), NOW), GuardDecision::Continue);
        }
    }

    #[test]
    fn test_unprotected_routes_need_no_token() {
        let guard = guard();

        for path in ["/", "/menu", "/suivi/A12", "/administration", "/manifest.json"] {
            assert_eq!(guard.evaluate(path, None, NOW), GuardDecision::Continue);
        }
    }

    #[test]
    fn test_login_pages_are_exempt() {
        let guard = guard();

        assert_eq!(guard.evaluate("/login", None, NOW), GuardDecision::Continue);
        assert_eq!(guard.evaluate("/login/", None, NOW), GuardDecision::Continue);
    }

    #[test]
    fn test_missing_token_redirects_to_login() {
        let guard = guard();

        assert_eq!(
            guard.evaluate("/admin", None, NOW),
            GuardDecision::RedirectTo("/login".to_string())
        );
        assert_eq!(
            guard.evaluate("/cuisine/commandes", Some(""), NOW),
            GuardDecision::RedirectTo("/login".to_string())
        );
    }

    #[test]
    fn test_malformed_token_clears_credential() {
        let guard = guard();

        assert_eq!(guard.evaluate("/admin", Some("abc"), NOW), login());
        assert_eq!(guard.evaluate("/admin", Some("a.%%%.c"), NOW), login());
        assert_eq!(
            guard.evaluate("/admin", Some(&format!("a.{}.c", URL_SAFE_NO_PAD.encode("[1,"))), NOW),
            login()
        );
    }

    #[test]
    fn test_expired_token_clears_credential_even_with_role() {
        let guard = guard();
        let expired = token(json!({"username": "root", "roles": ["admin"], "exp": NOW - 1}));

        assert_eq!(guard.evaluate("/admin", Some(&expired), NOW), login());
    }

    #[test]
    fn test_string_exp_in_the_past_clears_credential() {
        let guard = guard();
        let expired = token(json!({"username": "root", "roles": ["admin"], "exp": (NOW - 1).to_string()}));

        assert_eq!(guard.evaluate("/admin", Some(&expired), NOW), login());
    }

    #[test]
    fn test_token_expiring_now_is_still_valid() {
        let guard = guard();
        let edge = token(json!({"username": "root", "roles": ["admin"], "exp": NOW}));

        assert!(guard.evaluate("/admin", Some(&edge), NOW).is_continue());
    }

    #[test]
    fn test_chef_reaches_kitchen_with_identity() {
        let guard = guard();
        let chef = token(json!({
            "username": "marco",
            "roles": ["chef"],
            "name": "Marco",
            "restaurant": "rare-burger",
            "exp": NOW + 3600
        }));

        match guard.evaluate("/cuisine", Some(&chef), NOW) {
            GuardDecision::ContinueWithIdentity(user) => {
                assert_eq!(user.username, "marco");
                assert_eq!(user.roles.iter().collect::<Vec<_>>(), vec!["chef"]);
                assert_eq!(user.name, "Marco");
                assert_eq!(user.restaurant, "rare-burger");
            }
            other => panic!("expected identity, got {:?}", other),
        }
    }

    #[test]
    fn test_livreur_on_admin_goes_to_delivery() {
        let guard = guard();
        let livreur = token(json!({"username": "paul", "roles": ["livreur"]}));

        assert_eq!(
            guard.evaluate("/admin", Some(&livreur), NOW),
            GuardDecision::RedirectTo("/livraison".to_string())
        );
    }

    #[test]
    fn test_chef_on_delivery_goes_to_kitchen() {
        let guard = guard();
        let chef = token(json!({"username": "marco", "roles": ["chef", "livreur-stagiaire"]}));

        assert_eq!(
            guard.evaluate("/livraison/tournee", Some(&chef), NOW),
            GuardDecision::RedirectTo("/cuisine".to_string())
        );
    }

    #[test]
    fn test_no_recognized_role_clears_credential() {
        let guard = guard();

        assert_eq!(guard.evaluate("/admin", Some(&token(json!({"roles": []}))), NOW), login());
        assert_eq!(guard.evaluate("/admin", Some(&token(json!({}))), NOW), login());
        assert_eq!(
            guard.evaluate("/admin", Some(&token(json!({"roles": ["client"]}))), NOW),
            login()
        );
    }

    #[test]
    fn test_missing_username_defaults_to_unknown() {
        let guard = guard();

        match guard.evaluate("/admin", Some(&token(json!({"roles": ["admin"]}))), NOW) {
            GuardDecision::ContinueWithIdentity(user) => {
                assert_eq!(user.username, "unknown");
                assert_eq!(user.name, "unknown");
                assert_eq!(user.restaurant, "unknown");
            }
            other => panic!("expected identity, got {:?}", other),
        }
    }

    #[test]
    fn test_decision_is_idempotent() {
        let guard = guard();
        let inputs = [
            ("/admin", Some(token(json!({"roles": ["chef"]})))),
            ("/cuisine", Some(token(json!({"roles": ["chef"]})))),
            ("/livraison", None),
            ("/admin", Some("broken".to_string())),
        ];

        for (path, tok) in inputs.iter() {
            let first = guard.evaluate(path, tok.as_deref(), NOW);
            let second = guard.evaluate(path, tok.as_deref(), NOW);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_presence_only_configuration() {
        let config = GuardConfig::default().with_routes(vec![RouteRule::new("/admin", &[])]);
        let guard = RouteGuard::new(Arc::new(config));

        assert!(guard.evaluate("/admin", Some(&token(json!({}))), NOW).is_continue());
        assert_eq!(
            guard.evaluate("/admin", None, NOW),
            GuardDecision::RedirectTo("/login".to_string())
        );
        assert_eq!(guard.evaluate("/cuisine", None, NOW), GuardDecision::Continue);
    }
}
