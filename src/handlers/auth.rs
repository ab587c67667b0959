//! # 로그인 / 로그아웃 핸들러
//!
//! 토큰 발급은 CMDOLA API(`POST /auth/login`)가 담당하고,
//! 이 핸들러는 받은 토큰을 쿠키로 저장한 뒤 역할에 맞는 화면으로 보냅니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/login` | 로그인 폼 |
//! | `POST` | `/login` | 로그인 후 역할 홈으로 302 |
//! | `POST` | `/logout` | 쿠키 삭제 후 `/login`으로 302 |
//!
//! ```text
//! 브라우저 ── POST /login ──► cmdola_web ── POST /auth/login ──► CMDOLA API
//!          ◄─ 302 /cuisine ──  Set-Cookie   ◄─ {token, roles} ──
//! ```

use std::collections::BTreeSet;

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header::LOCATION;
use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::config::{Environment, GuardConfig};
use crate::domain::dto::LoginForm;
use crate::errors::AppError;
use crate::services::api::CmdolaApi;

#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    pub error: Option<String>,
}

/// `GET /login` - 최소한의 HTML 로그인 폼
#[get("/login")]
pub async fn login_page(query: web::Query<LoginPageQuery>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_login_page(query.error.as_deref()))
}

/// `POST /login` - 로그인 처리
///
/// # Errors
///
/// * `AppError::ValidationError` - 빈 사용자명 또는 비밀번호
/// * `AppError::ApiError` / `ExternalServiceError` - 인증 외의 API 오류
#[post("/login")]
pub async fn login(
    form: web::Form<LoginForm>,
    api: web::Data<CmdolaApi>,
    config: web::Data<GuardConfig>,
) -> Result<HttpResponse, AppError> {
    form.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let session = match api.auth().login(&form.username, &form.password).await {
        Ok(session) => session,
        Err(AppError::ApiError { status, message }) if matches!(status, 400 | 401 | 403) => {
            log::warn!("❌ 로그인 실패 - 사용자: {}, 사유: {}", form.username, message);
            return Ok(redirect(&format!("{}?error=invalid", config.login_page)));
        }
        Err(e) => return Err(e),
    };

    let roles: BTreeSet<String> = session.roles.iter().cloned().collect();

    let Some(home) = config.home_for(&roles) else {
        log::warn!(
            "❌ 로그인 성공했지만 알려진 역할 없음 - 사용자: {}, 역할: {:?}",
            session.username,
            session.roles
        );
        return Ok(redirect(&format!("{}?error=role", config.login_page)));
    };

    log::info!("🔐 로그인 성공 - 사용자: {}, 이동: {}", session.username, home);

    let cookie = Cookie::build(config.cookie_name.clone(), session.token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(Environment::current().is_production())
        .finish();

    Ok(HttpResponse::Found()
        .insert_header((LOCATION, home.to_string()))
        .cookie(cookie)
        .finish())
}

/// `POST /logout` - 토큰 쿠키를 삭제하고 로그인 페이지로 이동
#[post("/logout")]
pub async fn logout(config: web::Data<GuardConfig>) -> HttpResponse {
    let mut removal = Cookie::build(config.cookie_name.clone(), "")
        .path("/")
        .finish();
    removal.make_removal();

    HttpResponse::Found()
        .insert_header((LOCATION, config.login_page.clone()))
        .cookie(removal)
        .finish()
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location.to_string()))
        .finish()
}

fn render_login_page(error: Option<&str>) -> String {
    let notice = match error {
        Some("role") => r#"<p class="error">Aucun rôle reconnu pour ce compte.</p>"#,
        Some(_) => r#"<p class="error">Identifiants invalides.</p>"#,
        None => "",
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<link rel="manifest" href="/manifest.json">
<title>CMDOLA - Connexion</title>
</head>
<body>
<main>
<h1>Connexion</h1>
{notice}
<form method="post" action="/login">
<label>Utilisateur <input name="username" autocomplete="username" required></label>
<label>Mot de passe <input name="password" type="password" autocomplete="current-password" required></label>
<button type="submit">Se connecter</button>
</form>
</main>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_without_error() {
        let html = render_login_page(None);

        assert!(html.contains(r#"action="/login""#));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_login_page_with_error() {
        assert!(render_login_page(Some("invalid")).contains("Identifiants invalides"));
        assert!(render_login_page(Some("role")).contains("Aucun rôle"));
    }
}
