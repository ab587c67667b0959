mod common;

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cmdola_web::domain::dto::{ArchiveStatus, Period};
use cmdola_web::errors::AppError;

use common::api_for;

#[tokio::test]
async fn test_login_posts_credentials_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"username": "marco", "password": "pizza"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "token": "a.b.c",
            "username": "marco",
            "name": "Marco",
            "roles": ["chef"],
            "restaurant": {"id": "rare-burger", "nom": "Rare Burger"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&format!("{}/api", server.uri()));
    let session = api.auth().login("marco", "pizza").await.unwrap();

    assert_eq!(session.token, "a.b.c");
    assert_eq!(session.roles, vec!["chef"]);
    assert_eq!(session.restaurant.unwrap().nom, "Rare Burger");
}

#[tokio::test]
async fn test_bearer_token_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "root",
            "roles": ["admin"],
            "name": "Root",
            "restaurant": "rare-burger"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let me = api_for(&server.uri())
        .with_token("tok-123")
        .auth()
        .me()
        .await
        .unwrap();

    assert_eq!(me.username, "root");
}

#[tokio::test]
async fn test_error_field_is_reported_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Identifiants invalides"})),
        )
        .mount(&server)
        .await;

    let err = api_for(&server.uri())
        .auth()
        .login("x", "y")
        .await
        .unwrap_err();

    match err {
        AppError::ApiError { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Identifiants invalides");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_message_field_and_status_fallbacks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commandes/42"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Commande introuvable"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/menu"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let api = api_for(&server.uri());

    let err = api.commandes().get("42").await.unwrap_err();
    assert_eq!(err.api_message(), Some("Commande introuvable"));

    let err = api.menu().get().await.unwrap_err();
    assert_eq!(err.api_message(), Some("HTTP 503: Service Unavailable"));
}

#[tokio::test]
async fn test_json_error_without_known_fields_is_generic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let err = api_for(&server.uri()).stats().general().await.unwrap_err();

    assert!(matches!(err, AppError::ApiError { status: 500, .. }));
    assert_eq!(err.api_message(), Some("Erreur API"));
}

#[tokio::test]
async fn test_unreachable_api_is_external_service_error() {
    let api = api_for("http://127.0.0.1:1/api");

    let err = api.health().check().await.unwrap_err();

    assert!(matches!(err, AppError::ExternalServiceError(_)));
}

#[tokio::test]
async fn test_archive_filters_are_sent_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commandes/archives"))
        .and(query_param("period", "week"))
        .and(query_param("statut", "terminee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "commandes": [{"numero": "A1"}, {"numero": "A2"}],
            "total": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let archives = api_for(&server.uri())
        .commandes()
        .list_archives(Some(Period::Week), Some(ArchiveStatus::Terminee))
        .await
        .unwrap();

    assert_eq!(archives.total, 2);
    assert_eq!(archives.commandes[1]["numero"], "A2");
}

#[tokio::test]
async fn test_status_update_and_tracking() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/commandes/c-7/status"))
        .and(body_json(json!({"statut": "prete"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commandes/track/2024-001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statut": "en_livraison"})))
        .mount(&server)
        .await;

    let api = api_for(&server.uri()).with_token("t");

    assert_eq!(
        api.commandes().update_status("c-7", "prete").await.unwrap(),
        json!({"ok": true})
    );
    assert_eq!(
        api.commandes().track("2024-001").await.unwrap()["statut"],
        "en_livraison"
    );
}

#[tokio::test]
async fn test_empty_delete_response_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/menu/burger%201"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let result: Value = api_for(&server.uri())
        .menu()
        .delete_product("burger 1")
        .await
        .unwrap();

    assert_eq!(result, Value::Null);
}

#[tokio::test]
async fn test_image_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-image"))
        .and(header("authorization", "Bearer admin-token"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"filename": "logo.png"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server.uri()).with_token("admin-token");
    let uploaded = api
        .images()
        .upload("logo.png", vec![0x89, 0x50, 0x4e, 0x47], "image/png")
        .await
        .unwrap();

    assert_eq!(uploaded["filename"], "logo.png");
    assert_eq!(
        api.images().url("logo.png"),
        format!("{}/images/logo.png", server.uri())
    );
}

#[tokio::test]
async fn test_checkout_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stripe/create-checkout-session"))
        .and(body_json(json!({"order_id": "c-9"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_id": "cs_test_1",
            "url": "https://checkout.stripe.com/c/pay/cs_test_1"
        })))
        .mount(&server)
        .await;

    let session = api_for(&server.uri())
        .stripe()
        .create_checkout_session("c-9")
        .await
        .unwrap();

    assert_eq!(session.session_id, "cs_test_1");
}

#[tokio::test]
async fn test_config_update_and_deep_health() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/config"))
        .and(body_json(json!({"nom": "Rare Burger"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nom": "Rare Burger"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(query_param("deep", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"database": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server.uri());

    api.config().update(&json!({"nom": "Rare Burger"})).await.unwrap();
    assert_eq!(api.health().check_deep().await.unwrap()["database"], "ok");
}
