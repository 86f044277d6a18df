mod common;

use actix_web::{http::StatusCode, test};
use careerhub::utils::token::TokenService;
use common::{client::TestClient, test_data, test_jwt_config, TestContext};

#[tokio::test]
async fn test_register_then_login_roundtrip() {
    println!("\n\n[+] Running test: test_register_then_login_roundtrip");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let manager_data = test_data::sample_manager_with_email("login@example.com");
    let req = test::TestRequest::post()
        .uri("/api/v1/managers")
        .set_json(&manager_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let manager_id = created["id"].as_str().unwrap().to_string();

    // same credentials, differently-cased email
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "Login@Example.COM",
            "password": "pw123456"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Login returned status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert!(body["expiresAt"].is_string());

    // the claimed subject is the registered id
    let claims = TokenService::new(test_jwt_config()).verify(token).unwrap();
    assert_eq!(claims.sub.to_string(), manager_id);
    assert_eq!(claims.email, "login@example.com");
    println!("[/] Test passed: register/login roundtrip with matching subject.");
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    println!("\n\n[+] Running test: test_login_failures_are_uniform");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.seed_manager("known@example.com").await;

    // wrong password for a known user
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "known@example.com",
            "password": "wrong-password"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: serde_json::Value = test::read_body_json(resp).await;

    // unknown email entirely
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "nobody@example.com",
            "password": "pw123456"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_email: serde_json::Value = test::read_body_json(resp).await;

    // indistinguishable bodies, no enumeration signal
    assert_eq!(wrong_password, unknown_email);
    println!("[/] Test passed: login failures are uniform.");
}

#[tokio::test]
async fn test_validate_endpoint_accepts_fresh_token() {
    println!("\n\n[+] Running test: test_validate_endpoint_accepts_fresh_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.seed_manager("fresh@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "fresh@example.com",
            "password": "pw123456"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/validate")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    println!("[/] Test passed: fresh token validates.");
}

#[tokio::test]
async fn test_validate_endpoint_rejects_garbage_token() {
    println!("\n\n[+] Running test: test_validate_endpoint_rejects_garbage_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/validate")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: garbage token rejected.");
}
