//! Tests de integración de la API HTTP
//!
//! Usan un pool lazy apuntando a un puerto cerrado: las rutas que no
//! tocan el almacén (validación, auth, health) se comprueban de punta a
//! punta, y las lecturas públicas de catálogo deben caer a las fixtures.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use limo_reservations::config::database::DatabaseConfig;
use limo_reservations::config::environment::EnvironmentConfig;
use limo_reservations::middleware::auth::generate_jwt_token;
use limo_reservations::models::auth::{AdminUser, ADMIN_ROLE};
use limo_reservations::routes::create_router;
use limo_reservations::state::AppState;

fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 3000,
        host: "127.0.0.1".to_string(),
        jwt_secret: "integration-test-secret".to_string(),
        jwt_expiration: 3600,
        cors_origins: vec!["*".to_string()],
        notify_api_key: None,
        notify_api_url: "https://api.resend.com/emails".to_string(),
        notify_from: "from@example.com".to_string(),
        notify_to: "to@example.com".to_string(),
        upload_dir: "uploads".to_string(),
    }
}

fn test_app() -> axum::Router {
    // Puerto 1 cerrado: cualquier query real falla de inmediato
    let db = DatabaseConfig {
        url: "postgres://postgres@127.0.0.1:1/unreachable".to_string(),
        ..DatabaseConfig::default()
    };
    let pool = db.create_test_pool().expect("lazy pool");
    create_router(AppState::new(pool, test_config()))
}

fn bearer_token(role: &str) -> String {
    let user = AdminUser {
        id: Uuid::new_v4(),
        email: "admin@americanroyaltylv.com".to_string(),
        name: "Admin".to_string(),
        hashed_password: "irrelevant".to_string(),
        role: role.to_string(),
        created_at: chrono::Utc::now(),
    };
    let (token, _) = generate_jwt_token(&user, &test_config()).expect("token");
    format!("Bearer {}", token)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_returns_ok() {
    let response = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_fleet_falls_back_to_fixtures_when_storage_is_down() {
    let response = test_app()
        .oneshot(Request::get("/api/fleet").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let fleet = body.as_array().expect("array");
    assert!(!fleet.is_empty());
    assert!(fleet.iter().any(|v| v["slug"] == "the-sovereign"));
}

#[tokio::test]
async fn test_vehicle_detail_served_from_fixtures() {
    let response = test_app()
        .oneshot(
            Request::get("/api/fleet/the-sovereign")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["slug"], "the-sovereign");
    assert_eq!(body["type"], "Party Bus");
}

#[tokio::test]
async fn test_unknown_vehicle_slug_is_404() {
    let response = test_app()
        .oneshot(
            Request::get("/api/fleet/the-phantom")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_featured_testimonials_are_filtered() {
    let response = test_app()
        .oneshot(
            Request::get("/api/testimonials?featured=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let testimonials = body.as_array().expect("array");
    assert!(!testimonials.is_empty());
    assert!(testimonials.iter().all(|t| t["is_featured"] == true));
}

#[tokio::test]
async fn test_quote_submission_with_bad_email_is_rejected() {
    let payload = json!({
        "name": "Jessica L.",
        "email": "not-an-email",
        "phone": "7025559999",
        "event_type": "Bachelorette Party",
        "event_date": "2026-06-01"
    });

    let response = test_app()
        .oneshot(
            Request::post("/api/quotes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quote_submission_with_bad_date_is_rejected() {
    let payload = json!({
        "name": "Jessica L.",
        "email": "jessica@example.com",
        "phone": "7025559999",
        "event_type": "Bachelorette Party",
        "event_date": "06/01/2026"
    });

    let response = test_app()
        .oneshot(
            Request::post("/api/quotes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["event_date"].is_array());
}

#[tokio::test]
async fn test_quote_submission_with_missing_fields_is_rejected() {
    let payload = json!({ "name": "Jessica L." });

    let response = test_app()
        .oneshot(
            Request::post("/api/quotes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_contact_message_too_short_is_rejected() {
    let payload = json!({
        "name": "Tyler M.",
        "email": "tyler@example.com",
        "message": "hi"
    });

    let response = test_app()
        .oneshot(
            Request::post("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_routes_require_a_token() {
    let response = test_app()
        .oneshot(Request::get("/api/admin/quotes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let response = test_app()
        .oneshot(
            Request::get("/api/admin/quotes")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_admin_role_is_forbidden() {
    let response = test_app()
        .oneshot(
            Request::get("/api/admin/quotes")
                .header(header::AUTHORIZATION, bearer_token("VIEWER"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_fleet_slug_format_is_rejected_before_storage() {
    let payload = json!({
        "name": "The Phantom",
        "slug": "The Phantom!!",
        "type": "SUV",
        "capacity": 6,
        "hourly_rate": "150.00",
        "min_hours": 3,
        "description": "Blacked-out executive SUV."
    });

    let response = test_app()
        .oneshot(
            Request::post("/api/admin/fleet")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, bearer_token(ADMIN_ROLE))
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["slug"].is_array());
}

fn multipart_body(boundary: &str, filename: &str, content_type: &str, payload: &str) -> String {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\n\
         Content-Type: {c}\r\n\r\n{p}\r\n--{b}--\r\n",
        b = boundary,
        f = filename,
        c = content_type,
        p = payload
    )
}

#[tokio::test]
async fn test_upload_requires_a_token() {
    let boundary = "xyzboundary";
    let response = test_app()
        .oneshot(
            Request::post("/api/admin/upload")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(multipart_body(boundary, "bus.png", "image/png", "png")))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_rejects_non_image_files() {
    let boundary = "xyzboundary";
    let response = test_app()
        .oneshot(
            Request::post("/api/admin/upload")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .header(header::AUTHORIZATION, bearer_token(ADMIN_ROLE))
                .body(Body::from(multipart_body(
                    boundary,
                    "contract.pdf",
                    "application/pdf",
                    "not an image",
                )))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["file"].is_array());
}

#[tokio::test]
async fn test_booking_deposit_paid_without_amount_is_rejected() {
    let payload = json!({
        "client_name": "Marcus T.",
        "event_type": "Bachelor Party",
        "booking_date": "2026-06-01",
        "start_time": "21:00",
        "deposit_paid": true
    });

    let response = test_app()
        .oneshot(
            Request::post("/api/admin/bookings")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, bearer_token(ADMIN_ROLE))
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
