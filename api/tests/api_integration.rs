//! End-to-end tests over the HTTP surface with in-memory backends

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::http::header;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use pf_api::{configure_app, AppState};
use pf_core::errors::DomainResult;
use pf_core::repositories::MockUserRepository;
use pf_core::services::auth::AuthService;
use pf_core::services::document::DocumentService;
use pf_core::services::generation::{GenerationParams, GenerationService, InferenceClient};
use pf_core::services::rate_limit::{MockClock, RateLimiter};
use pf_core::services::token::TokenService;
use pf_infra::pdf::{FileSystemStore, PrintPdfRenderer};
use pf_shared::config::{JwtConfig, RateLimitConfig};

struct StubInference;

#[async_trait::async_trait]
impl InferenceClient for StubInference {
    async fn generate(&self, prompt: &str, _params: &GenerationParams) -> DomainResult<String> {
        // Echo the prompt the way older inference deployments do
        Ok(format!("{prompt}\nStub answer."))
    }
}

struct TestHarness {
    state: web::Data<AppState>,
    clock: MockClock,
    _document_dir: tempfile::TempDir,
}

fn harness() -> TestHarness {
    let document_dir = tempfile::tempdir().unwrap();
    let clock = MockClock::new(0);
    let rate_limits = RateLimitConfig::default();

    let login_limiter = Arc::new(RateLimiter::with_clock(
        rate_limits.login.window_ms,
        rate_limits.max_tracked_keys,
        Arc::new(clock.clone()),
    ));
    let register_limiter = Arc::new(RateLimiter::with_clock(
        rate_limits.register.window_ms,
        rate_limits.max_tracked_keys,
        Arc::new(clock.clone()),
    ));

    let state = web::Data::new(AppState {
        auth: Arc::new(AuthService::new(Arc::new(MockUserRepository::new()))),
        tokens: Arc::new(TokenService::new(&JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_ttl_secs: 3600,
            refresh_token_ttl_secs: 604_800,
        })),
        generation: Arc::new(GenerationService::new(
            Arc::new(StubInference),
            GenerationParams::default(),
        )),
        documents: Arc::new(DocumentService::new(
            Arc::new(PrintPdfRenderer),
            Arc::new(FileSystemStore::new(document_dir.path())),
            "/pdfs",
        )),
        login_limiter,
        register_limiter,
        rate_limits,
        document_dir: PathBuf::from(document_dir.path()),
    });

    TestHarness {
        state,
        clock,
        _document_dir: document_dir,
    }
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .configure(configure_app),
        )
        .await
    };
}

fn register_body(username: &str) -> Value {
    json!({
        "username": username,
        "password": "Str0ngPass",
        "full_name": "Jane Doe",
    })
}

#[actix_rt::test]
async fn register_login_profile_flow() {
    let harness = harness();
    let app = test_app!(harness.state);

    let resp = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("janedoe"))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 201);

    let resp = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "username": "janedoe", "password": "Str0ngPass" }))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 200);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("refresh_token="));
    assert!(set_cookie.contains("HttpOnly"));

    let body: Value = test::read_body_json(resp).await;
    let token = body["data"]["access_token"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["token_type"], "Bearer");
    assert_eq!(body["data"]["user"]["username"], "janedoe");

    let resp = test::TestRequest::get()
        .uri("/api/v1/profile")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["username"], "janedoe");
    assert!(body["data"].get("password_hash").is_none());
}

#[actix_rt::test]
async fn profile_requires_valid_token() {
    let harness = harness();
    let app = test_app!(harness.state);

    let resp = test::TestRequest::get()
        .uri("/api/v1/profile")
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 401);

    let resp = test::TestRequest::get()
        .uri("/api/v1/profile")
        .insert_header((header::AUTHORIZATION, "Bearer not.a.token"))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
async fn login_attempts_are_rate_limited_per_ip() {
    let harness = harness();
    let app = test_app!(harness.state);

    let attempt = |ip: &'static str| {
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .insert_header(("X-Forwarded-For", ip))
            .set_json(json!({ "username": "nobody42", "password": "WrongPass1" }))
    };

    for _ in 0..5 {
        let resp = attempt("203.0.113.9").send_request(&app).await;
        assert_eq!(resp.status(), 401);
    }

    let resp = attempt("203.0.113.9").send_request(&app).await;
    assert_eq!(resp.status(), 429);
    let retry_after: u64 = resp
        .headers()
        .get(header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap();
    assert!(retry_after >= 1 && retry_after <= 60);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "RATE_LIMIT_EXCEEDED");

    // Another client is unaffected
    let resp = attempt("203.0.113.10").send_request(&app).await;
    assert_eq!(resp.status(), 401);

    // After the window rolls over the original client is admitted again
    harness.clock.advance(60_000);
    let resp = attempt("203.0.113.9").send_request(&app).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
async fn registration_is_rate_limited_per_ip() {
    let harness = harness();
    let app = test_app!(harness.state);

    for i in 0..3 {
        let resp = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .insert_header(("X-Forwarded-For", "198.51.100.7"))
            .set_json(register_body(&format!("user{i}name")))
            .send_request(&app)
            .await;
        assert_eq!(resp.status(), 201);
    }

    let resp = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .insert_header(("X-Forwarded-For", "198.51.100.7"))
        .set_json(register_body("user4name"))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 429);
}

#[actix_rt::test]
async fn duplicate_registration_conflicts() {
    let harness = harness();
    let app = test_app!(harness.state);

    let resp = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("janedoe"))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 201);

    let resp = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("JANEDOE"))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 409);
}

#[actix_rt::test]
async fn chat_returns_cleaned_answer() {
    let harness = harness();
    let app = test_app!(harness.state);

    let resp = test::TestRequest::post()
        .uri("/api/v1/chat")
        .set_json(json!({ "topic": "Why is the sky blue?" }))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["response"], "Stub answer.");
}

#[actix_rt::test]
async fn document_can_be_created_and_fetched() {
    let harness = harness();
    let app = test_app!(harness.state);

    let resp = test::TestRequest::post()
        .uri("/api/v1/documents")
        .set_json(json!({ "title": "Answer", "content": "Rayleigh scattering." }))
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    let url = body["data"]["pdf_url"].as_str().unwrap().to_string();
    assert!(url.starts_with("/pdfs/"));
    assert!(url.ends_with(".pdf"));

    let resp = test::TestRequest::get().uri(&url).send_request(&app).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    let bytes = test::read_body(resp).await;
    assert!(bytes.starts_with(b"%PDF"));
}

#[actix_rt::test]
async fn document_fetch_rejects_traversal() {
    let harness = harness();
    let app = test_app!(harness.state);

    let resp = test::TestRequest::get()
        .uri("/pdfs/..%2Fsecrets.pdf")
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn health_endpoint() {
    let harness = harness();
    let app = test_app!(harness.state);

    let resp = test::TestRequest::get()
        .uri("/health")
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 200);
}
