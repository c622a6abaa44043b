//! Shared test infrastructure: a stub Harvest API served on an ephemeral
//! port, plus helpers for assembling the app under test.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

use harvestboard::config::AppConfig;
use harvestboard::harvest::HarvestClient;

pub const ACCESS_KEY: &str = "test-access-key";

/// Body returned by a failing stub endpoint.
pub const STUB_FAILURE_BODY: &str = "stub upstream failure";

pub fn test_config() -> AppConfig {
    AppConfig {
        app_name: "Harvest Project Tracker".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        access_key: ACCESS_KEY.to_string(),
    }
}

pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

pub fn harvest_client(base_url: &str) -> HarvestClient {
    HarvestClient::new(base_url, "test-token".to_string(), "12345".to_string())
}

/// Canned Harvest API answers; `fail` makes one endpoint return an error
/// status instead of its body.
pub struct HarvestStub {
    pub profile: Value,
    pub report: Value,
    pub entries: Value,
    pub fail: Option<(&'static str, u16)>,
}

impl HarvestStub {
    pub fn ok(profile: Value, report: Value, entries: Value) -> Self {
        Self {
            profile,
            report,
            entries,
            fail: None,
        }
    }

    pub fn failing(endpoint: &'static str, status: u16) -> Self {
        Self {
            profile: json!({"first_name": "A", "last_name": "B", "email": "a@b.com"}),
            report: json!({"results": []}),
            entries: json!({"time_entries": []}),
            fail: Some((endpoint, status)),
        }
    }
}

fn respond(stub: &HarvestStub, endpoint: &'static str, body: &Value) -> HttpResponse {
    if let Some((failing, status)) = stub.fail {
        if failing == endpoint {
            return HttpResponse::build(
                StatusCode::from_u16(status).expect("valid stub status"),
            )
            .body(STUB_FAILURE_BODY);
        }
    }
    HttpResponse::Ok().json(body)
}

async fn stub_profile(stub: web::Data<HarvestStub>) -> HttpResponse {
    respond(&stub, "profile", &stub.profile)
}

async fn stub_report(stub: web::Data<HarvestStub>) -> HttpResponse {
    respond(&stub, "report", &stub.report)
}

async fn stub_entries(stub: web::Data<HarvestStub>) -> HttpResponse {
    respond(&stub, "entries", &stub.entries)
}

/// Start the stub on 127.0.0.1:0 and return its base URL.
pub async fn spawn_stub(stub: HarvestStub) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");

    let data = web::Data::new(stub);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/api/v2/users/me.json", web::get().to(stub_profile))
            .route("/api/v2/reports/project_budget", web::get().to(stub_report))
            .route("/api/v2/time_entries", web::get().to(stub_entries))
    })
    .listen(listener)
    .expect("listen on stub socket")
    .workers(1)
    .run();

    actix_web::rt::spawn(server);
    format!("http://{addr}")
}

/// Pull the CSRF token out of a rendered form.
pub fn extract_csrf(html: &str) -> String {
    let re = regex::Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(html).expect("csrf token in page")[1].to_string()
}

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

pub fn yesterday() -> String {
    (chrono::Local::now() - chrono::Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}
