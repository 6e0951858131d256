use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

use rebate_survey::config::Config;
use rebate_survey::store::{JsonFileStore, ResponseStore};

/// A running test server instance backed by its own data file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<JsonFileStore>,
    // Held so the data directory outlives the server.
    _data_dir: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit form-urlencoded data, return (html, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// Submit a JSON body, return (html, status).
    pub async fn submit_json(&self, data: &Value) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// GET a page, return (text, status).
    pub async fn get_text(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// GET the dashboard tallies as JSON.
    pub async fn dashboard(&self) -> Value {
        let resp = self
            .client
            .get(self.url("/dashboard.json"))
            .send()
            .await
            .expect("dashboard request failed");
        assert_eq!(resp.status(), StatusCode::OK, "dashboard non-200");
        resp.json().await.unwrap_or(json!(null))
    }

    pub async fn record_count(&self) -> usize {
        self.store.load().await.len()
    }
}

/// The scenario submission used across tests.
#[allow(dead_code)]
pub fn scenario_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("companySize", "10-50"),
        ("state", "CA"),
        ("usesRebates", "Yes"),
        ("avgProjectSize", "$5k–$25k"),
        ("barriers", "Cost"),
        ("barriers", "Paperwork"),
        ("whoFiles", "Contractor"),
        ("findRebates", "Website"),
        ("email", "a@b.com"),
    ]
}

/// Spawn a test app on a random port with a fresh data file.
pub async fn spawn_app() -> TestApp {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_path = data_dir.path().join("data").join("responses.json");

    let app = serve(data_dir, data_path).await;
    app.store.init().await.expect("Failed to init store");
    app
}

/// Spawn a test app whose data file sits under a regular file, so every
/// write fails.
#[allow(dead_code)]
pub async fn spawn_app_with_unwritable_store() -> TestApp {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let blocker = data_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").expect("Failed to create blocker file");

    serve(data_dir, blocker.join("responses.json")).await
}

async fn serve(data_dir: TempDir, data_path: PathBuf) -> TestApp {
    let store = Arc::new(JsonFileStore::new(&data_path));

    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        data_path,
        static_dir: PathBuf::from("static"),
        max_body_size: 65_536,
        log_level: "warn".to_string(),
    };

    let app = rebate_survey::build_app(&config, store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        store,
        _data_dir: data_dir,
    }
}

/// Split CSV text into rows of unquoted cells.
#[allow(dead_code)]
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            ('"', _) => in_quotes = !in_quotes,
            (',', false) => row.push(std::mem::take(&mut cell)),
            ('\n', false) => {
                row.push(std::mem::take(&mut cell));
                rows.push(std::mem::take(&mut row));
            }
            (c, _) => cell.push(c),
        }
    }
    row.push(cell);
    rows.push(row);
    rows
}
