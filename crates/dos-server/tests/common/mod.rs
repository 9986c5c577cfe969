//! Shared harness for DOS server integration tests
//!
//! Starts a wiremock server that behaves like the parts of the GDC API the
//! adapter calls, and builds the real router against it.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::MockGdc;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let gdc = MockGdc::start(12).await;
//!     let app = gdc.app();
//!     let (status, body) = common::send(&app, common::list_request(serde_json::json!({}))).await;
//! }
//! ```
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use dos_server::{api, config::Config};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path, path_regex},
    Mock, MockServer, Respond, ResponseTemplate,
};

/// GDC's page size when the query carries none
pub const GDC_DEFAULT_PAGE_SIZE: usize = 10;

pub const SWAGGER_YAML: &str = r#"
swagger: '2.0'
basePath: '/ga4gh/dos/v1'
info:
  title: Data Object Service
  version: 0.3.0
paths:
  /dataobjects/{data_object_id}:
    get:
      responses:
        200:
          description: The Data Object was found successfully.
"#;

/// A GDC file record as the `files` endpoint returns it
pub fn gdc_record(n: usize) -> Value {
    json!({
        "file_id": format!("file-{:04}", n),
        "file_name": format!("sample-{:04}.bam", n),
        "file_size": 1_000_000 + n,
        "updated_datetime": "2018-05-16T09:20:49.498566-05:00",
        "md5sum": format!("{:032x}", n),
        "data_format": "BAM",
        "access": "controlled",
        "state": "released"
    })
}

/// Serves `GET /files/` like GDC: `from`/`size` offsets over a fixed record set
struct FilesPager {
    records: Arc<Vec<Value>>,
}

impl Respond for FilesPager {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        let mut from = 0usize;
        let mut size = GDC_DEFAULT_PAGE_SIZE;

        for (key, value) in request.url.query_pairs() {
            let parsed = value.parse::<usize>();
            match (key.as_ref(), parsed) {
                ("from", Ok(v)) => from = v,
                ("size", Ok(v)) => size = v,
                ("from", Err(_)) | ("size", Err(_)) => {
                    return ResponseTemplate::new(400).set_body_json(json!({
                        "message": format!("Invalid value for {}: {}", key, value)
                    }));
                },
                _ => {},
            }
        }

        let total = self.records.len();
        let start = from.min(total);
        let end = from.saturating_add(size).min(total);
        let hits = &self.records[start..end];

        ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "hits": hits,
                "pagination": {
                    "count": hits.len(),
                    "sort": "",
                    "from": from,
                    "page": if size == 0 { 1 } else { from / size + 1 },
                    "total": total,
                    "pages": if size == 0 { 1 } else { total.div_ceil(size) },
                    "size": size
                }
            },
            "warnings": {}
        }))
    }
}

/// Serves `GET /files/{id}`: the record, or GDC's 404 body
struct FileLookup {
    records: Arc<Vec<Value>>,
}

impl Respond for FileLookup {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        let id = request.url.path().trim_start_matches("/files/");
        match self.records.iter().find(|r| r["file_id"] == id) {
            Some(record) => ResponseTemplate::new(200)
                .set_body_json(json!({ "data": record, "warnings": {} })),
            None => ResponseTemplate::new(404)
                .set_body_json(json!({ "message": format!("{} not found", id) })),
        }
    }
}

/// Mock GDC API seeded with `total` records
pub struct MockGdc {
    pub server: MockServer,
    pub records: Arc<Vec<Value>>,
}

impl MockGdc {
    pub async fn start(total: usize) -> Self {
        let server = MockServer::start().await;
        let records = Arc::new((0..total).map(gdc_record).collect::<Vec<_>>());

        Mock::given(method("GET"))
            .and(path("/files/"))
            .respond_with(FilesPager {
                records: records.clone(),
            })
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/files/[^/]+$"))
            .respond_with(FileLookup {
                records: records.clone(),
            })
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/swagger.yaml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SWAGGER_YAML))
            .mount(&server)
            .await;

        Self { server, records }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.gdc.base_url = self.uri();
        config.gdc.timeout_secs = 5;
        config.swagger.url = format!("{}/swagger.yaml", self.uri());
        config
    }

    pub fn app(&self) -> Router {
        api::create_router(&self.config()).expect("router should build")
    }
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

pub fn list_request(body: Value) -> Request<Body> {
    raw_list_request(body.to_string())
}

pub fn raw_list_request(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/ga4gh/dos/v1/dataobjects/list")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .expect("valid request")
}

/// Run one request through the router and decode the JSON body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("body should be JSON")
    };
    (status, json)
}
