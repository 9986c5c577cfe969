use axum::{http::header, response::IntoResponse, routing::get, Router};

pub const WELCOME_HTML: &str = "<h1>Welcome to the DOS lambda,
    send requests to /ga4gh/dos/v1/</h1>";

pub fn welcome_routes() -> Router<()> {
    Router::new().route("/", get(welcome))
}

async fn welcome() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/html")], WELCOME_HTML)
}
