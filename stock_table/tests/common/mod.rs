//! Shared helpers: a `wiremock` quote endpoint and a bridge for running the
//! blocking client off the async test runtime.
#![allow(dead_code)]
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the quote endpoint is mounted on.
pub const STOCKS_PATH: &str = "/stocks";

/// URL of the quote endpoint on `server`.
pub fn stocks_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), STOCKS_PATH)
}

fn answer(status: u16, body: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path(STOCKS_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json"))
}

/// Answer the next matching request with `status` and `body`. Answers mounted
/// earlier are used up first.
pub async fn answer_once(server: &MockServer, status: u16, body: &str) {
    answer(status, body).up_to_n_times(1).mount(server).await;
}

/// Answer every remaining request with `status` and `body`.
pub async fn answer_always(server: &MockServer, status: u16, body: &str) {
    answer(status, body).mount(server).await;
}

/// Run blocking client code on the blocking pool so the mock server keeps serving.
pub async fn blocking<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}
