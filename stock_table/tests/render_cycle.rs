//! Full render cycles against a mocked quote endpoint.
mod common;

use std::fs;
use std::time::Duration;

use common::{answer_always, answer_once, blocking, stocks_url};
use stock_common::{BoardError, ChangeClass, QuoteFormatter, StockQuote, TableRow};
use stock_table::{
    FailurePolicy, HtmlTable, HttpQuoteSource, QuoteSource, StockTableRenderer, TableBody,
};
use test_case::test_case;
use wiremock::MockServer;

const EXAMPLE: &str = r#"[{"ticker":"BBB","price":20,"volume":2000,"change":-0.5},
                          {"ticker":"AAA","price":10,"volume":1000,"change":1.2}]"#;

fn source(url: &str) -> HttpQuoteSource {
    HttpQuoteSource::new(url, Some(Duration::from_secs(5))).unwrap()
}

fn tbody(page: &str) -> String {
    let start = page.find("<tbody>").unwrap() + "<tbody>".len();
    let end = page.find("</tbody>").unwrap();
    page[start..end].to_string()
}

/// Render `cycles` times into a fresh HTML page; returns each outcome, the final rows
/// and the final page.
async fn render_html(
    url: String,
    cycles: usize,
    policy: FailurePolicy,
) -> (Vec<Result<usize, BoardError>>, Vec<TableRow>, String) {
    blocking(move || {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        let renderer = StockTableRenderer::new(source(&url), HtmlTable::open(&path, 60).unwrap())
            .with_failure_policy(policy);
        let outcomes = (0..cycles).map(|_| renderer.render_stocks()).collect();
        (outcomes, renderer.rows().unwrap(), fs::read_to_string(&path).unwrap())
    })
    .await
}

#[tokio::test]
async fn example_renders_sorted_into_html_page() {
    let server = MockServer::start().await;
    answer_always(&server, 200, EXAMPLE).await;

    let (outcomes, _, page) = render_html(stocks_url(&server), 1, FailurePolicy::Clear).await;

    assert_eq!(outcomes[0].as_ref().unwrap(), &2);
    assert_eq!(
        tbody(&page).trim(),
        "<tr><td>AAA</td><td>10.00</td><td>1,000</td><td class=\"positive\">1.20%</td></tr>\n\
         <tr><td>BBB</td><td>20.00</td><td>2,000</td><td class=\"negative\">-0.50%</td></tr>"
    );
}

#[tokio::test]
async fn sends_plain_get_to_endpoint() {
    let server = MockServer::start().await;
    answer_always(&server, 200, "[]").await;

    let url = stocks_url(&server);
    blocking(move || source(&url).fetch().unwrap()).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "GET");
    assert_eq!(requests[0].url.path(), "/stocks");
    assert!(requests[0].url.query().is_none());
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn envelope_payload_is_accepted() {
    let server = MockServer::start().await;
    answer_always(
        &server,
        200,
        r#"{"stocks":[{"ticker":"CTM","price":1.25,"volume":1500000,"change":4.2},
                      {"ticker":"CYN","price":0.8,"volume":300,"change":-1.0}],
            "parabolic_alerts":[{"ticker":"CTM","price":1.25,"volume":1500000,"change":4.2}]}"#,
    )
    .await;

    let url = stocks_url(&server);
    let (tickers, flagged) = blocking(move || {
        let source = source(&url);
        let quotes = source.fetch().unwrap();
        source.fetch().unwrap();
        let today = chrono::Local::now().date_naive();
        let flagged = (
            source.alerts().is_flagged("CTM", today).unwrap(),
            source.alerts().is_flagged("CYN", today).unwrap(),
        );
        let tickers: Vec<String> = quotes.into_iter().map(|q| q.ticker).collect();
        (tickers, flagged)
    })
    .await;

    assert_eq!(tickers, vec!["CTM", "CYN"]);
    assert_eq!(flagged, (true, false));
}

#[test_case(500, r#"{"error":"boom"}"# ; "server error")]
#[test_case(404, "" ; "not found")]
#[test_case(200, "<html>oops</html>" ; "not json")]
#[test_case(200, r#"[{"ticker":"AAA","price":10}]"# ; "missing fields")]
#[test_case(200, r#"{"stocks":[{"ticker":"AAA","price":"Error","volume":"Error","change":"Error"}]}"# ; "error placeholders")]
#[tokio::test]
async fn failed_cycle_leaves_table_empty(status: u16, body: &str) {
    let server = MockServer::start().await;
    answer_once(&server, 200, EXAMPLE).await;
    answer_always(&server, status, body).await;

    let (outcomes, rows, page) = render_html(stocks_url(&server), 2, FailurePolicy::Clear).await;

    assert!(outcomes[0].is_ok());
    assert!(outcomes[1].is_err());
    assert!(rows.is_empty());
    assert_eq!(tbody(&page).matches("<tr>").count(), 0);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    answer_always(&server, 500, "").await;

    let url = stocks_url(&server);
    let expected_url = url.clone();
    match blocking(move || source(&url).fetch()).await {
        Err(BoardError::Status { status, url }) => {
            assert_eq!(status, 500);
            assert_eq!(url, expected_url);
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn keep_last_preserves_previous_rows() {
    let server = MockServer::start().await;
    answer_once(&server, 200, EXAMPLE).await;
    answer_always(&server, 500, "").await;

    let (outcomes, rows, page) = render_html(stocks_url(&server), 2, FailurePolicy::KeepLast).await;

    assert!(outcomes[1].is_err());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].ticker, "AAA");
    assert_eq!(rows[1].class, ChangeClass::Negative);
    assert!(page.contains("<td>BBB</td>"));
}

#[tokio::test]
async fn second_cycle_replaces_all_rows() {
    let server = MockServer::start().await;
    answer_once(&server, 200, EXAMPLE).await;
    answer_always(&server, 200, r#"[{"ticker":"ZZZ","price":3,"volume":7,"change":0}]"#).await;

    let (outcomes, rows, page) = render_html(stocks_url(&server), 2, FailurePolicy::Clear).await;

    assert_eq!(outcomes[1].as_ref().unwrap(), &1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].ticker, "ZZZ");
    assert_eq!(rows[0].change, "0.00%");
    assert_eq!(rows[0].class, ChangeClass::Positive);
    assert_eq!(tbody(&page).matches("<tr>").count(), 1);
}

#[test]
fn unreachable_endpoint_clears_table() {
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let source = source(&format!("http://{}/stocks", addr));
    let dir = tempfile::tempdir().unwrap();
    let mut table = HtmlTable::open(dir.path().join("index.html"), 60).unwrap();
    table
        .append(vec![QuoteFormatter::default().row(&StockQuote::new("OLD", 1.0, 1, 1.0))])
        .unwrap();
    let renderer = StockTableRenderer::new(source, table);

    assert!(matches!(renderer.render_stocks(), Err(BoardError::Http(_))));
    assert!(renderer.rows().unwrap().is_empty());
}
