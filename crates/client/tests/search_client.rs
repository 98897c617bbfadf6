//! Integration tests for SearchClient against a one-shot local responder.
//!
//! Each test binds a TCP listener on a loopback port, answers exactly one
//! HTTP request with a canned response, and reports the request line back
//! so the test can validate what went over the wire. No external network.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use carddex_client::{SearchClient, SearchError};
use carddex_core::{ClientConfig, SearchParams, Stat};

/// Serve one HTTP response on a fresh loopback port. Returns the base URL
/// and a channel yielding the request line of the single accepted request.
fn serve_once(status_line: &str, body: &str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local_addr");
    let (tx, rx) = mpsc::channel();

    let response = format!(
        "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        // Read headers only — GET requests carry no body.
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).expect("read");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let request = String::from_utf8_lossy(&buf);
        let request_line = request.lines().next().unwrap_or_default().to_string();
        tx.send(request_line).ok();
        stream.write_all(response.as_bytes()).expect("write");
        stream.flush().ok();
    });

    (format!("http://{addr}/"), rx)
}

fn client_for(endpoint: String) -> SearchClient {
    SearchClient::new(&ClientConfig { endpoint, timeout_secs: 5 }).expect("client")
}

#[tokio::test]
async fn fetch_page_decodes_cards_and_sends_all_parameters() {
    let body = r#"{"cards":[{"name":"Fire Drake","image":"x.png","cost":3,"power":5}],"total_pages":2}"#;
    let (endpoint, rx) = serve_once("HTTP/1.1 200 OK", body);

    let params = SearchParams::new("dragon", vec!["1".into(), "2".into()], Vec::new());
    let page = client_for(endpoint).fetch_page(&params, 1).await.expect("fetch");

    assert_eq!(page.cards.len(), 1);
    assert_eq!(page.cards[0].name, "Fire Drake");
    assert_eq!(page.cards[0].art, "x.png");
    assert_eq!(page.cards[0].cost, Stat::Int(3));
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page_links(), vec![1, 2]);

    let request_line = rx.recv().expect("request line");
    assert_eq!(
        request_line,
        "GET /search_dynamic?query=dragon&cost=1%2C2&power=&page=1 HTTP/1.1"
    );
}

#[tokio::test]
async fn page_number_is_forwarded() {
    let body = r#"{"cards":[],"total_pages":3}"#;
    let (endpoint, rx) = serve_once("HTTP/1.1 200 OK", body);

    let params = SearchParams::with_query("dragon");
    client_for(endpoint).fetch_page(&params, 2).await.expect("fetch");

    let request_line = rx.recv().expect("request line");
    assert!(request_line.contains("query=dragon"), "got: {request_line}");
    assert!(request_line.contains("page=2"), "got: {request_line}");
}

#[tokio::test]
async fn endpoint_path_prefix_without_trailing_slash_is_kept() {
    let body = r#"{"cards":[],"total_pages":1}"#;
    let (endpoint, rx) = serve_once("HTTP/1.1 200 OK", body);

    // "/app" with no trailing slash must still resolve under the prefix.
    let endpoint = format!("{endpoint}app");
    client_for(endpoint).fetch_page(&SearchParams::default(), 1).await.expect("fetch");

    let request_line = rx.recv().expect("request line");
    assert!(
        request_line.starts_with("GET /app/search_dynamic?"),
        "got: {request_line}"
    );
}

#[tokio::test]
async fn non_success_status_maps_to_server_error() {
    let (endpoint, _rx) = serve_once("HTTP/1.1 500 Internal Server Error", "boom");

    let err = client_for(endpoint)
        .fetch_page(&SearchParams::default(), 1)
        .await
        .expect_err("should fail");

    assert!(matches!(err, SearchError::Server { status: 500 }), "got: {err}");
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let (endpoint, _rx) = serve_once("HTTP/1.1 200 OK", "<html>not json</html>");

    let err = client_for(endpoint)
        .fetch_page(&SearchParams::default(), 1)
        .await
        .expect_err("should fail");

    assert!(matches!(err, SearchError::Decode(_)), "got: {err}");
}

#[tokio::test]
async fn unreachable_server_maps_to_network_error() {
    // Bind then immediately drop to get a port with nothing listening.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local_addr")
    };

    let err = client_for(format!("http://{addr}/"))
        .fetch_page(&SearchParams::default(), 1)
        .await
        .expect_err("should fail");

    assert!(matches!(err, SearchError::Network(_)), "got: {err}");
}

#[test]
fn relative_endpoint_is_rejected() {
    let err = SearchClient::new(&ClientConfig {
        endpoint: "not a url".to_string(),
        timeout_secs: 5,
    })
    .err()
    .expect("should fail");
    assert!(matches!(err, SearchError::BadEndpoint(_)));
}
