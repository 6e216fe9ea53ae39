//! Shared test utilities for the storefront.
//!
//! Helpers for building products, a storefront wired to the in-memory store API
//! and an in-memory HTML document, and a one-shot loopback HTTP server standing in
//! for the real backend.

use crate::{
    api::{http::HttpStoreApi, memory::InMemoryStoreApi},
    app::Storefront,
    config::{AppConfig, builtin_catalog},
    entities::Product,
    errors::Result,
    ui::HtmlDocument,
};
use std::time::Duration;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};
use tracing_subscriber::EnvFilter;

/// Storefront type used throughout the tests.
pub type TestStorefront = Storefront<InMemoryStoreApi, HtmlDocument>;

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-stock product with sensible defaults.
///
/// # Defaults
/// * `rating`: 4.5 (four filled stars)
/// * `rating_count`: 100
/// * `category`: "Electronics"
pub fn sample_product(id: i64, title: &str, price: i64, original_price: i64) -> Product {
    Product {
        id,
        title: title.to_string(),
        image: format!("https://via.placeholder.com/250x250?text={id}"),
        price,
        original_price,
        rating: 4.5,
        rating_count: 100,
        in_stock: true,
        category: Some("Electronics".to_string()),
        description: None,
    }
}

/// The eight-product sample catalog.
pub fn sample_catalog() -> Vec<Product> {
    builtin_catalog()
}

/// A storefront over the sample catalog that has not been started yet.
pub fn test_storefront() -> TestStorefront {
    Storefront::new(
        InMemoryStoreApi::new(sample_catalog()),
        HtmlDocument::new(),
        &AppConfig::default(),
    )
}

/// A storefront over the sample catalog after its page-load sequence.
pub async fn started_storefront() -> Result<TestStorefront> {
    let mut app = test_storefront();
    app.start().await?;
    Ok(app)
}

/// A storefront whose store API is unreachable.
pub fn offline_storefront() -> TestStorefront {
    let app = test_storefront();
    app.api().set_offline(true);
    app
}

/// A storefront talking HTTP to `base_url`, not started.
pub fn http_storefront(base_url: String) -> Result<Storefront<HttpStoreApi, HtmlDocument>> {
    let api = HttpStoreApi::new(base_url, Duration::from_secs(5))?;
    Ok(Storefront::new(api, HtmlDocument::new(), &AppConfig::default()))
}

/// Serves exactly one HTTP request with a canned JSON body and returns the raw
/// request it received.
#[allow(clippy::unwrap_used)]
pub async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let mut received = Vec::new();
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            received.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&received) {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&received).into_owned()
    });
    (format!("http://{addr}/api"), handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(head_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..head_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= head_end + 4 + content_length
}

