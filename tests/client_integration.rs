//! Integration tests for `StockfighterClient` against a local mock server.
//!
//! Exercises the full descriptor → transaction → executor → mapper pipeline
//! over real HTTP, plus the success/failure split on the `ok` flag.

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use tokio::sync::oneshot;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stockfighter_sdk::prelude::*;

const API_KEY: &str = "test-key";

fn client_for(server: &MockServer) -> StockfighterClient {
    let config = Config::builder()
        .api_key(API_KEY)
        .base_url(&format!("{}/ob/api/", server.uri()))
        .venue("TESTEX")
        .account("EXB123456")
        .symbol("FOOBAR")
        .build()
        .unwrap();
    StockfighterClient::new(config).unwrap()
}

/// A client pointed at a port nothing listens on.
fn unreachable_client() -> StockfighterClient {
    let config = Config::builder()
        .api_key(API_KEY)
        .base_url("http://127.0.0.1:9/ob/api")
        .build()
        .unwrap();
    StockfighterClient::new(config).unwrap()
}

/// A client pointed at a listener that accepts connections and never answers.
/// The listener must outlive the calls.
fn stalled_client() -> (TcpListener, StockfighterClient) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let config = Config::builder()
        .api_key(API_KEY)
        .base_url(&format!("http://{addr}/ob/api"))
        .build()
        .unwrap();
    (listener, StockfighterClient::new(config).unwrap())
}

async fn mount_get(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("X-Starfighter-Authorization", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// =============================================================================
// Success/failure routing
// =============================================================================

#[tokio::test]
async fn venue_heartbeat_end_to_end() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/ob/api/venues/TESTEX/heartbeat",
        json!({"ok": true, "venue": "TESTEX"}),
    )
    .await;

    let status = client_for(&server).heartbeat().venue().await.unwrap();
    assert_eq!(status.ok, Some(true));
    assert_eq!(status.venue.as_deref(), Some("TESTEX"));
}

#[tokio::test]
async fn send_returns_decoded_structure_unchanged() {
    let server = MockServer::start().await;
    mount_get(&server, "/ob/api/heartbeat", json!({"ok": true, "error": ""})).await;

    let map = client_for(&server).send(&ApiHeartbeat).await.unwrap();
    assert_eq!(map.len(), 2);
    assert!(map.is_ok());
    assert_eq!(map.string("error").as_deref(), Some(""));
}

#[tokio::test]
async fn not_ok_response_is_rejected_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ob/api/venues/NOPE/heartbeat"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"ok": false, "error": "No venue exists with the symbol NOPE"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .heartbeat()
        .venue_named("NOPE")
        .await
        .unwrap_err();
    assert!(err.is_rejected());
    let message = err.to_string();
    assert!(message.starts_with("Failure response "), "{message}");
    assert!(message.contains("false"), "{message}");
    assert!(message.contains("No venue exists"), "{message}");
}

#[tokio::test]
async fn missing_ok_is_rejected() {
    let server = MockServer::start().await;
    mount_get(&server, "/ob/api/heartbeat", json!({"venue": "TESTEX"})).await;

    let err = client_for(&server).send(&ApiHeartbeat).await.unwrap_err();
    assert!(matches!(err, SdkError::Rejected { .. }));
}

#[tokio::test]
async fn garbage_body_is_rejected_with_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ob/api/heartbeat"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).send(&ApiHeartbeat).await.unwrap_err();
    match err {
        SdkError::Rejected { body } => assert_eq!(body, r#"{"results":""}"#),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_surfaces_as_http_error() {
    let err = unreachable_client().send(&ApiHeartbeat).await.unwrap_err();
    assert!(matches!(err, SdkError::Http(_)), "{err:?}");
    assert!(err.to_string().starts_with("Error: "), "{err}");
}

// =============================================================================
// Verbs and bodies
// =============================================================================

#[tokio::test]
async fn place_order_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ob/api/venues/TESTEX/stocks/FOOBAR/orders"))
        .and(header("X-Starfighter-Authorization", API_KEY))
        .and(body_json(json!({
            "account": "EXB123456",
            "venue": "TESTEX",
            "symbol": "FOOBAR",
            "price": 5025,
            "qty": 100,
            "direction": "buy",
            "orderType": "FOK"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "symbol": "FOOBAR",
            "venue": "TESTEX",
            "direction": "buy",
            "originalQty": 100,
            "qty": 0,
            "price": 5025,
            "orderType": "fill-or-kill",
            "id": 1,
            "account": "EXB123456",
            "ts": "2016-01-01T00:00:00Z",
            "fills": [{"price": 5025, "qty": 100, "ts": "2016-01-01T00:00:00Z"}],
            "totalFilled": 100,
            "open": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let order = client_for(&server)
        .orders()
        .place(Decimal::new(5025, 2), 100, Direction::Buy, OrderType::Fok)
        .await
        .unwrap();
    assert_eq!(order.id, Some(1));
    assert_eq!(order.kind(), Some(OrderType::Fok));
    assert_eq!(order.total_filled, Some(100));
    assert_eq!(order.fills.map(|f| f.len()), Some(1));
}

#[tokio::test]
async fn cancel_order_sends_delete_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/ob/api/venues/TESTEX/stocks/FOOBAR/orders/42"))
        .and(header("X-Starfighter-Authorization", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "id": 42, "open": false})))
        .expect(1)
        .mount(&server)
        .await;

    let order = client_for(&server).orders().cancel(42).await.unwrap();
    assert_eq!(order.id, Some(42));
    assert_eq!(order.open, Some(false));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn order_book_end_to_end() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/ob/api/venues/TESTEX/stocks/LTL",
        json!({
            "ok": true,
            "symbol": "LTL",
            "venue": "TESTEX",
            "bids": [{"price": 50.0, "qty": 100, "isBuy": true}],
            "asks": [],
            "ts": "2016-01-01T00:00:00Z"
        }),
    )
    .await;

    let book = client_for(&server)
        .orderbooks()
        .get_for("TESTEX", "LTL")
        .await
        .unwrap();
    let bids = book.bids.as_ref().unwrap();
    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0].price, Some(50.0));
    assert_eq!(bids[0].qty, Some(100));
    assert_eq!(bids[0].is_buy, Some(true));
    assert_eq!(book.asks.as_ref().map(Vec::len), Some(0));
}

#[tokio::test]
async fn stocks_list_array_key() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/ob/api/venues/TESTEX/stocks",
        json!({"ok": true, "symbols": [{"name": "Foobar Industries", "symbol": "FOOBAR"}]}),
    )
    .await;

    let list = client_for(&server).stocks().list().await.unwrap();
    assert_eq!(list.symbols(), vec!["FOOBAR"]);
}

// =============================================================================
// Callback form
// =============================================================================

#[tokio::test]
async fn send_with_fires_success_once() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/ob/api/venues/TESTEX/heartbeat",
        json!({"ok": true, "venue": "TESTEX"}),
    )
    .await;

    let failures = Arc::new(AtomicUsize::new(0));
    let failures_seen = failures.clone();
    let (tx, rx) = oneshot::channel();

    let handle = client_for(&server)
        .send_with(
            VenueHeartbeat::new("TESTEX"),
            move |map| {
                let _ = tx.send(map);
            },
            move |_| {
                failures_seen.fetch_add(1, Ordering::SeqCst);
            },
        )
        .unwrap();

    let map = rx.await.unwrap();
    handle.await.unwrap();
    let status: VenueStatus = map.parse();
    assert_eq!(status.venue.as_deref(), Some("TESTEX"));
    assert_eq!(failures.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn send_with_fires_failure_on_rejection() {
    let server = MockServer::start().await;
    mount_get(&server, "/ob/api/heartbeat", json!({"ok": false})).await;

    let successes = Arc::new(AtomicUsize::new(0));
    let successes_seen = successes.clone();
    let (tx, rx) = oneshot::channel();

    let handle = client_for(&server)
        .send_with(
            ApiHeartbeat,
            move |_| {
                successes_seen.fetch_add(1, Ordering::SeqCst);
            },
            move |message| {
                let _ = tx.send(message);
            },
        )
        .unwrap();

    let message = rx.await.unwrap();
    handle.await.unwrap();
    assert!(message.contains("false"), "{message}");
    assert_eq!(successes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn send_with_fires_failure_on_transport_error() {
    let (tx, rx) = oneshot::channel();
    let handle = unreachable_client()
        .send_with(
            ApiHeartbeat,
            |_| panic!("success must not fire"),
            move |message| {
                let _ = tx.send(message);
            },
        )
        .unwrap();

    let message = rx.await.unwrap();
    handle.await.unwrap();
    assert!(message.starts_with("Error: "), "{message}");
}

#[test]
fn send_with_outside_runtime_fails_immediately() {
    let client = unreachable_client();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    let handle = client.send_with(
        ApiHeartbeat,
        |_| panic!("success must not fire"),
        move |message| {
            assert!(message.starts_with("Error: "));
            seen.fetch_add(1, Ordering::SeqCst);
        },
    );

    assert!(handle.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn send_with_fails_once_when_runtime_shuts_down() {
    let (_listener, client) = stalled_client();
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    let successes = Arc::new(AtomicUsize::new(0));
    let failures = Arc::new(Mutex::new(Vec::new()));
    let successes_seen = successes.clone();
    let failures_seen = failures.clone();

    let handle = {
        let _enter = rt.enter();
        client.send_with(
            ApiHeartbeat,
            move |_| {
                successes_seen.fetch_add(1, Ordering::SeqCst);
            },
            move |message| failures_seen.lock().unwrap().push(message),
        )
    };
    assert!(handle.is_some());

    // Let the request reach the silent listener, then tear the runtime down.
    rt.block_on(async { tokio::time::sleep(Duration::from_millis(50)).await });
    drop(rt);

    assert_eq!(successes.load(Ordering::SeqCst), 0);
    assert_eq!(*failures.lock().unwrap(), vec![DROPPED_MESSAGE.to_string()]);
}

#[test]
fn send_with_fails_once_when_never_polled() {
    let (_listener, client) = stalled_client();
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    let failures = Arc::new(AtomicUsize::new(0));
    let failures_seen = failures.clone();
    {
        let _enter = rt.enter();
        let _ = client.send_with(
            ApiHeartbeat,
            |_| panic!("success must not fire"),
            move |message| {
                assert_eq!(message, DROPPED_MESSAGE);
                failures_seen.fetch_add(1, Ordering::SeqCst);
            },
        );
    }
    drop(rt);

    assert_eq!(failures.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn send_with_fails_once_when_aborted() {
    let (_listener, client) = stalled_client();
    let (tx, rx) = oneshot::channel();

    let handle = client
        .send_with(
            ApiHeartbeat,
            |_| panic!("success must not fire"),
            move |message| {
                let _ = tx.send(message);
            },
        )
        .unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());
    assert_eq!(rx.await.unwrap(), DROPPED_MESSAGE);
}
