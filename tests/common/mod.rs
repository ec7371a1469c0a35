#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::ConnectInfo;
use axum_test::TestServer;
use serde_json::{Value, json};
use shortlink::domain::entities::NewVisit;
use shortlink::domain::store::VisitStore;
use shortlink::domain::visit_worker::run_visit_worker;
use shortlink::infrastructure::persistence::SqliteStore;
use shortlink::routes::router;
use shortlink::state::AppState;
use shortlink::utils::code_generator::ShortCodeGenerator;
use tokio::sync::mpsc;
use tower::Layer;

pub const HOST: &str = "sho.rt";

/// Inserts a fixed peer address, as `into_make_service_with_connect_info` does.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

pub async fn create_test_store() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::in_memory().await.unwrap())
}

pub fn create_test_state(store: Arc<SqliteStore>) -> (AppState, mpsc::Receiver<NewVisit>) {
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(
        store.clone(),
        store,
        Arc::new(ShortCodeGenerator::default()),
        tx,
        None,
    );

    (state, rx)
}

/// Server over a fresh store; visits stay queued in the returned receiver.
pub async fn create_test_server() -> (TestServer, Arc<SqliteStore>, mpsc::Receiver<NewVisit>) {
    let store = create_test_store().await;
    let (state, rx) = create_test_state(store.clone());

    let app = router(state).layer(MockConnectInfoLayer);
    let server = TestServer::new(app).unwrap();

    (server, store, rx)
}

/// Server over a fresh store with the visit worker running.
pub async fn create_server_with_worker() -> (TestServer, Arc<SqliteStore>) {
    let (server, store, rx) = create_test_server().await;
    tokio::spawn(run_visit_worker(rx, store.clone()));

    (server, store)
}

pub async fn create_link(server: &TestServer, original_url: &str, short_name: Option<&str>) -> Value {
    let mut body = json!({ "original_url": original_url });
    if let Some(short_name) = short_name {
        body["short_name"] = json!(short_name);
    }

    let response = server
        .post("/api/links")
        .add_header("Host", HOST)
        .json(&body)
        .await;
    assert_eq!(response.status_code(), 201, "{}", response.text());

    response.json::<Value>()
}

/// Polls until the store holds `expected` visits or a second has passed.
pub async fn wait_for_visits(store: &SqliteStore, expected: i64) -> i64 {
    let mut count = 0;
    for _ in 0..100 {
        count = store.count_visits().await.unwrap();
        if count >= expected {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    count
}
