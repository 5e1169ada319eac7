#![allow(dead_code)]

use axum::extract::ConnectInfo;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

use phish_tracker::state::{AppState, HttpSettings};

pub const TEST_PEER: &str = "127.0.0.1:12345";

pub async fn create_test_recipient(pool: &PgPool, email: &str, token: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO recipients (email, token) VALUES ($1, $2) RETURNING id")
        .bind(email)
        .bind(token)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_click(
    pool: &PgPool,
    token: &str,
    recipient_id: Option<i64>,
    ip: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO clicks (ip, user_agent, token, recipient_id) VALUES ($1, 'test-agent', $2, $3) RETURNING id",
    )
    .bind(ip)
    .bind(token)
    .bind(recipient_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with(pool, HttpSettings::default())
}

pub fn create_test_state_with(pool: PgPool, settings: HttpSettings) -> AppState {
    AppState::new(Arc::new(pool), settings)
}

/// Inserts a fixed `ConnectInfo` so handlers can run without a real socket.
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
        let addr: SocketAddr = TEST_PEER.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
