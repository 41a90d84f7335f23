//! Mock read-endpoint server for hydration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

/// Behavior of one mock route.
#[derive(Debug, Clone)]
pub enum RouteReply {
    /// Answer 200 with the given JSON body.
    Json(Value),
    /// Answer with the given error status.
    Error(u16),
    /// Answer 200 with the body after a delay.
    JsonAfter { body: Value, delay_ms: u64 },
}

#[derive(Clone)]
struct MockState {
    trips: RouteReply,
    countries: RouteReply,
}

/// Mock server exposing `/trip` and `/country` on an ephemeral port.
pub struct MockApi {
    pub addr: SocketAddr,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    /// Start a server answering with the given replies.
    pub async fn start(trips: RouteReply, countries: RouteReply) -> Self {
        let state = MockState { trips, countries };
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/trip", get(trip_route))
            .route("/country", get(country_route))
            .with_state(state);

        // Bind before spawning so requests issued right after start()
        // cannot race the listener.
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            shutdown: shutdown_tx,
        }
    }

    /// Base URL for this mock server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn trip_route(State(state): State<MockState>) -> Response {
    reply(state.trips).await
}

async fn country_route(State(state): State<MockState>) -> Response {
    reply(state.countries).await
}

async fn reply(reply: RouteReply) -> Response {
    match reply {
        RouteReply::Json(body) => Json(body).into_response(),
        RouteReply::Error(status) => {
            let code =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (code, "mock failure").into_response()
        }
        RouteReply::JsonAfter { body, delay_ms } => {
            tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
            Json(body).into_response()
        }
    }
}
