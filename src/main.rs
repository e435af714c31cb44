mod models;
mod handlers;
mod logger;

use axum::{routing::{get, Router}};
use std::net::SocketAddr;
use tokio::net::TcpListener;

const DEFAULT_PORT: u16 = 3000;

// two fixed routes, no shared state
fn app() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/greet", get(handlers::greet))
}

// PORT env var wins when it parses as a port, otherwise 3000
fn resolve_port(value: Option<String>) -> u16 {
    value
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();

    let port = resolve_port(std::env::var("PORT").ok());

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let listener = TcpListener::bind(addr).await
        .expect("Failed to bind to port");
    println!("listening on {}", listener.local_addr()
        .expect("Failed to get local address"));
    axum::serve(listener, app()).await
        .expect("Server failed");

}
