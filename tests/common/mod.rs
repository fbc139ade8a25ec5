#![allow(dead_code)]

use axum::{extract::State, http::StatusCode, routing::get, Router};
use std::net::SocketAddr;
use std::time::Duration;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use thor::model::Config;

pub const BODY: &str = "mjolnir says hello";

/// Mock target that answers `/` instantly and counts every hit.
/// `/fail` always answers 500. `/flaky` answers 500 to the very first hit on
/// the server and a slow 200 to every later one.
pub struct MockServer {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl MockServer {
    pub async fn start() -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/", get(hit))
            .route("/fail", get(fail))
            .route("/flaky", get(flaky))
            .with_state(Arc::clone(&hits));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, hits }
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn fail_url(&self) -> String {
        format!("http://{}/fail", self.addr)
    }

    pub fn flaky_url(&self) -> String {
        format!("http://{}/flaky", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn hit(State(hits): State<Arc<AtomicUsize>>) -> &'static str {
    hits.fetch_add(1, Ordering::SeqCst);
    BODY
}

async fn fail() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn flaky(State(hits): State<Arc<AtomicUsize>>) -> Result<&'static str, StatusCode> {
    if hits.fetch_add(1, Ordering::SeqCst) == 0 {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    tokio::time::sleep(Duration::from_millis(300)).await;
    Ok(BODY)
}

/// An address nothing listens on.
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

pub fn config(url: String, hammers: i64, throws: i64, verbose: bool) -> Config {
    Config {
        hammers,
        throws,
        verbose,
        url,
    }
}

/// Pull the trailing seconds value off a report line.
pub fn elapsed_of(line: &str) -> f64 {
    line.rsplit("Elapsed Time: ").next().unwrap().parse().unwrap()
}
