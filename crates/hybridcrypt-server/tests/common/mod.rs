//! Shared harness for server integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use axum::Router;
use hybridcrypt_core::HybridCipher;
use hybridcrypt_server::{handlers, AppState};
use tokio::net::TcpListener;

/// RSA keygen is slow; every test server shares one engine.
pub fn shared_engine() -> Arc<HybridCipher> {
    static ENGINE: OnceLock<Arc<HybridCipher>> = OnceLock::new();
    Arc::clone(ENGINE.get_or_init(|| Arc::new(HybridCipher::new().expect("engine init"))))
}

pub struct TestServer {
    pub url: String,
    #[allow(dead_code)]
    pub addr: SocketAddr,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::with_engine(shared_engine()).await
    }

    pub async fn with_engine(engine: Arc<HybridCipher>) -> Self {
        let state = AppState::new(engine, Duration::from_secs(30));
        Self::serve(handlers::router(state)).await
    }

    pub async fn serve(app: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            addr,
        }
    }

    pub fn encrypt_url(&self) -> String {
        format!("{}{}", self.url, handlers::ENCRYPT_PATH)
    }

    pub fn decrypt_url(&self) -> String {
        format!("{}{}", self.url, handlers::DECRYPT_PATH)
    }

    #[allow(dead_code)]
    pub fn openapi_url(&self) -> String {
        format!("{}{}", self.url, handlers::OPENAPI_PATH)
    }
}
