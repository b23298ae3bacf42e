//! Integration test harness for Menuboard.
//!
//! Serves the production router on an ephemeral port against a temporary
//! data directory, so every test gets an isolated catalog and availability
//! document and a cookie-holding HTTP client.
//!
//! # Example
//!
//! ```rust,ignore
//! let server = TestServer::spawn().await;
//! server.login().await;
//! let resp = server.client
//!     .post(server.url("/api/update-availability"))
//!     .json(&serde_json::json!({"availableItems": ["coffee-01"]}))
//!     .send()
//!     .await
//!     .expect("request failed");
//! assert!(resp.status().is_success());
//! ```

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use menuboard_server::{AppState, ServerConfig, app};
use reqwest::Client;
use tempfile::TempDir;

/// Shared admin username used by every test server.
pub const ADMIN_USERNAME: &str = "admin";

/// Shared admin password used by every test server.
pub const ADMIN_PASSWORD: &str = "integration-secret";

/// The default test catalog: Drinks [Tea, Coffee], Snacks [Chips].
pub const DEFAULT_MENU: &str = r#"{
    "categories": [
        {
            "name": "Drinks",
            "items": [
                { "id": "tea-01", "name": "Tea", "price": 2.5 },
                { "id": "coffee-01", "name": "Coffee", "price": 3.0 }
            ]
        },
        {
            "name": "Snacks",
            "items": [
                { "id": "chips-01", "name": "Chips", "price": 1.75 }
            ]
        }
    ]
}"#;

/// A running Menuboard server bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub availability_path: PathBuf,
    _data_dir: TempDir,
}

impl TestServer {
    /// Spawn a server with the default menu catalog.
    pub async fn spawn() -> Self {
        Self::spawn_with_menu(DEFAULT_MENU).await
    }

    /// Spawn a server serving the given catalog document.
    pub async fn spawn_with_menu(menu_json: &str) -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create data dir");
        let menu_path = data_dir.path().join("menu.json");
        let availability_path = data_dir.path().join("available.json");
        std::fs::write(&menu_path, menu_json).expect("Failed to write menu fixture");

        let config = ServerConfig {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            menu_path,
            availability_path: availability_path.clone(),
            admin_username: ADMIN_USERNAME.to_string(),
            admin_password: ADMIN_PASSWORD.to_string().into(),
        };

        let app = app(AppState::new(config));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            addr,
            client,
            availability_path,
            _data_dir: data_dir,
        }
    }

    /// Absolute URL for a server path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// A second, independent client with its own cookie jar.
    #[must_use]
    pub fn anonymous_client(&self) -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client")
    }

    /// Log the harness client in with the configured admin credentials.
    pub async fn login(&self) {
        let resp = self
            .client
            .post(self.url("/admin/login"))
            .json(&serde_json::json!({
                "username": ADMIN_USERNAME,
                "password": ADMIN_PASSWORD,
            }))
            .send()
            .await
            .expect("Login request failed");
        assert!(resp.status().is_success(), "Login rejected: {}", resp.status());
    }
}
