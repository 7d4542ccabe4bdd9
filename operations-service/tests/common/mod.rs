#![allow(dead_code)]

use operations_service::config::{LimitsConfig, OperationsConfig};
use operations_service::startup::Application;
use serde_json::Value;
use service_core::config::Config;
use std::net::{IpAddr, Ipv4Addr};

pub struct TestApp {
    pub http_address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_limits(LimitsConfig::default()).await
    }

    pub async fn spawn_with_limits(limits: LimitsConfig) -> Self {
        let config = OperationsConfig {
            common: Config {
                host: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: 0, // Random port
            },
            service_name: "operations-service-test".to_string(),
            log_level: "debug".to_string(),
            otlp_endpoint: None,
            limits,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let http_address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/check_health/", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            http_address,
            port,
            client,
        }
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.http_address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.http_address, path))
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
