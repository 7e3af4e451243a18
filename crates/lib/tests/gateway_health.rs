//! Integration test: start the gateway on a free port, GET /, assert health JSON.
//! Does not call LINE or Rakuten. The server task is left running when the test ends.

use lib::config::Config;
use lib::gateway;
use std::time::Duration;

fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
    listener.local_addr().expect("local_addr").port()
}

fn test_config(port: u16) -> Config {
    let mut config = Config::default();
    config.gateway.port = port;
    config.gateway.bind = "127.0.0.1".to_string();
    config.line.channel_secret = Some("test-channel-secret".to_string());
    config.line.channel_token = Some("test-channel-token".to_string());
    config.travel.application_id = Some("test-app-id".to_string());
    config
}

#[tokio::test]
async fn gateway_health_http_responds_with_running() {
    let port = free_port();
    let config = test_config(port);

    let gateway_handle = tokio::spawn(async move {
        let _ = gateway::run_server(config).await;
    });

    let url = format!("http://127.0.0.1:{}/", port);
    let client = reqwest::Client::new();
    let mut last_err = None;
    for _ in 0..100 {
        match client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {
                let json: serde_json::Value = resp.json().await.expect("parse JSON");
                assert_eq!(json.get("runtime").and_then(|v| v.as_str()), Some("running"));
                assert_eq!(json.get("port").and_then(|v| v.as_u64()), Some(port as u64));
                return;
            }
            Ok(_) => {}
            Err(e) => last_err = Some(e),
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    gateway_handle.abort();
    panic!(
        "GET {} did not return 200 with health JSON within 5s; last error: {:?}",
        url, last_err
    );
}

#[tokio::test]
async fn gateway_refuses_to_start_without_credentials() {
    let mut config = test_config(free_port());
    config.line.channel_secret = None;

    let err = gateway::run_server(config).await.expect_err("must fail");
    assert!(err.to_string().contains("channel secret"));
}
