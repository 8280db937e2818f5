use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::*;

/// Serve exactly one canned HTTP response and hand back the raw request.
async fn one_shot(status: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0_u8; 8192];
        let n = socket.read(&mut buf).await.unwrap();
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&buf[..n]).into_owned()
    });
    (base, handle)
}

#[test]
fn base_url_is_trimmed() {
    assert_eq!(HttpBackend::new(" http://host:8080/ ").base_url(), "http://host:8080");
}

#[tokio::test]
async fn get_sends_bearer_and_decodes_envelope() {
    let (base, server) = one_shot("200 OK", r#"{"success":true,"message":"ok","data":{"solPriceUsd":150.5}}"#).await;
    let backend = HttpBackend::new(&base);

    let reply = backend.get(endpoints::DASHBOARD, Some("tok")).await.unwrap();
    assert_eq!(reply.message, "ok");
    assert_eq!(reply.data["solPriceUsd"], 150.5);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/user/dashboard HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("authorization: bearer tok"));
}

#[tokio::test]
async fn application_failure_surfaces_backend_error() {
    let (base, _server) = one_shot("400 Bad Request", r#"{"success":false,"error":"Insufficient balance"}"#).await;
    let backend = HttpBackend::new(&base);

    let err = backend
        .send(Method::POST, endpoints::TRANSFER, Some("tok"), &serde_json::json!({ "amount": 1 }))
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Application("Insufficient balance".to_owned()));
}

#[tokio::test]
async fn validate_session_returns_user() {
    let (base, _server) =
        one_shot("200 OK", r#"{"success":true,"data":{"user":{"_id":"u1","name":"Ada","email":"ada@example.com"}}}"#)
            .await;
    let backend = HttpBackend::new(&base);

    let user = backend.validate_session("tok").await.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Ada");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = HttpBackend::new(&base).logout("tok").await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn gateway_error_page_is_a_network_error() {
    let (base, _server) = one_shot("502 Bad Gateway", "<html>Bad Gateway</html>").await;
    let backend = HttpBackend::new(&base);

    let err = backend.get(endpoints::DASHBOARD, Some("tok")).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(ref message) if message.contains("502")), "{err:?}");
}
