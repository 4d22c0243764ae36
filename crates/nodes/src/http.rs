use {async_trait::async_trait, serde_json::Value, tracing::debug};

use crate::{
    capability::{HttpMethod, HttpRequest, HttpRequester},
    error::{Error, Result},
};

/// Default `HttpRequester` backed by a shared `reqwest` client.
///
/// Non-2xx statuses are not failures at this layer: the Telegram Bot API
/// reports errors as `{"ok": false, "description": ...}` JSON bodies with
/// 4xx statuses, and the application-level `ok` check is authoritative.
#[derive(Debug, Clone, Default)]
pub struct ReqwestRequester {
    client: reqwest::Client,
}

impl ReqwestRequester {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing client (connection pool, custom timeouts).
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpRequester for ReqwestRequester {
    async fn request_json(&self, request: HttpRequest) -> Result<Value> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::operation("http request failed", e))?;

        debug!(method = request.method.as_str(), status = %response.status(), "http response");

        response
            .json()
            .await
            .map_err(|e| Error::operation("failed to decode json response", e))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        axum::{Json, Router, body::Bytes, http::StatusCode, routing::post},
        serde_json::json,
        std::{
            net::SocketAddr,
            sync::{Arc, Mutex},
        },
        tokio::sync::oneshot,
    };

    async fn spawn_server(app: Router) -> (SocketAddr, oneshot::Sender<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("serve mock api");
        });
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        (addr, shutdown_tx)
    }

    #[tokio::test]
    async fn posts_json_body_and_decodes_response() {
        let received = Arc::new(Mutex::new(Vec::<String>::new()));
        let received_handler = Arc::clone(&received);
        let app = Router::new().route(
            "/echo",
            post(move |body: Bytes| {
                let received = Arc::clone(&received_handler);
                async move {
                    received
                        .lock()
                        .expect("received lock")
                        .push(String::from_utf8_lossy(&body).to_string());
                    Json(json!({"ok": true, "result": 7}))
                }
            }),
        );
        let (addr, shutdown) = spawn_server(app).await;

        let requester = ReqwestRequester::new();
        let response = requester
            .request_json(HttpRequest::post(
                format!("http://{addr}/echo"),
                json!({"question": "Q?"}),
            ))
            .await
            .expect("request succeeds");

        assert_eq!(response, json!({"ok": true, "result": 7}));
        let bodies = received.lock().expect("received lock");
        assert!(bodies[0].contains("\"question\""));
        drop(shutdown);
    }

    #[tokio::test]
    async fn non_2xx_json_body_is_still_decoded() {
        let app = Router::new().route(
            "/fail",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"ok": false, "description": "Bad Request: chat not found"})),
                )
            }),
        );
        let (addr, shutdown) = spawn_server(app).await;

        let requester = ReqwestRequester::new();
        let response = requester
            .request_json(HttpRequest::post(format!("http://{addr}/fail"), json!({})))
            .await
            .expect("4xx body decodes without transport error");

        assert_eq!(response["ok"], json!(false));
        assert_eq!(response["description"], json!("Bad Request: chat not found"));
        drop(shutdown);
    }

    #[tokio::test]
    async fn connection_failure_wraps_into_operation_error() {
        let requester = ReqwestRequester::new();
        // Port 1 is never listening in the test environment.
        let err = requester
            .request_json(HttpRequest::post("http://127.0.0.1:1/x", json!({})))
            .await
            .expect_err("connection must fail");

        assert!(matches!(err, Error::Operation { .. }));
        assert!(err.to_string().contains("http request failed"));
    }
}
