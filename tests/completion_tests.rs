//! Integration tests for the completion client and chat session
//!
//! A stub completion service is served with axum on an ephemeral local port.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use dialtone::{
    ChatError, ChatSession, ClientConfig, CompletionBackend, HttpCompletionClient, Origin,
    ParameterSnapshot, ReasoningEffort, build_request,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Seen = Arc<Mutex<Vec<Value>>>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server failed");
    });
    format!("http://{addr}/api/completion")
}

fn client_for(endpoint: String, timeout: Duration) -> HttpCompletionClient {
    HttpCompletionClient::new(&ClientConfig { endpoint, timeout }).expect("Failed to build client")
}

async fn echo(State(seen): State<Seen>, Json(body): Json<Value>) -> Json<Value> {
    let input = body["input"].as_str().unwrap_or_default().to_string();
    seen.lock().unwrap().push(body);
    Json(json!({ "content": format!("echo: {input}") }))
}

async fn echo_service() -> (String, Seen) {
    let seen = Seen::default();
    let router = Router::new()
        .route("/api/completion", post(echo))
        .with_state(seen.clone());
    (serve(router).await, seen)
}

mod client_tests {
    use super::*;

    #[tokio::test]
    async fn test_posts_payload_and_reads_content() {
        init_tracing();
        let (endpoint, seen) = echo_service().await;
        let client = client_for(endpoint, Duration::from_secs(5));

        let snapshot = ParameterSnapshot {
            temperature: 0.8,
            top_k: Some(5),
            top_p: None,
            reasoning_effort: ReasoningEffort::Low,
        };
        let reply = client
            .complete(&build_request("hi", &snapshot))
            .await
            .expect("completion should succeed");

        assert_eq!(reply, "echo: hi");
        let seen = seen.lock().unwrap();
        assert_eq!(
            seen[0],
            json!({
                "input": "hi",
                "params": { "temperature": 0.8, "top_k": 5, "reasoning_effort": "low" }
            })
        );
    }

    #[tokio::test]
    async fn test_message_key_and_fallback() {
        init_tracing();
        let router = Router::new()
            .route("/api/completion", post(|| async { Json(json!({ "message": "hello" })) }))
            .route("/empty", post(|| async { Json(json!({})) }));
        let endpoint = serve(router).await;
        let empty_endpoint = endpoint.replace("/api/completion", "/empty");
        let request = build_request("hi", &ParameterSnapshot::default());

        let reply = client_for(endpoint, Duration::from_secs(5))
            .complete(&request)
            .await
            .expect("completion should succeed");
        assert_eq!(reply, "hello");

        let reply = client_for(empty_endpoint, Duration::from_secs(5))
            .complete(&request)
            .await
            .expect("completion should succeed");
        assert_eq!(reply, "No response");
    }

    #[tokio::test]
    async fn test_non_success_status_is_generic_failure() {
        init_tracing();
        let router = Router::new().route(
            "/api/completion",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model exploded") }),
        );
        let client = client_for(serve(router).await, Duration::from_secs(5));

        let err = client
            .complete(&build_request("hi", &ParameterSnapshot::default()))
            .await
            .unwrap_err();
        assert_eq!(err, ChatError::Status(500));
        assert!(!err.to_string().contains("exploded"));
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        init_tracing();
        let router = Router::new().route(
            "/api/completion",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({ "content": "too late" }))
            }),
        );
        let client = client_for(serve(router).await, Duration::from_millis(200));

        let err = client
            .complete(&build_request("hi", &ParameterSnapshot::default()))
            .await
            .unwrap_err();
        assert_eq!(err, ChatError::Timeout);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_failure() {
        init_tracing();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to read local addr");
        drop(listener);

        let client = client_for(format!("http://{addr}/api/completion"), Duration::from_secs(5));
        let err = client
            .complete(&build_request("hi", &ParameterSnapshot::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Transport(_)), "got {err:?}");
    }
}

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_success_adds_user_then_assistant() {
        init_tracing();
        let (endpoint, _) = echo_service().await;
        let mut session = ChatSession::new(client_for(endpoint, Duration::from_secs(5)));

        session.send("hello").await.expect("send should succeed");

        let messages = session.store().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].origin(), Origin::User);
        assert_eq!(messages[0].content(), "hello");
        assert_eq!(messages[1].origin(), Origin::Assistant);
        assert_eq!(messages[1].content(), "echo: hello");
        assert!(!session.store().is_pending());
    }

    #[tokio::test]
    async fn test_failure_adds_error_bubble_and_recovers() {
        init_tracing();
        let router = Router::new().route(
            "/api/completion",
            post(|| async { StatusCode::BAD_GATEWAY }),
        );
        let mut session =
            ChatSession::new(client_for(serve(router).await, Duration::from_secs(5)));

        session.send("hello").await.expect("failure is recorded, not returned");
        session.send("still there?").await.expect("conversation stays usable");

        let messages = session.store().messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].content(), "❌ Error: Failed to send message");
        assert_eq!(messages[2].content(), "still there?");
        assert!(!session.store().is_pending());
    }

    #[tokio::test]
    async fn test_only_latest_message_is_sent() {
        init_tracing();
        let (endpoint, seen) = echo_service().await;
        let mut session = ChatSession::new(client_for(endpoint, Duration::from_secs(5)));
        session.params_mut().set_top_p("0.7");
        session.params_mut().set_reasoning_effort(ReasoningEffort::High);

        session.send("first").await.expect("send should succeed");
        session.send("second").await.expect("send should succeed");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1]["input"], "second");
        assert_eq!(seen[1]["params"]["top_p"], 0.7);
        assert_eq!(seen[1]["params"]["reasoning_effort"], "high");
        assert!(seen[1]["params"].get("top_k").is_none());
    }
}
