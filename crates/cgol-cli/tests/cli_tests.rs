//! End-to-end tests for prompt handling.
//!
//! Each test starts real HTTP servers on ephemeral ports: a mock chat
//! completions endpoint and either the real word endpoint router or a
//! mock that fails on purpose.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use cgol_api::{AppState, build_router};
use cgol_cli::tool::{MISSING_WORD_REPLY, UNRECOGNIZED_REPLY};
use cgol_cli::{ChatClient, CliConfig, ConwayClient, ConwayTool, Session, repl};
use cgol_engine::{Engine, EngineConfig};
use serde_json::{Value, json};

/// One request seen by the mock chat endpoint.
#[derive(Debug, Clone)]
struct Captured {
    headers: HeaderMap,
    body: Value,
}

#[derive(Default)]
struct ChatLog {
    requests: Mutex<Vec<Captured>>,
}

impl ChatLog {
    fn requests(&self) -> Vec<Captured> {
        self.requests.lock().unwrap().clone()
    }
}

async fn chat_ok(
    State(log): State<Arc<ChatLog>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    log.requests.lock().unwrap().push(Captured { headers, body });
    Json(json!({
        "choices": [{
            "message": {"role": "assistant", "content": "Checking with the Conway tool."}
        }]
    }))
}

async fn chat_broken(State(log): State<Arc<ChatLog>>) -> (StatusCode, &'static str) {
    log.requests.lock().unwrap().push(Captured {
        headers: HeaderMap::new(),
        body: Value::Null,
    });
    (StatusCode::UNAUTHORIZED, "invalid api key")
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn start_chat() -> (SocketAddr, Arc<ChatLog>) {
    let log = Arc::new(ChatLog::default());
    let router = Router::new()
        .route("/v1/chat/completions", post(chat_ok))
        .route("/v1/broken", post(chat_broken))
        .with_state(Arc::clone(&log));
    (serve(router).await, log)
}

fn small_engine() -> Engine {
    Engine::new(EngineConfig {
        board_size: 16,
        max_generations: 200,
        ..EngineConfig::default()
    })
    .unwrap()
}

async fn start_word_endpoint() -> SocketAddr {
    serve(build_router(Arc::new(AppState::new(small_engine())))).await
}

/// A word endpoint that always answers 500 and counts its calls.
async fn start_failing_word_endpoint() -> (SocketAddr, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route(
            "/cgol",
            post(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (StatusCode::INTERNAL_SERVER_ERROR, "boom")
            }),
        )
        .with_state(Arc::clone(&hits));
    (serve(router).await, hits)
}

fn session(chat_url: String, conway: ConwayClient, content_type: &str) -> Session {
    let config = CliConfig {
        llm_api_url: chat_url,
        llm_api_key: "sk-test".to_owned(),
        content_type: content_type.to_owned(),
        ..CliConfig::default()
    };
    Session::new(ChatClient::new(&config), ConwayTool::new(conway).unwrap())
}

fn closed_port_url() -> String {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    format!("http://127.0.0.1:{port}/cgol")
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn word_query_through_real_endpoint() {
    let (chat, _log) = start_chat().await;
    let cgol = start_word_endpoint().await;
    let expected = small_engine().simulate("hello");

    let session = session(
        format!("http://{chat}/v1/chat/completions"),
        ConwayClient::remote(format!("http://{cgol}/cgol")),
        "application/json",
    );
    let reply = session
        .handle_prompt("How many generations will the word 'hello' have?")
        .await;

    assert_eq!(
        reply,
        format!(
            "The word 'hello' results in {} generations and a score of {}.",
            expected.generations, expected.score
        )
    );
}

#[tokio::test]
async fn llm_request_shape() {
    let (chat, log) = start_chat().await;
    let session = session(
        format!("http://{chat}/v1/chat/completions"),
        ConwayClient::local(small_engine()),
        "application/json; charset=utf-8",
    );

    let reply = session.handle_prompt("what is the weather").await;
    assert_eq!(reply, UNRECOGNIZED_REPLY);

    let requests = log.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.headers["authorization"], "Bearer sk-test");
    assert_eq!(
        request.headers["content-type"],
        "application/json; charset=utf-8"
    );
    assert_eq!(request.body["model"], "gpt-4o-mini");
    assert_eq!(request.body["temperature"], 0.7);
    assert_eq!(
        request.body["messages"],
        json!([{"role": "user", "content": "what is the weather"}])
    );
}

#[tokio::test]
async fn llm_failure_short_circuits() {
    let (chat, log) = start_chat().await;
    let (cgol, hits) = start_failing_word_endpoint().await;
    let session = session(
        format!("http://{chat}/v1/broken"),
        ConwayClient::remote(format!("http://{cgol}/cgol")),
        "application/json",
    );

    let reply = session
        .handle_prompt("how many generations will the word 'hello' have")
        .await;

    assert!(reply.starts_with("Error calling GPT API: "), "{reply}");
    assert!(reply.contains("401"), "{reply}");
    assert_eq!(log.requests().len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn llm_unreachable_is_reported() {
    let session = session(
        closed_port_url(),
        ConwayClient::local(small_engine()),
        "application/json",
    );
    let reply = session.handle_prompt("generate 3 random words").await;
    assert!(reply.starts_with("Error calling GPT API: "), "{reply}");
}

#[tokio::test]
async fn word_endpoint_error_is_reported() {
    let (chat, _log) = start_chat().await;
    let (cgol, hits) = start_failing_word_endpoint().await;
    let session = session(
        format!("http://{chat}/v1/chat/completions"),
        ConwayClient::remote(format!("http://{cgol}/cgol")),
        "application/json",
    );

    let reply = session
        .handle_prompt("how many generations will the word 'hello' have")
        .await;
    assert!(reply.starts_with("Error calling Conway API: "), "{reply}");
    assert!(reply.contains("500"), "{reply}");
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // The comparison stops at the first failing word.
    let reply = session.handle_prompt("generate 3 random words").await;
    assert!(reply.starts_with("Error calling Conway API: "), "{reply}");
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn word_endpoint_unreachable_is_reported() {
    let (chat, _log) = start_chat().await;
    let session = session(
        format!("http://{chat}/v1/chat/completions"),
        ConwayClient::remote(closed_port_url()),
        "application/json",
    );
    let reply = session
        .handle_prompt("how many generations will the word 'hello' have")
        .await;
    assert!(reply.starts_with("Error calling Conway API: "), "{reply}");
}

#[tokio::test]
async fn random_words_through_real_endpoint() {
    let (chat, _log) = start_chat().await;
    let cgol = start_word_endpoint().await;
    let session = session(
        format!("http://{chat}/v1/chat/completions"),
        ConwayClient::remote(format!("http://{cgol}/cgol")),
        "application/json",
    );

    let reply = session
        .handle_prompt("Generate 3 random words and tell me which wins")
        .await;

    assert!(
        reply.starts_with("Generated 3 random words and their results: '"),
        "{reply}"
    );
    assert_eq!(reply.matches("(gens: ").count(), 3, "{reply}");
    assert!(reply.contains(". The highest Conway score is for '"), "{reply}");
    assert!(reply.ends_with('.'));
}

#[tokio::test]
async fn missing_word_reply() {
    let (chat, _log) = start_chat().await;
    let session = session(
        format!("http://{chat}/v1/chat/completions"),
        ConwayClient::local(small_engine()),
        "application/json",
    );
    assert_eq!(
        session
            .handle_prompt("how many generations will the word hello have")
            .await,
        MISSING_WORD_REPLY
    );
}

#[tokio::test]
async fn repl_transcript() {
    let (chat, log) = start_chat().await;
    let expected = small_engine().simulate("glider");
    let session = session(
        format!("http://{chat}/v1/chat/completions"),
        ConwayClient::local(small_engine()),
        "application/json",
    );

    let mut input: &[u8] = b"How many generations will the word \"glider\" take?\nEXIT\nnever read\n";
    let mut output = Vec::new();
    repl::run(&session, &mut input, &mut output).await.unwrap();

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.starts_with("\nWelcome to the Conway CLI! Type 'exit' to quit.\n"));
    assert!(transcript.contains(&format!(
        "Response:\nThe word 'glider' results in {} generations and a score of {}.\n\n",
        expected.generations, expected.score
    )));
    assert!(transcript.ends_with("Goodbye!\n"));
    assert_eq!(log.requests().len(), 1);
}

#[tokio::test]
async fn repl_ends_on_closed_input() {
    let (chat, log) = start_chat().await;
    let session = session(
        format!("http://{chat}/v1/chat/completions"),
        ConwayClient::local(small_engine()),
        "application/json",
    );

    let mut input: &[u8] = b"";
    let mut output = Vec::new();
    repl::run(&session, &mut input, &mut output).await.unwrap();

    assert!(String::from_utf8(output).unwrap().ends_with("Goodbye!\n"));
    assert!(log.requests().is_empty());
}
