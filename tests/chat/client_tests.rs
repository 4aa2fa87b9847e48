//! ChatClient tests against scripted backends

#[path = "../common/mod.rs"]
mod common;

use common::{GatedBackend, MockBackend};
use docai_cli::tui::chat::{ChatView, message_lines};
use docai_core::constants::{NO_SOURCES_LABEL, SERVER_ERROR_MESSAGE};
use docai_core::{AppConfig, AskResponse, ChatClient, ConversationEntry, Resolution, Role};
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::test]
async fn blank_question_sends_nothing() {
    let backend = Arc::new(MockBackend::new().answering("unused", &[]));
    let mut client = ChatClient::new(backend.clone());
    client.state_mut().set_draft("   ");

    assert!(!client.submit_question().await);

    assert_eq!(backend.calls(), 0);
    assert!(client.state().log().is_empty());
    assert!(!client.state().is_pending());
}

#[tokio::test]
async fn answer_follows_question_in_order() {
    let backend = Arc::new(MockBackend::new().answering("X is Y", &["doc1.pdf"]));
    let mut client = ChatClient::new(backend.clone());
    client.state_mut().set_draft("What is X?");

    assert!(client.submit_question().await);

    assert_eq!(backend.questions(), vec!["What is X?"]);
    assert_eq!(
        client.state().log().entries(),
        &[
            ConversationEntry::user("What is X?"),
            ConversationEntry::bot("X is Y", vec!["doc1.pdf".to_string()]),
        ]
    );
    assert!(client.state().draft().is_empty());
    assert!(!client.state().is_pending());
}

#[tokio::test]
async fn missing_sources_become_empty() {
    let response: AskResponse = serde_json::from_str(r#"{"answer":"X is Y"}"#).unwrap();
    let backend = Arc::new(MockBackend::new().replying(response));
    let mut client = ChatClient::new(backend);
    client.state_mut().set_draft("What is X?");

    client.submit_question().await;

    let last = client.state().log().last().unwrap();
    assert_eq!(last.role, Role::Bot);
    assert_eq!(last.text, "X is Y");
    assert!(last.sources.is_empty());

    let rendered: String = message_lines(client.state(), &ChatView::new(), &AppConfig::default(), 80)
        .iter()
        .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
        .collect();
    assert!(rendered.contains(NO_SOURCES_LABEL));
}

#[tokio::test]
async fn stale_resolution_is_dropped() {
    let backend = Arc::new(GatedBackend::new(Ok(AskResponse::new("X is Y", Vec::new()))));
    let mut client = ChatClient::new(backend.clone());
    let (tx, mut rx) = mpsc::channel(4);

    client.state_mut().set_draft("What is X?");
    client.dispatch(tx);
    backend.release();
    let resolution = rx.recv().await.unwrap();
    let duplicate = Resolution {
        submission: resolution.submission.clone(),
        outcome: Ok(AskResponse::new("X is Z", Vec::new())),
    };

    assert!(client.apply(resolution));
    assert!(!client.apply(duplicate));

    assert_eq!(client.state().log().len(), 2);
    assert_eq!(client.state().log().last().unwrap().text, "X is Y");
}

#[tokio::test]
async fn failures_become_a_single_error_entry() {
    let backend = Arc::new(
        MockBackend::new()
            .failing_with_status(StatusCode::INTERNAL_SERVER_ERROR)
            .failing_with_garbage(),
    );
    let mut client = ChatClient::new(backend.clone());

    for question in ["first", "second"] {
        client.state_mut().set_draft(question);
        assert!(client.submit_question().await);
        assert!(!client.state().is_pending());
        assert_eq!(
            client.state().log().last().unwrap(),
            &ConversationEntry::bot(SERVER_ERROR_MESSAGE, Vec::new())
        );
    }

    assert_eq!(client.state().log().len(), 4);
    assert_eq!(backend.calls(), 2);
}

#[tokio::test]
async fn conversation_continues_after_a_failure() {
    let backend = Arc::new(
        MockBackend::new()
            .failing_with_status(StatusCode::BAD_GATEWAY)
            .answering("recovered", &["a.txt", "b.docx"]),
    );
    let mut client = ChatClient::new(backend);

    client.state_mut().set_draft("one");
    client.submit_question().await;
    client.state_mut().set_draft("two");
    client.submit_question().await;

    let texts: Vec<&str> = client
        .state()
        .log()
        .iter()
        .map(|entry| entry.text.as_str())
        .collect();
    assert_eq!(texts, vec!["one", SERVER_ERROR_MESSAGE, "two", "recovered"]);
    assert_eq!(
        client.state().log().last().unwrap().sources,
        vec!["a.txt", "b.docx"]
    );
}

#[tokio::test]
async fn pending_spans_exactly_the_request() {
    let backend = Arc::new(GatedBackend::new(Ok(AskResponse::new("X is Y", Vec::new()))));
    let mut client = ChatClient::new(backend.clone());
    let (tx, mut rx) = mpsc::channel(4);

    client.state_mut().set_draft("What is X?");
    assert!(!client.state().is_pending());

    assert!(client.dispatch(tx));
    assert!(client.state().is_pending());
    assert!(client.state().draft().is_empty());
    assert_eq!(client.state().log().len(), 1);

    backend.release();
    let resolution = rx.recv().await.expect("resolution delivered");
    assert!(client.state().is_pending());

    client.apply(resolution);
    assert!(!client.state().is_pending());
    assert_eq!(client.state().log().len(), 2);
    assert_eq!(client.state().log().last().unwrap().text, "X is Y");
}

#[tokio::test]
async fn second_dispatch_while_pending_is_refused() {
    let backend = Arc::new(GatedBackend::new(Ok(AskResponse::new("first answer", Vec::new()))));
    let mut client = ChatClient::new(backend.clone());
    let (tx, mut rx) = mpsc::channel(4);

    client.state_mut().set_draft("first");
    assert!(client.dispatch(tx.clone()));

    client.state_mut().set_draft("second");
    assert!(!client.dispatch(tx));
    assert_eq!(client.state().draft(), "second");

    backend.release();
    client.apply(rx.recv().await.unwrap());

    assert_eq!(backend.calls(), 1);
    let roles: Vec<Role> = client.state().log().iter().map(|e| e.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Bot]);
}
