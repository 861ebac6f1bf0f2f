//! End-to-end runs of the client state machine against a mock service.

use anyhow::Result;
use devotional_client::HttpDevotionalClient;
use devotional_term::domain::models::Action;
use devotional_term::domain::models::ElementId;
use devotional_term::domain::models::Event;
use devotional_term::domain::models::FormInput;
use devotional_term::domain::services::ActionsService;
use devotional_term::domain::services::AppState;
use devotional_term::domain::services::DisplaySurface;
use devotional_term::infrastructure::printers::FilePrintWindow;
use devotional_types::AgeGroup;
use mockito::Matcher;
use serde_json::json;
use tokio::sync::mpsc;

struct Harness {
    app_state: AppState,
    action_tx: mpsc::UnboundedSender<Action>,
    event_rx: mpsc::UnboundedReceiver<Event>,
    _print_dir: tempfile::TempDir,
}

impl Harness {
    fn start(server_url: String) -> Result<Harness> {
        let print_dir = tempfile::tempdir()?;
        let api = Box::new(HttpDevotionalClient::new(server_url.clone()));
        let window = Box::new(FilePrintWindow::new(print_dir.path().to_path_buf()).with_opener(None));

        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
        let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
        tokio::spawn(async move {
            ActionsService::start(api, window, server_url, event_tx, &mut action_rx).await
        });

        return Ok(Harness {
            app_state: AppState::new(),
            action_tx,
            event_rx,
            _print_dir: print_dir,
        });
    }

    async fn next_event(&mut self) -> Result<()> {
        let event = self
            .event_rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("actions service stopped"))?;
        self.app_state.handle_event(event, &self.action_tx)?;

        return Ok(());
    }
}

#[tokio::test]
async fn it_generates_without_topic() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/generate-devotional")
        .match_body(Matcher::Json(json!({"age_group": "teens", "topic": null})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "title": "T",
                "question_of_day": "Q",
                "listen_content": "L1",
                "learn_content": "L2",
                "live_content": "L3",
                "prayer": "P",
                "age_group": "teens",
                "topic": null
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut harness = Harness::start(server.url())?;
    harness.app_state.ui.set_form(FormInput {
        age_group: Some(AgeGroup::Teens),
        topic: "".to_string(),
    });

    harness.app_state.submit_generation(&harness.action_tx)?;
    assert!(!harness.app_state.ui.is_enabled(ElementId::GenerateButton));
    harness.next_event().await?;

    let ui = &harness.app_state.ui;
    assert_eq!(ui.text(ElementId::DevotionalTitle), "T");
    assert_eq!(ui.text(ElementId::AgeGroupTag), "Teens (13-17 years)");
    assert!(!ui.is_visible(ElementId::TopicTag));
    assert!(ui.is_visible(ElementId::DevotionalResult));
    assert!(ui.is_enabled(ElementId::GenerateButton));
    assert!(!ui.is_visible(ElementId::ErrorMessage));
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_falls_back_when_topics_fail() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/topics")
        .with_status(500)
        .with_body(r#"{"detail": "boom"}"#)
        .create_async()
        .await;

    let mut harness = Harness::start(server.url())?;
    harness.action_tx.send(Action::LoadTopics)?;
    harness.next_event().await?;

    let suggestions = harness.app_state.ui.topic_suggestions();
    assert_eq!(suggestions.len(), 7);
    assert_eq!(suggestions[0], "Faith and Trust");
    assert_eq!(suggestions[6], "Courage");

    return Ok(());
}

#[tokio::test]
async fn it_shows_generic_error_on_server_failure() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/generate-devotional")
        .with_status(500)
        .with_body(r#"{"detail": "Failed to generate devotional: model offline"}"#)
        .create_async()
        .await;

    let mut harness = Harness::start(server.url())?;
    harness.app_state.ui.set_form(FormInput {
        age_group: Some(AgeGroup::Children),
        topic: "Courage".to_string(),
    });

    harness.app_state.submit_generation(&harness.action_tx)?;
    harness.next_event().await?;

    let ui = &harness.app_state.ui;
    assert_eq!(
        ui.text(ElementId::ErrorMessage),
        "Failed to generate devotional. Please try again."
    );
    assert!(!ui.is_visible(ElementId::DevotionalResult));
    assert!(ui.is_enabled(ElementId::GenerateButton));

    return Ok(());
}

#[tokio::test]
async fn it_shows_generic_error_on_malformed_devotional() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/generate-devotional")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"title": 1}"#)
        .create_async()
        .await;

    let mut harness = Harness::start(server.url())?;
    harness.app_state.ui.set_form(FormInput {
        age_group: Some(AgeGroup::Teens),
        topic: "".to_string(),
    });

    harness.app_state.submit_generation(&harness.action_tx)?;
    harness.next_event().await?;

    let ui = &harness.app_state.ui;
    assert_eq!(
        ui.text(ElementId::ErrorMessage),
        "Failed to generate devotional. Please try again."
    );
    assert!(ui.is_visible(ElementId::ErrorMessage));
    assert!(!ui.is_visible(ElementId::LoadingSpinner));
    assert!(!ui.is_visible(ElementId::DevotionalResult));
    assert!(ui.is_enabled(ElementId::GenerateButton));

    return Ok(());
}
