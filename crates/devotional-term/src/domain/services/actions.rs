use std::sync::Arc;

use anyhow::Result;
use devotional_client::DevotionalApiBox;
use devotional_types::GenerationRequest;
use tokio::sync::mpsc;

use super::print::export_for_print;
use super::topics::fetch_topic_suggestions;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::PrintWindowBox;

async fn health_check(
    api: &DevotionalApiBox,
    server_url: String,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    if let Err(err) = api.health_check().await {
        tracing::warn!(error = ?err, url = %server_url, "devotional service is not reachable");
        event_tx.send(Event::ServiceUnreachable(server_url))?;
    }

    Ok(())
}

async fn load_topics(api: &DevotionalApiBox, event_tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    let topics = fetch_topic_suggestions(&**api).await;
    event_tx.send(Event::TopicsLoaded(topics))?;

    Ok(())
}

async fn generate(
    api: &DevotionalApiBox,
    request: GenerationRequest,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    match api.generate(&request).await {
        Ok(devotional) => {
            tracing::info!(title = %devotional.title, "devotional generated");
            event_tx.send(Event::DevotionalGenerated(devotional))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, "Error generating devotional");
            event_tx.send(Event::GenerationFailed)?;
        }
    }

    Ok(())
}

async fn print(window: &PrintWindowBox, document: String) -> Result<()> {
    if let Err(err) = export_for_print(&**window, &document).await {
        tracing::error!(error = ?err, "Error printing devotional");
    }

    Ok(())
}

pub struct ActionsService {}

impl ActionsService {
    /// Run actions until the sending side closes. Each network call runs on
    /// its own task and reports back through `event_tx`.
    pub async fn start(
        api: DevotionalApiBox,
        print_window: PrintWindowBox,
        server_url: String,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let api_arc = Arc::new(api);
        let print_window_arc = Arc::new(print_window);

        while let Some(action) = rx.recv().await {
            let worker_event_tx = event_tx.clone();
            match action {
                Action::HealthCheck => {
                    let api_worker = api_arc.clone();
                    let url = server_url.clone();
                    tokio::spawn(async move {
                        health_check(&api_worker, url, &worker_event_tx).await
                    });
                }
                Action::LoadTopics => {
                    let api_worker = api_arc.clone();
                    tokio::spawn(async move { load_topics(&api_worker, &worker_event_tx).await });
                }
                Action::Generate(request) => {
                    let api_worker = api_arc.clone();
                    tokio::spawn(async move {
                        generate(&api_worker, request, &worker_event_tx).await
                    });
                }
                Action::Print(document) => {
                    let window_worker = print_window_arc.clone();
                    tokio::spawn(async move { print(&window_worker, document).await });
                }
            }
        }

        Ok(())
    }
}
