use devotional_types::GenerationRequest;

/// Work handed from the UI loop to the actions worker.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    HealthCheck,
    LoadTopics,
    Generate(GenerationRequest),
    Print(String),
}
