use anyhow::Result;
use devotional_client::DevotionalApi;

/// Topics offered when the service can't provide its own list.
pub const FALLBACK_TOPICS: [&str; 7] = [
    "Faith and Trust",
    "Love and Kindness",
    "Prayer and Worship",
    "Forgiveness",
    "Patience",
    "Gratitude",
    "Courage",
];

pub fn fallback_topics() -> Vec<String> {
    FALLBACK_TOPICS.iter().map(|t| t.to_string()).collect()
}

/// The fetched topics, or the fallback list when the fetch failed.
pub fn topics_or_fallback(fetched: Result<Vec<String>>) -> Vec<String> {
    match fetched {
        Ok(topics) => topics,
        Err(err) => {
            tracing::error!(error = ?err, "Error loading topics, using fallback topics");
            fallback_topics()
        }
    }
}

/// Fetch the topic suggestions. Never fails.
pub async fn fetch_topic_suggestions(api: &dyn DevotionalApi) -> Vec<String> {
    topics_or_fallback(api.topics().await)
}
