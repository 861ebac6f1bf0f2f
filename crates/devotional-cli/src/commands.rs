use std::io::Write;

use anyhow::bail;
use anyhow::Result;
use chrono::NaiveDate;
use devotional_client::DevotionalApi;
use devotional_term::domain::models::ElementId;
use devotional_term::domain::models::PrintWindow;
use devotional_term::domain::services::print::build_print_document;
use devotional_term::domain::services::print::export_for_print;
use devotional_term::domain::services::render;
use devotional_term::domain::services::topics::fetch_topic_suggestions;
use devotional_term::domain::services::DisplaySurface;
use devotional_term::domain::services::UiState;
use devotional_types::AgeGroup;
use devotional_types::GenerationRequest;

/// Plain-text rendering of the devotional currently shown on `surface`.
pub fn format_devotional_text<S: DisplaySurface + ?Sized>(surface: &S) -> String {
    let mut tags = format!("[{}]", surface.text(ElementId::AgeGroupTag));
    if surface.is_visible(ElementId::TopicTag) {
        tags.push_str(&format!(" [{}]", surface.text(ElementId::TopicTag)));
    }

    let mut listen = String::new();
    if surface.is_visible(ElementId::ListenScripture) {
        listen.push_str(&surface.text(ElementId::ListenScripture));
        listen.push('\n');
    }
    listen.push_str(&surface.text(ElementId::ListenContent));

    let sections = [
        ("Question of the Day", surface.text(ElementId::QuestionOfDay)),
        ("Listen", listen),
        ("Learn", surface.text(ElementId::LearnContent)),
        ("Live", surface.text(ElementId::LiveContent)),
        ("Prayer", surface.text(ElementId::DevotionalPrayer)),
    ];

    let mut text = format!("{}\n{tags}\n", surface.text(ElementId::DevotionalTitle));
    for (heading, body) in sections {
        text.push_str(&format!("\n{heading}\n{body}\n"));
    }

    return text;
}

/// Print the topic suggestions one per line.
pub async fn run_topics(api: &dyn DevotionalApi, out: &mut impl Write) -> Result<()> {
    for topic in fetch_topic_suggestions(api).await {
        writeln!(out, "{topic}")?;
    }

    return Ok(());
}

/// Generate one devotional and print it. With a print window, the
/// printable page is exported as well.
pub async fn run_generate(
    api: &dyn DevotionalApi,
    age_group: Option<&str>,
    topic: Option<&str>,
    print_window: Option<&dyn PrintWindow>,
    generated_on: NaiveDate,
    out: &mut impl Write,
) -> Result<()> {
    let age_group = age_group.map(|code| code.parse::<AgeGroup>()).transpose()?;
    let request = GenerationRequest::from_form(age_group, topic.unwrap_or_default())?;

    let devotional = match api.generate(&request).await {
        Ok(devotional) => devotional,
        Err(err) => {
            log::error!("Error generating devotional: {err:?}");
            bail!(render::GENERATION_FAILED_MESSAGE);
        }
    };

    let mut ui = UiState::new();
    render::render_devotional(&mut ui, &devotional);
    write!(out, "{}", format_devotional_text(&ui))?;

    if let Some(window) = print_window {
        if let Some(document) = build_print_document(&ui, generated_on) {
            export_for_print(window, &document).await?;
        }
    }

    return Ok(());
}

#[cfg(test)]
mod tests {
    use devotional_term::domain::services::render::render_devotional;
    use devotional_types::Devotional;

    use super::*;

    fn devotional(scripture: Option<&str>, topic: Option<&str>) -> Devotional {
        return Devotional {
            title: "Walking in Faith".to_string(),
            question_of_day: "Where do you need courage?".to_string(),
            listen_scripture: scripture.map(str::to_string),
            listen_content: "Listen body".to_string(),
            learn_content: "Learn body".to_string(),
            live_content: "Live body".to_string(),
            prayer: "Amen".to_string(),
            age_group: "young_adults".to_string(),
            topic: topic.map(str::to_string),
        };
    }

    #[test]
    fn test_format_with_topic_and_scripture() {
        let mut ui = UiState::new();
        render_devotional(&mut ui, &devotional(Some("Psalm 23:1"), Some("Trust")));

        let text = format_devotional_text(&ui);

        assert!(text.starts_with(
            "Walking in Faith\n[Young Adults (18-25 years)] [Topic: Trust]\n"
        ));
        assert!(text.contains("\nListen\nPsalm 23:1\nListen body\n"));
        assert!(text.ends_with("\nPrayer\nAmen\n"));
    }

    #[test]
    fn test_format_without_topic() {
        let mut ui = UiState::new();
        render_devotional(&mut ui, &devotional(None, Some("")));

        let text = format_devotional_text(&ui);

        assert!(text.contains("[Young Adults (18-25 years)]\n"));
        assert!(!text.contains("Topic:"));
        assert!(text.contains("\nListen\nListen body\n"));
    }
}
