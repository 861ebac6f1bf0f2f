use devotional_types::AgeGroup;
use devotional_types::Devotional;

use super::DisplaySurface;
use crate::domain::models::ElementId;

pub const GENERATE_LABEL: &str = "Generate Devotional";
pub const GENERATING_LABEL: &str = "Generating...";
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate devotional. Please try again.";

/// Label for an age group code. Unknown codes are shown as they are.
pub fn format_age_group(age_group: &str) -> String {
    return match age_group.parse::<AgeGroup>() {
        Ok(group) => group.label().to_string(),
        Err(_) => age_group.to_string(),
    };
}

/// Replace the suggestion list. Each entry becomes a selectable control.
pub fn render_topic_suggestions<S: DisplaySurface + ?Sized>(surface: &mut S, topics: Vec<String>) {
    surface.set_topic_suggestions(topics);
}

/// Put a suggested topic into the topic field, overwriting whatever was typed.
pub fn select_topic<S: DisplaySurface + ?Sized>(surface: &mut S, topic: &str) {
    let mut form = surface.form();
    form.topic = topic.to_string();
    surface.set_form(form);
}

pub fn render_devotional<S: DisplaySurface + ?Sized>(surface: &mut S, devotional: &Devotional) {
    surface.set_text(ElementId::DevotionalTitle, &devotional.title);
    surface.set_text(ElementId::QuestionOfDay, &devotional.question_of_day);
    surface.set_text(ElementId::ListenContent, &devotional.listen_content);
    surface.set_text(ElementId::LearnContent, &devotional.learn_content);
    surface.set_text(ElementId::LiveContent, &devotional.live_content);
    surface.set_text(ElementId::DevotionalPrayer, &devotional.prayer);

    let scripture = devotional
        .listen_scripture
        .as_deref()
        .filter(|s| !s.is_empty());
    surface.set_text(ElementId::ListenScripture, scripture.unwrap_or_default());
    surface.set_visible(ElementId::ListenScripture, scripture.is_some());

    surface.set_text(
        ElementId::AgeGroupTag,
        &format_age_group(&devotional.age_group),
    );

    if let Some(topic) = devotional.display_topic() {
        surface.set_text(ElementId::TopicTag, &format!("Topic: {topic}"));
        surface.set_visible(ElementId::TopicTag, true);
    } else {
        surface.set_visible(ElementId::TopicTag, false);
    }

    surface.set_visible(ElementId::DevotionalResult, true);
    surface.scroll_into_view(ElementId::DevotionalResult);
}

pub fn set_loading_state<S: DisplaySurface + ?Sized>(surface: &mut S, is_loading: bool) {
    surface.set_enabled(ElementId::GenerateButton, !is_loading);

    if is_loading {
        surface.set_text(ElementId::ButtonText, GENERATING_LABEL);
        surface.set_visible(ElementId::LoadingSpinner, true);
    } else {
        surface.set_text(ElementId::ButtonText, GENERATE_LABEL);
        surface.set_visible(ElementId::LoadingSpinner, false);
    }
}

pub fn is_loading<S: DisplaySurface + ?Sized>(surface: &S) -> bool {
    return !surface.is_enabled(ElementId::GenerateButton);
}

pub fn show_error<S: DisplaySurface + ?Sized>(surface: &mut S, message: &str) {
    surface.set_text(ElementId::ErrorMessage, message);
    surface.set_visible(ElementId::ErrorMessage, true);
    surface.scroll_into_view(ElementId::ErrorMessage);
}

pub fn hide_error<S: DisplaySurface + ?Sized>(surface: &mut S) {
    surface.set_visible(ElementId::ErrorMessage, false);
}

/// Clear the form, hide the result and any error, and go back to the top.
pub fn reset_view<S: DisplaySurface + ?Sized>(surface: &mut S) {
    surface.reset_form();
    surface.set_visible(ElementId::DevotionalResult, false);
    hide_error(surface);
    surface.scroll_into_view(ElementId::Header);
}
