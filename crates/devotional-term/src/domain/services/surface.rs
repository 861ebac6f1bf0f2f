use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::domain::models::ElementId;
use crate::domain::models::FormInput;

/// Read/write access to the elements the client renders into.
///
/// Every operation in the rendering pipeline goes through this trait, so the
/// pipeline runs the same against the terminal view and against tests.
pub trait DisplaySurface {
    fn text(&self, element: ElementId) -> String;
    fn set_text(&mut self, element: ElementId, text: &str);
    fn is_visible(&self, element: ElementId) -> bool;
    fn set_visible(&mut self, element: ElementId, visible: bool);
    fn is_enabled(&self, element: ElementId) -> bool;
    fn set_enabled(&mut self, element: ElementId, enabled: bool);
    fn form(&self) -> FormInput;
    fn set_form(&mut self, form: FormInput);
    fn topic_suggestions(&self) -> &[String];
    fn set_topic_suggestions(&mut self, topics: Vec<String>);
    fn scroll_into_view(&mut self, element: ElementId);

    fn reset_form(&mut self) {
        self.set_form(FormInput::default());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub text: String,
    pub visible: bool,
    pub enabled: bool,
}

/// In-memory UI state. The terminal view draws from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    elements: BTreeMap<ElementId, Element>,
    form: FormInput,
    topic_suggestions: Vec<String>,
    scroll_target: ElementId,
}

impl Default for UiState {
    fn default() -> UiState {
        return UiState::new();
    }
}

impl UiState {
    pub fn new() -> UiState {
        let elements = ElementId::iter()
            .map(|id| {
                let element = Element {
                    text: "".to_string(),
                    visible: !id.hidden_by_default(),
                    enabled: true,
                };
                return (id, element);
            })
            .collect::<BTreeMap<ElementId, Element>>();

        let mut ui = UiState {
            elements,
            form: FormInput::default(),
            topic_suggestions: vec![],
            scroll_target: ElementId::Header,
        };
        ui.set_text(ElementId::ButtonText, super::render::GENERATE_LABEL);

        return ui;
    }

    /// The element the view was last asked to bring into view.
    pub fn scroll_target(&self) -> ElementId {
        return self.scroll_target;
    }

    fn element_mut(&mut self, element: ElementId) -> &mut Element {
        return self.elements.entry(element).or_insert_with(|| Element {
            text: "".to_string(),
            visible: !element.hidden_by_default(),
            enabled: true,
        });
    }
}

impl DisplaySurface for UiState {
    fn text(&self, element: ElementId) -> String {
        return self
            .elements
            .get(&element)
            .map(|e| e.text.to_string())
            .unwrap_or_default();
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        self.element_mut(element).text = text.to_string();
    }

    fn is_visible(&self, element: ElementId) -> bool {
        return self
            .elements
            .get(&element)
            .map(|e| e.visible)
            .unwrap_or(false);
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) {
        self.element_mut(element).visible = visible;
    }

    fn is_enabled(&self, element: ElementId) -> bool {
        return self
            .elements
            .get(&element)
            .map(|e| e.enabled)
            .unwrap_or(false);
    }

    fn set_enabled(&mut self, element: ElementId, enabled: bool) {
        self.element_mut(element).enabled = enabled;
    }

    fn form(&self) -> FormInput {
        return self.form.clone();
    }

    fn set_form(&mut self, form: FormInput) {
        self.form = form;
    }

    fn topic_suggestions(&self) -> &[String] {
        return &self.topic_suggestions;
    }

    fn set_topic_suggestions(&mut self, topics: Vec<String>) {
        self.topic_suggestions = topics;
    }

    fn scroll_into_view(&mut self, element: ElementId) {
        tracing::trace!(element = %element, "scroll into view");
        self.scroll_target = element;
    }
}
