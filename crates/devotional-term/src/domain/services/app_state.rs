use anyhow::Result;
use chrono::NaiveDate;
use devotional_types::AgeGroup;
use devotional_types::GenerationRequest;
use tokio::sync::mpsc;

use super::print::build_print_document;
use super::render;
use super::DisplaySurface;
use super::UiState;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Focus;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub struct AppState {
    pub focus: Focus,
    pub result_scroll: u16,
    pub selected_suggestion: usize,
    pub spinner_frame: usize,
    pub ui: UiState,
}

impl Default for AppState {
    fn default() -> AppState {
        return AppState::new();
    }
}

impl AppState {
    pub fn new() -> AppState {
        return AppState {
            focus: Focus::default(),
            result_scroll: 0,
            selected_suggestion: 0,
            spinner_frame: 0,
            ui: UiState::new(),
        };
    }

    /// Validate the form and, when valid, hand the request to the actions
    /// worker. A missing age group never reaches the network.
    pub fn submit_generation(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if render::is_loading(&self.ui) {
            return Ok(());
        }

        let form = self.ui.form();
        let request = match GenerationRequest::from_form(form.age_group, &form.topic) {
            Ok(request) => request,
            Err(err) => {
                render::show_error(&mut self.ui, &err.to_string());
                return Ok(());
            }
        };

        render::set_loading_state(&mut self.ui, true);
        render::hide_error(&mut self.ui);
        tx.send(Action::Generate(request))?;

        return Ok(());
    }

    pub fn reset_view(&mut self) {
        render::reset_view(&mut self.ui);
        self.focus = Focus::AgeGroup;
        self.result_scroll = 0;
    }

    /// Queue the rendered devotional for printing. Does nothing before the
    /// first devotional is shown.
    pub fn export_for_print(
        &self,
        generated_on: NaiveDate,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        match build_print_document(&self.ui, generated_on) {
            Some(document) => tx.send(Action::Print(document))?,
            None => tracing::warn!("nothing to print yet"),
        }

        return Ok(());
    }

    fn cycle_age_group(&mut self, forward: bool) {
        let mut form = self.ui.form();
        form.age_group = match (form.age_group, forward) {
            (None, true) => Some(AgeGroup::ALL[0]),
            (None, false) => AgeGroup::ALL.last().copied(),
            (Some(group), true) => Some(group.next()),
            (Some(group), false) => Some(group.previous()),
        };
        self.ui.set_form(form);
    }

    fn move_suggestion(&mut self, forward: bool) {
        let count = self.ui.topic_suggestions().len();
        if count == 0 {
            return;
        }

        self.selected_suggestion = if forward {
            (self.selected_suggestion + 1) % count
        } else {
            (self.selected_suggestion + count - 1) % count
        };
    }

    fn move_selection(&mut self, forward: bool) {
        match self.focus {
            Focus::AgeGroup => self.cycle_age_group(forward),
            Focus::Suggestions => self.move_suggestion(forward),
            _ => {}
        }
    }

    fn select_focused_suggestion(&mut self) {
        if let Some(topic) = self
            .ui
            .topic_suggestions()
            .get(self.selected_suggestion)
            .cloned()
        {
            render::select_topic(&mut self.ui, &topic);
        }
    }

    /// Apply one event to the state. Returns true when the app should exit.
    pub fn handle_event(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        match event {
            Event::TopicsLoaded(topics) => {
                render::render_topic_suggestions(&mut self.ui, topics);
                self.selected_suggestion = 0;
            }
            Event::DevotionalGenerated(devotional) => {
                render::set_loading_state(&mut self.ui, false);
                render::hide_error(&mut self.ui);
                render::render_devotional(&mut self.ui, &devotional);
                self.result_scroll = 0;
            }
            Event::GenerationFailed => {
                render::set_loading_state(&mut self.ui, false);
                render::show_error(&mut self.ui, render::GENERATION_FAILED_MESSAGE);
            }
            Event::ServiceUnreachable(url) => {
                render::show_error(
                    &mut self.ui,
                    &format!(
                        "Cannot reach the devotional service at {url}. Requests may fail."
                    ),
                );
            }
            Event::KeyboardCTRLC => {
                return Ok(true);
            }
            Event::KeyboardCTRLN => {
                self.reset_view();
            }
            Event::KeyboardCTRLP => {
                self.export_for_print(chrono::Local::now().date_naive(), tx)?;
            }
            Event::KeyboardTab => {
                self.focus = self.focus.next();
            }
            Event::KeyboardBackTab => {
                self.focus = self.focus.previous();
            }
            Event::KeyboardLeft => {
                self.move_selection(false);
            }
            Event::KeyboardRight => {
                self.move_selection(true);
            }
            Event::KeyboardChar(c) => {
                if self.focus == Focus::Topic {
                    let mut form = self.ui.form();
                    form.topic.push(c);
                    self.ui.set_form(form);
                }
            }
            Event::KeyboardPaste(text) => {
                if self.focus == Focus::Topic {
                    let mut form = self.ui.form();
                    form.topic.push_str(text.trim_end_matches(['\r', '\n']));
                    self.ui.set_form(form);
                }
            }
            Event::KeyboardBackspace => {
                if self.focus == Focus::Topic {
                    let mut form = self.ui.form();
                    form.topic.pop();
                    self.ui.set_form(form);
                }
            }
            Event::KeyboardEnter => {
                if self.focus == Focus::Suggestions {
                    self.select_focused_suggestion();
                } else {
                    self.submit_generation(tx)?;
                }
            }
            Event::UIScrollDown => {
                self.result_scroll = self.result_scroll.saturating_add(1);
            }
            Event::UIScrollUp => {
                self.result_scroll = self.result_scroll.saturating_sub(1);
            }
            Event::UITick => {
                if render::is_loading(&self.ui) {
                    self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
                }
            }
        }

        return Ok(false);
    }
}
