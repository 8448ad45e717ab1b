use super::error::StateError;
use super::navigation::{Focus, Section};
use crate::app::NetworkEventSender;
use crate::contact::{ContactError, ContactForm, SubmissionReceipt};
use crate::content::Portfolio;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::theme::{ThemeController, ThemeMode};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use std::time::Instant;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    spinner_index: usize,
    current_section: Section,
    current_focus: Focus,
    portfolio: Portfolio,
    theme_controller: ThemeController,
    theme: Theme,
    contact_form: ContactForm,
    log_buffer: Option<LogBuffer>,
    log_visible: bool,
    scroll_offset: u16,
}

impl State {
    /// Return new state around the given content and theme controller.
    ///
    pub fn new(
        net_sender: Option<NetworkEventSender>,
        portfolio: Portfolio,
        theme_controller: ThemeController,
        log_buffer: Option<LogBuffer>,
    ) -> Self {
        let theme = theme_controller.apply();
        State {
            net_sender,
            spinner_index: 0,
            current_section: Section::Hero,
            current_focus: Focus::Navigation,
            portfolio,
            theme_controller,
            theme,
            contact_form: ContactForm::new(),
            log_buffer,
            log_visible: false,
            scroll_offset: 0,
        }
    }

    pub fn get_portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Get the current palette.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_theme_mode(&self) -> ThemeMode {
        self.theme_controller.mode()
    }

    /// Return the last non-fatal theme storage error, if any.
    ///
    pub fn get_theme_error(&self) -> Option<&str> {
        self.theme_controller.error()
    }

    /// Flip between light and dark at the user's request.
    ///
    pub fn toggle_theme(&mut self) -> &mut Self {
        self.theme_controller.toggle();
        self.theme = self.theme_controller.apply();
        self
    }

    /// Follow a platform preference change unless the user chose a theme.
    ///
    pub fn on_system_theme_change(&mut self, prefers_dark: bool) -> &mut Self {
        if self.theme_controller.on_system_change(prefers_dark) {
            self.theme = self.theme_controller.apply();
        }
        self
    }

    pub fn current_section(&self) -> Section {
        self.current_section
    }

    pub fn current_focus(&self) -> Focus {
        self.current_focus
    }

    pub fn next_section(&mut self) -> &mut Self {
        self.select_section(self.current_section.next())
    }

    pub fn previous_section(&mut self) -> &mut Self {
        self.select_section(self.current_section.previous())
    }

    pub fn select_section(&mut self, section: Section) -> &mut Self {
        if section != self.current_section {
            debug!("Showing section '{}'", section.title());
            self.current_section = section;
            self.scroll_offset = 0;
        }
        self
    }

    pub fn scroll_down(&mut self) -> &mut Self {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self
    }

    pub fn scroll_up(&mut self) -> &mut Self {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self
    }

    pub fn get_scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// Start editing the contact form.
    ///
    pub fn enter_form(&mut self) -> &mut Self {
        self.current_section = Section::Contact;
        self.current_focus = Focus::Form;
        self
    }

    /// Leave the form, validating the field that had focus.
    ///
    pub fn exit_form(&mut self) -> &mut Self {
        let field = self.contact_form.focused();
        self.contact_form.blur(field);
        self.current_focus = Focus::Navigation;
        self
    }

    pub fn is_editing_form(&self) -> bool {
        self.current_focus == Focus::Form
    }

    pub fn get_contact_form(&self) -> &ContactForm {
        &self.contact_form
    }

    pub fn get_contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.contact_form
    }

    /// Validate the form and hand the payload to the network worker.
    /// Returns whether a submission was started.
    ///
    pub fn submit_contact(&mut self) -> Result<bool, StateError> {
        let data = match self.contact_form.begin_submit() {
            Some(data) => data,
            None => return Ok(false),
        };
        let sender = match self.net_sender.as_ref() {
            Some(sender) => sender,
            None => {
                self.contact_form.finish_submit(Err(ContactError::Other(
                    "Network worker is not running".to_string(),
                )));
                return Err(StateError::NetworkUnavailable);
            }
        };
        if sender.send(NetworkEvent::SubmitContact(data)).is_err() {
            error!("Network worker stopped; contact message was not sent.");
            self.contact_form.finish_submit(Err(ContactError::Other(
                "Network worker stopped".to_string(),
            )));
            return Err(StateError::NetworkUnavailable);
        }
        info!("Sending contact message...");
        Ok(true)
    }

    /// Record the outcome of the in-flight submission.
    ///
    pub fn finish_contact_submission(
        &mut self,
        result: Result<SubmissionReceipt, ContactError>,
    ) -> &mut Self {
        self.contact_form.finish_submit(result);
        self
    }

    pub fn dismiss_banner(&mut self) -> &mut Self {
        self.contact_form.dismiss_banner();
        self
    }

    /// Advance timers: spinner frames and banner expiry.
    ///
    pub fn tick(&mut self, now: Instant) -> &mut Self {
        if self.contact_form.is_submitting() {
            self.advance_spinner_index();
        }
        self.contact_form.tick(now);
        self
    }

    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    /// Return a copy of the captured log lines, oldest first.
    ///
    pub fn get_log_entries(&self) -> Vec<String> {
        match &self.log_buffer {
            Some(buffer) => buffer
                .lock()
                .map(|entries| entries.iter().cloned().collect())
                .unwrap_or_default(),
            None => vec![],
        }
    }
}
