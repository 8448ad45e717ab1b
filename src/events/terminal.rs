use crate::contact::Field;
use crate::state::{Section, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
    SystemTheme(bool),
}

pub type TerminalEventSender = mpsc::Sender<Event<KeyEvent>>;

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    tx: TerminalEventSender,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, tx }
    }

    /// Return a sender other producers can use to inject events.
    ///
    pub fn sender(&self) -> TerminalEventSender {
        self.tx.clone()
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        Ok(handle_event(self.rx.recv()?, state))
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a single event to the state. Returns false if exit was requested.
///
pub fn handle_event(event: Event<KeyEvent>, state: &mut State) -> bool {
    match event {
        Event::Tick => {
            state.tick(Instant::now());
            true
        }
        Event::SystemTheme(prefers_dark) => {
            state.on_system_theme_change(prefers_dark);
            true
        }
        Event::Input(key) => {
            if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
                debug!("Processing exit terminal event '{:?}'...", key);
                return false;
            }
            if state.is_editing_form() {
                handle_form_key(key, state);
                true
            } else {
                handle_navigation_key(key, state)
            }
        }
    }
}

/// Keys while reading the portfolio. Returns false on quit.
///
fn handle_navigation_key(key: KeyEvent, state: &mut State) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            state.next_section();
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            state.previous_section();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_down();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_up();
        }
        KeyCode::Char('t') => {
            state.toggle_theme();
        }
        KeyCode::Char('d') => {
            state.toggle_log();
        }
        KeyCode::Char('x') => {
            state.dismiss_banner();
        }
        KeyCode::Char('c') => {
            state.enter_form();
        }
        KeyCode::Enter if state.current_section() == Section::Contact => {
            state.enter_form();
        }
        KeyCode::Char(digit @ '1'..='7') => {
            let index = digit as usize - '1' as usize;
            state.select_section(Section::ALL[index]);
        }
        _ => (),
    }
    true
}

/// Keys while typing into the contact form.
///
fn handle_form_key(key: KeyEvent, state: &mut State) {
    let submitting = state.get_contact_form().is_submitting();
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            state.exit_form();
        }
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            if let Err(e) = state.submit_contact() {
                error!("Failed to start contact submission: {}", e);
            }
        }
        (KeyCode::Tab, _) | (KeyCode::Down, _) => {
            state.get_contact_form_mut().focus_next();
        }
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
            state.get_contact_form_mut().focus_previous();
        }
        // Values are locked while a submission is in flight.
        _ if submitting => (),
        (KeyCode::Enter, _) => {
            let form = state.get_contact_form_mut();
            if form.focused() == Field::Message {
                form.push_char('\n');
            } else {
                form.focus_next();
            }
        }
        (KeyCode::Backspace, _) => {
            state.get_contact_form_mut().pop_char();
        }
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            state.get_contact_form_mut().push_char(c);
        }
        _ => (),
    }
}
