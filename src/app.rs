use crate::config::Config;
use crate::contact::{HttpSubmitter, RetryPolicy};
use crate::content::Portfolio;
use crate::error::{AppError, AppResult};
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::{Event as TerminalEvent, Handler as TerminalEventHandler};
use crate::logger::CustomLogger;
use crate::state::State;
use crate::storage::{record_visit, FileStore, PreferenceStore};
use crate::theme::{PlatformPreference, PreferenceWatcher, ThemeController};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// How often the platform color scheme is re-read.
///
const SYSTEM_THEME_POLL: Duration = Duration::from_secs(2);

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let level = if config.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        let log_buffer = CustomLogger::init(level).map_err(|e| AppError::Logger(e.to_string()))?;

        info!("Starting application...");
        config.validate()?;
        info!(
            "Environment '{}', contact API at {}",
            config.environment, config.api_url
        );
        if config.is_production() && config.debug {
            warn!("Debug logging is enabled in production.");
        }
        if config.enable_analytics {
            info!(
                "Analytics enabled with id {}",
                config.analytics_id.as_deref().unwrap_or("<unset>")
            );
        }

        let dir_path = config.dir_path()?;
        let mut store = FileStore::new(&dir_path);
        if let Err(e) = record_visit(&mut store) {
            warn!("Failed to record visit: {}", e);
        }
        let store: Box<dyn PreferenceStore> = Box::new(store);
        let theme_controller = ThemeController::init(store, &PlatformPreference);
        let portfolio = Portfolio::load_or_default(&dir_path);

        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(
                Some(tx),
                portfolio,
                theme_controller,
                Some(log_buffer),
            ))),
            config,
        };
        app.start_network(rx)?;
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> AppResult<()> {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        let submitter = HttpSubmitter::new(&self.config.api_url)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        std::thread::spawn(move || {
            runtime.block_on(async {
                let mut network_event_handler =
                    NetworkEventHandler::new(&cloned_state, &submitter, RetryPolicy::default());
                while let Ok(network_event) = net_receiver.recv() {
                    match network_event_handler.handle(network_event).await {
                        Ok(_) => (),
                        Err(e) => error!("Failed to handle network event: {}", e),
                    }
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        let theme_sender = terminal_event_handler.sender();
        PreferenceWatcher::spawn(PlatformPreference, SYSTEM_THEME_POLL, move |prefers_dark| {
            theme_sender
                .send(TerminalEvent::SystemTheme(prefers_dark))
                .is_ok()
        });

        let result = self.run_loop(&mut terminal, &terminal_event_handler).await;

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        terminal_event_handler: &TerminalEventHandler,
    ) -> Result<()> {
        loop {
            let mut state = self.state.lock().await;
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
