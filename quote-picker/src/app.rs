use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use typeahead::KeyEvent;

use crate::background::{catalog_loader::CatalogLoader, BackgroundTaskManager};
use crate::commands::{executor, handlers, AppCommand};
use crate::logging::init_logging;
use crate::settings::Settings;
use crate::state::AppState;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        let log_path = init_logging(&self.settings.log_filter)?;

        tracing::info!("quote-picker starting, logging to {}", log_path.display());

        let mut terminal = self.init()?;

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();

        let mut ui_state = AppState::new(
            self.settings.typeahead.clone(),
            self.settings.include_igv,
        );
        let mut task_manager = BackgroundTaskManager::new();

        let catalog_loader = CatalogLoader::new(
            self.settings.catalog_path.clone(),
            self.settings.typeahead.clone(),
            data_tx,
        );

        let mut event_stream = EventStream::new();

        executor::execute_command(
            AppCommand::LoadCatalog,
            &mut ui_state,
            &mut task_manager,
            &catalog_loader,
        );

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            terminal.draw(|f| {
                crate::ui::render_app(f, &ui_state);
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    if let Some(throbber_state) = ui_state.loading_state() {
                        throbber_state.calc_next();
                    }
                }
                Some(Ok(event)) = event_stream.next() => {
                    let command = match event {
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            tracing::debug!("Key press: {:?}", key);
                            handlers::handle_key_input(KeyEvent::from(key), &ui_state)
                        }
                        Event::Mouse(mouse) => {
                            typeahead::input::pointer_down(&mouse).map(AppCommand::PointerDown)
                        }
                        _ => None,
                    };

                    if let Some(command) = command {
                        tracing::debug!("Executing command: {:?}", command);
                        executor::execute_command(
                            command,
                            &mut ui_state,
                            &mut task_manager,
                            &catalog_loader,
                        );
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {:?}", data_event);
                    crate::state::reducer::reduce_data_event(&mut ui_state, data_event);
                }
            }

            if ui_state.should_quit {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");

        task_manager.cancel_all();

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
