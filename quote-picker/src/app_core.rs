use ratatui::layout::Position;
use typeahead::KeyEvent;

use crate::commands::handlers;
use crate::events::{AppCommand, DataEvent};
use crate::state::{reducer, AppState};

/// Where commands go once input has been mapped
///
/// Lets tests run commands synchronously and inject load results as
/// `DataEvent`s instead of spawning loads on tokio.
pub trait DataEventHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Input handling and state, without a terminal attached
pub struct AppCore<H: DataEventHandler> {
    state: AppState,
    handler: H,
}

impl<H: DataEventHandler> AppCore<H> {
    pub fn new(handler: H, state: AppState) -> Self {
        Self { state, handler }
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        match handlers::handle_key_input(event, &self.state) {
            Some(command) => self.handle_command(command),
            None => tracing::trace!("Ignored key {:?}", event.key),
        }
    }

    /// Left-button press at a screen cell
    pub fn handle_pointer_down(&mut self, position: Position) {
        self.handle_command(AppCommand::PointerDown(position));
    }

    pub fn handle_command(&mut self, command: AppCommand) {
        self.handler.execute_with_context(command, &mut self.state);
    }

    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.state, event);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }
}
