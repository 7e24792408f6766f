use ratatui::{backend::TestBackend, buffer::Buffer, layout::Position, Terminal};
use typeahead::{Key, KeyEvent, Record, TypeaheadConfig};

use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::state::AppState;

/// Runs every command in place; `LoadCatalog` only flips the loading state
#[derive(Debug, Default)]
pub struct MockDataHandler;

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command_sync(command, state);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Terminal size used by `render`
    pub const WIDTH: u16 = 100;
    pub const HEIGHT: u16 = 30;

    /// Create a new test app with mock handler and default typeahead settings
    pub fn new() -> Self {
        Self::with_config(TypeaheadConfig::default())
    }

    pub fn with_config(config: TypeaheadConfig) -> Self {
        Self {
            core: AppCore::new(MockDataHandler, AppState::new(config, true)),
        }
    }

    /// Create a test app whose catalog finished loading with `records`
    pub fn with_catalog(records: Vec<Record>) -> Self {
        let mut app = Self::new();
        app.send_data_event(DataEvent::CatalogLoaded { records });
        app
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text into the search field one char at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Left-click at a screen cell. Call `render` first so hit-testing sees the screen.
    pub fn click(&mut self, x: u16, y: u16) {
        self.core.handle_pointer_down(Position::new(x, y));
    }

    /// Inject a data event (simulate a finished background load)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Draw the app into an in-memory terminal and return the buffer
    pub fn render(&self) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(Self::WIDTH, Self::HEIGHT))
            .expect("test backend never fails");
        terminal
            .draw(|f| crate::ui::render_app(f, self.core.state()))
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Rendered screen as one string per row
    pub fn screen_lines(&self) -> Vec<String> {
        let buffer = self.render();
        (0..Self::HEIGHT)
            .map(|y| {
                (0..Self::WIDTH)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn assert_should_quit(&self) {
        assert!(self.core.should_quit(), "expected a quit request");
    }

    pub fn assert_not_quit(&self) {
        assert!(!self.core.should_quit(), "unexpected quit request");
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
