//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with a scripted catalog, an inline page loader
//! and a virtual clock, so user stories (typing, scrolling, clicking, waiting
//! out debounces) can be replayed deterministically.

use crate::catalog::{ImmediateLoader, PageRequest, ScriptedCatalog};
use crate::config::keybindings::KeyBindings;
use crate::state::{AppState, SessionSettings};
use crate::view::{LinkOpener, ScreenAreas, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Upper bound on loader/tick rounds per settle, to surface runaway loops.
const MAX_SETTLE_ROUNDS: usize = 64;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    catalog: ScriptedCatalog,
    opened: Rc<RefCell<Vec<String>>>,
    now: Instant,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Launch against `catalog` with default settings on an 80x24 terminal.
    ///
    /// The first page has been requested but not yet delivered: the
    /// skeletons are on screen until [`settle`](Self::settle) runs.
    pub fn launch(catalog: ScriptedCatalog) -> Self {
        Self::launch_with(catalog, SessionSettings::default(), 80, 24)
    }

    /// Launch with custom settings and terminal size.
    pub fn launch_with(
        catalog: ScriptedCatalog,
        settings: SessionSettings,
        width: u16,
        height: u16,
    ) -> Self {
        Self::launch_state(catalog, AppState::new(settings), width, height)
    }

    /// Launch with a prepared state (e.g. an initial search).
    pub fn launch_state(catalog: ScriptedCatalog, app_state: AppState, width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");

        let opened = Rc::new(RefCell::new(Vec::new()));
        let recorder = Rc::clone(&opened);
        let opener: LinkOpener = Box::new(move |url: &str| {
            recorder.borrow_mut().push(url.to_string());
            Ok(())
        });

        let mut app = TuiApp::new_for_test(
            terminal,
            app_state,
            Box::new(ImmediateLoader::new(catalog.clone())),
            KeyBindings::default(),
            opener,
        );
        app.start_test();
        app.render_test().expect("Rendering should succeed in test harness");

        Self {
            app,
            catalog,
            opened,
            now: Instant::now(),
            running: true,
        }
    }

    /// Launch and deliver the first page.
    pub fn loaded(catalog: ScriptedCatalog) -> Self {
        let mut harness = Self::launch(catalog);
        harness.settle();
        harness
    }

    /// Deliver finished fetches and run due debounced actions at the current
    /// virtual time, redrawing after each round, until nothing changes.
    pub fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_ROUNDS {
            let changed = self.app.step_test(self.now);
            self.redraw();
            if !changed {
                return;
            }
        }
        panic!("harness did not settle after {MAX_SETTLE_ROUNDS} rounds");
    }

    /// Move the virtual clock forward and settle.
    pub fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        self.settle();
    }

    /// Let every pending debounce fire.
    pub fn wait_for_debounce(&mut self) {
        let delay = self.state().settings().debounce;
        self.now += delay;
        self.settle();
    }

    /// Send a single key event
    ///
    /// Returns true if app quit as a result of this key
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods), self.now);
        if quit {
            self.running = false;
        } else {
            self.settle();
        }
        quit
    }

    /// Send a sequence of keys, stopping if one quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Send a mouse click event at the specified screen coordinates
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    /// One notch of the mouse wheel, downwards.
    pub fn wheel_down(&mut self) {
        self.mouse(MouseEventKind::ScrollDown, 0, 0);
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return;
        }

        // Render first to ensure layout is calculated
        self.redraw();

        let event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.app.handle_mouse_test(event, self.now);
        self.settle();
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Screen areas from the last draw.
    pub fn areas(&self) -> ScreenAreas {
        self.app.last_areas().expect("harness always draws on launch")
    }

    /// Every request the catalog received, in order.
    pub fn catalog_calls(&self) -> Vec<PageRequest> {
        self.catalog.calls()
    }

    /// Links the app asked to open.
    pub fn opened_links(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    pub fn render_to_string(&mut self) -> String {
        self.redraw();
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    fn redraw(&mut self) {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
    }
}
