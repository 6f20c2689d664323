//! TUI rendering and the terminal event loop.

pub mod book_grid;
pub mod constants;
mod help;
mod layout;
mod search_input;
mod styles;

pub use book_grid::{BookGrid, Placement};
pub use help::render_help_overlay;
pub use layout::{build_header_text, build_status_text, calculate_areas, ScreenAreas};
pub use search_input::SearchInput;
pub use styles::{CardStyles, ColorConfig};

use crate::catalog::{FetchWorker, HttpCatalogClient, PageLoader};
use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction};
use crate::render::DisplayElement;
use crate::state::scroll::WHEEL_STEP;
use crate::state::{
    handle_scroll_action, search_box, AppState, FocusPane, LoadOutcome, SessionSettings,
};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Position, Rect},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Opens a book's info link outside the terminal.
pub type LinkOpener = Box<dyn FnMut(&str) -> io::Result<()>>;

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    loader: Box<dyn PageLoader>,
    key_bindings: KeyBindings,
    styles: CardStyles,
    link_opener: LinkOpener,
    /// Areas from the last draw (for mouse hit testing)
    last_areas: Option<ScreenAreas>,
    /// Layout of the surface from the last draw, in content coordinates
    placements: Vec<Placement>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(
        app_state: AppState,
        loader: Box<dyn PageLoader>,
        styles: CardStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            loader,
            key_bindings: KeyBindings::default(),
            styles,
            link_opener: Box::new(|url: &str| open::that(url)),
            last_areas: None,
            placements: Vec::new(),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Sleeps in `event::poll` until
    /// input arrives, a debounce deadline passes, or the idle interval elapses
    /// (to pick up finished fetches).
    pub fn run(&mut self) -> Result<(), TuiError> {
        const IDLE_POLL: Duration = Duration::from_millis(100);

        self.start();
        self.draw()?;

        loop {
            let timeout = self
                .app_state
                .next_deadline(Instant::now())
                .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));

            let mut dirty = false;
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        dirty = self.handle_mouse(mouse, Instant::now());
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        self.app_state.on_scrolled(Instant::now());
                        dirty = true;
                    }
                    _ => {}
                }
            }

            dirty |= self.step(Instant::now());
            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Request the first page.
    fn start(&mut self) {
        if let Some(request) = self.app_state.request_next_page() {
            self.loader.submit(request);
        }
    }

    /// Deliver finished fetches, run due debounced actions and submit any
    /// fetch they asked for.
    ///
    /// Returns true if anything visible changed.
    fn step(&mut self, now: Instant) -> bool {
        let mut redraw = false;

        while let Some(response) = self.loader.poll() {
            let outcome = self.app_state.apply_page(response, now);
            redraw |= !matches!(outcome, LoadOutcome::Skipped);
        }

        let effects = self.app_state.tick(now);
        if let Some(request) = effects.fetch {
            self.loader.submit(request);
        }

        redraw || effects.redraw
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        self.app_state.status_message = None;

        if self.app_state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.app_state.help_visible = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        if self.app_state.focus == FocusPane::Search {
            self.handle_search_key(key, now);
            return false;
        }

        match self.key_bindings.get(key) {
            Some(action) => self.apply_action(action, now),
            None => {
                debug!(?key, "Unbound key");
                false
            }
        }
    }

    /// Keys while the search box has focus edit the text.
    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        let state = &mut self.app_state;
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => state.focus = FocusPane::Books,
            KeyCode::Backspace => state.search_backspace(now),
            KeyCode::Left => {
                state.search_box = search_box::cursor_left(std::mem::take(&mut state.search_box));
            }
            KeyCode::Right => {
                state.search_box = search_box::cursor_right(std::mem::take(&mut state.search_box));
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                state.type_search_char(ch, now);
            }
            _ => {}
        }
    }

    /// Returns true if the action quits the app.
    fn apply_action(&mut self, action: KeyAction, now: Instant) -> bool {
        if action.is_scroll() {
            self.app_state.scroll = handle_scroll_action(self.app_state.scroll, action);
            self.app_state.on_scrolled(now);
            return false;
        }

        match action {
            KeyAction::StartSearch => self.app_state.focus = FocusPane::Search,
            KeyAction::CycleSort => {
                let next = self.app_state.view().sort_key.cycle();
                self.app_state.on_sort_selected(next);
            }
            KeyAction::SelectSort(sort_key) => self.app_state.on_sort_selected(sort_key),
            KeyAction::ClearFilters => self.app_state.clear_filters(),
            KeyAction::ToggleView => {
                self.app_state.toggle_view();
                // Row heights changed; re-check the distance to the bottom
                self.app_state.on_scrolled(now);
            }
            KeyAction::Help => self.app_state.help_visible = true,
            KeyAction::Quit => return true,
            _ => {}
        }
        false
    }

    /// Handle a single mouse event
    ///
    /// Returns true if anything visible changed
    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.app_state.scroll.scroll_down(WHEEL_STEP);
                self.app_state.on_scrolled(now);
                true
            }
            MouseEventKind::ScrollUp => {
                self.app_state.scroll.scroll_up(WHEEL_STEP);
                self.app_state.on_scrolled(now);
                true
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => false,
        }
    }

    /// Left click: focus the search box, or open the clicked card's link.
    fn handle_click(&mut self, column: u16, row: u16) -> bool {
        let Some(areas) = self.last_areas else {
            return false;
        };
        let position = Position::new(column, row);

        if areas.search.contains(position) {
            self.app_state.focus = FocusPane::Search;
            return true;
        }
        if !areas.content.contains(position) {
            return false;
        }

        let x = column - areas.content.x;
        let y = u32::from(row - areas.content.y).saturating_add(self.app_state.scroll.offset());
        let Some(index) = book_grid::hit_test(&self.placements, x, y) else {
            return false;
        };

        let link = match self.app_state.surface().elements().get(index) {
            Some(DisplayElement::Card(card)) if card.has_link() => card.link.clone(),
            _ => return false,
        };

        self.app_state.focus = FocusPane::Books;
        self.app_state.status_message = Some(match (self.link_opener)(&link) {
            Ok(()) => {
                info!(%link, "Opened book link");
                format!("Opened {link}")
            }
            Err(error) => {
                warn!(%link, %error, "Could not open book link");
                format!("Could not open link: {error}")
            }
        });
        true
    }

    /// Lay out the surface for the content area and size the scroll state.
    fn relayout(&mut self, content: Rect) {
        let surface = self.app_state.surface();
        self.placements =
            book_grid::layout_elements(surface.elements(), surface.view_mode(), content.width);

        let content_height = book_grid::content_height(&self.placements);
        self.app_state
            .scroll
            .set_dimensions(content_height, content.height);
    }

    /// Render the current frame
    ///
    /// Lays out the surface first so the scroll state knows the content
    /// height before the viewport is drawn.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width.max(1), size.height);
        let areas = calculate_areas(frame_area);

        self.relayout(areas.content);
        self.last_areas = Some(areas);

        let state = &self.app_state;
        let placements = &self.placements;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, placements, styles);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        loader: Box<dyn PageLoader>,
        key_bindings: KeyBindings,
        link_opener: LinkOpener,
    ) -> Self {
        Self {
            terminal,
            app_state,
            loader,
            key_bindings,
            styles: CardStyles::with_color_config(ColorConfig::enabled()),
            link_opener,
            last_areas: None,
            placements: Vec::new(),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    pub(crate) fn start_test(&mut self) {
        self.start();
    }

    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        self.handle_mouse(mouse, now)
    }

    pub(crate) fn step_test(&mut self, now: Instant) -> bool {
        self.step(now)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn last_areas(&self) -> Option<ScreenAreas> {
        self.last_areas
    }

    pub(crate) fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

/// Initialize and run the TUI against the configured catalog.
///
/// Handles terminal setup, runs the event loop, and restores the terminal on
/// exit. Logging must be initialized by the caller.
pub fn run_with_config(
    config: &ResolvedConfig,
    initial_search: Option<&str>,
    color: ColorConfig,
) -> Result<(), TuiError> {
    let client = HttpCatalogClient::new(&config.endpoint)?;
    let loader = FetchWorker::spawn(client)?;

    let mut app_state = AppState::new(SessionSettings::from(config));
    if let Some(query) = initial_search {
        app_state = app_state.with_initial_search(query);
    }

    info!(endpoint = %config.endpoint, page_size = config.page_size, "Starting bookscroll");

    let mut app = TuiApp::new(
        app_state,
        Box::new(loader),
        CardStyles::with_color_config(color),
    )?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
