//! Card and chrome styling.
//!
//! Provides the colors for cards, skeletons, messages and the header and
//! status bars, collapsing to plain styles when color output is disabled.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CardStyles =====

/// Styles used by the book list and the surrounding bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyles {
    /// Card borders.
    pub border: Style,
    /// Book titles.
    pub title: Style,
    /// Author, publisher and date lines.
    pub detail: Style,
    /// Cover label.
    pub cover: Style,
    /// Skeleton placeholders.
    pub skeleton: Style,
    /// "No books found." text.
    pub message: Style,
    /// Fetch error message.
    pub error: Style,
    /// Next-page spinner.
    pub loader: Style,
    /// Header bar.
    pub header: Style,
    /// Status bar.
    pub status: Style,
    /// Border of the focused search box.
    pub focused_border: Style,
}

impl CardStyles {
    /// Create styles for the given color configuration.
    ///
    /// If colors are disabled, only modifiers (bold, dim) remain.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                border: Style::default().fg(Color::Gray),
                title: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                detail: Style::default().fg(Color::White),
                cover: Style::default().fg(Color::Cyan),
                skeleton: Style::default().fg(Color::DarkGray),
                message: Style::default().fg(Color::Gray),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                loader: Style::default().fg(Color::Cyan),
                header: Style::default().fg(Color::Cyan),
                status: Style::default().fg(Color::Gray),
                focused_border: Style::default().fg(Color::Yellow),
            }
        } else {
            Self {
                border: Style::default(),
                title: Style::default().add_modifier(Modifier::BOLD),
                detail: Style::default(),
                cover: Style::default(),
                skeleton: Style::default().add_modifier(Modifier::DIM),
                message: Style::default(),
                error: Style::default().add_modifier(Modifier::BOLD),
                loader: Style::default(),
                header: Style::default(),
                status: Style::default(),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for CardStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
