mod backend;
mod update;

use std::path::PathBuf;

use tokio::sync::mpsc;

use ludex_core::config_file::{self, ConfigFile};
use ludex_core::{CatalogSession, DetailBundle, FilterDim};

use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    /// Detail view for one game id.
    Detail(u64),
}

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Main application state.
///
/// Owns the [`CatalogSession`] and is its only mutator: user actions come in
/// through [`App::update`], fetch completions through
/// [`App::handle_backend_event`], both on the main loop.
pub struct App {
    pub screen: Screen,
    pub session: CatalogSession,
    pub theme: Theme,
    pub theme_name: String,
    pub input_mode: InputMode,
    /// Live search text; every edit is submitted to the session.
    pub search_input: String,
    /// Cursor position within the visible set.
    pub list_cursor: usize,
    /// Height of the visible table area (set on resize, used for page up/down).
    pub visible_rows: usize,
    /// Filter dimension the ←/→ keys currently operate on.
    pub focused_dim: FilterDim,
    pub detail: Option<DetailBundle>,
    pub detail_loading: bool,
    pub detail_scroll: u16,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    pub tick: usize,
    /// Channel to the backend fetch task.
    pub cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
    /// Where the theme preference is persisted; `None` disables persistence
    /// (tests).
    pub config_path: Option<PathBuf>,
    config: ConfigFile,
}

impl App {
    pub fn new(session: CatalogSession, theme_name: &str, config: ConfigFile) -> Self {
        Self {
            screen: Screen::List,
            session,
            theme: Theme::by_name(theme_name),
            theme_name: theme_name.to_string(),
            input_mode: InputMode::Normal,
            search_input: String::new(),
            list_cursor: 0,
            visible_rows: 20,
            focused_dim: FilterDim::Year,
            detail: None,
            detail_loading: false,
            detail_scroll: 0,
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            tick: 0,
            cmd_tx: None,
            config_path: None,
            config,
        }
    }

    pub(crate) fn send(&self, cmd: BackendCommand) {
        if let Some(tx) = &self.cmd_tx {
            let _ = tx.send(cmd);
        }
    }

    /// Ask the session for the next page and dispatch the fetch. The session
    /// says no while a fetch is in flight or the stream is exhausted.
    pub fn request_next_page(&mut self) {
        if let Some(page) = self.session.begin_page_fetch() {
            self.send(BackendCommand::LoadPage { page });
        }
    }

    pub fn visible_len(&self) -> usize {
        self.session.visible().len()
    }

    pub(crate) fn clamp_cursor(&mut self) {
        self.list_cursor = self
            .list_cursor
            .min(self.visible_len().saturating_sub(1));
    }

    /// Whether the filter panel accepts input. Mirrors the list behavior:
    /// filters are inert while a search is active or nothing is loaded.
    pub fn filters_enabled(&self) -> bool {
        !self.session.search_active() && !self.session.catalog().is_empty()
    }

    /// Step the focused dimension through [All, v1, v2, ...], wrapping.
    fn cycle_filter_value(&mut self, forward: bool) {
        if !self.filters_enabled() {
            return;
        }

        match self.focused_dim {
            FilterDim::Year => {
                let years = self.session.year_domain().years();
                let next = cycle(&years, self.session.filters().year, forward);
                self.session.set_year(next);
            }
            FilterDim::Genre => {
                let values = self.session.available(FilterDim::Genre);
                let next = cycle(&values, self.session.filters().genre.clone(), forward);
                self.session.set_genre(next);
            }
            FilterDim::Platform => {
                let values = self.session.available(FilterDim::Platform);
                let next = cycle(&values, self.session.filters().platform.clone(), forward);
                self.session.set_platform(next);
            }
            FilterDim::Tag => {
                let values = self.session.available(FilterDim::Tag);
                let next = cycle(&values, self.session.filters().tag.clone(), forward);
                self.session.set_tag(next);
            }
        }

        self.list_cursor = 0;
        // An empty filtered view may hint one proactive page fetch.
        if self.session.wants_backfill() {
            self.request_next_page();
        }
    }

    /// Flip dark/light and persist the choice immediately.
    fn toggle_theme(&mut self) {
        self.theme_name = if self.theme_name == "dark" {
            "light".to_string()
        } else {
            "dark".to_string()
        };
        self.theme = Theme::by_name(&self.theme_name);
        self.config.set_theme(&self.theme_name);
        if let Some(path) = &self.config_path
            && let Err(err) = config_file::save_to_path(&self.config, path)
        {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
    }

    // update() is in update.rs; handle_backend_event() is in backend.rs.

    /// Render the current screen.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();

        match self.screen {
            Screen::List => crate::view::list::render_in(f, self, area),
            Screen::Detail(id) => crate::view::detail::render_in(f, self, id, area),
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme);
        }
    }
}

/// Step `current` through `[None, Some(v0), Some(v1), ...]` in either
/// direction, wrapping at the ends. A current value that is no longer
/// offered is treated as the `None` ("All") slot.
fn cycle<T: Clone + PartialEq>(values: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let count = values.len() + 1; // plus the "All" slot
    let pos = match &current {
        None => 0,
        Some(v) => values.iter().position(|x| x == v).map_or(0, |i| i + 1),
    };
    let next = if forward {
        (pos + 1) % count
    } else {
        (pos + count - 1) % count
    };
    if next == 0 {
        None
    } else {
        Some(values[next - 1].clone())
    }
}
