use super::{App, Screen};
use crate::tui_event::BackendEvent;

impl App {
    /// Process a backend fetch completion and update session state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::PageLoaded { page, outcome } => {
                self.session.on_page_loaded(page, outcome);
                // An empty filtered view may hint one proactive page fetch.
                if self.session.wants_backfill() {
                    self.request_next_page();
                }
                self.clamp_cursor();
            }
            BackendEvent::SearchLoaded { query, outcome } => {
                self.session.on_search_loaded(&query, outcome);
                self.clamp_cursor();
            }
            BackendEvent::DetailLoaded { id, bundle } => match self.screen {
                // Only the detail screen that asked gets the result; a
                // completion for a game the user has navigated away from is
                // dropped on the floor.
                Screen::Detail(current) if current == id => {
                    self.detail = Some(bundle);
                    self.detail_loading = false;
                }
                _ => {
                    tracing::debug!(id, "discarding stale detail result");
                }
            },
        }
    }
}
