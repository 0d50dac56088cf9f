use super::{App, InputMode, Screen};
use crate::action::Action;
use crate::tui_event::BackendCommand;
use ludex_core::SearchDirective;

impl App {
    /// Process a user action and update state. Returns true if the app
    /// should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Quit confirmation modal — q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => {
                    self.confirm_quit = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                Action::Resize(_w, h) => {
                    self.visible_rows = (h as usize).saturating_sub(9);
                }
                _ => {}
            }
            return false;
        }

        // Help overlay
        if self.show_help {
            match action {
                Action::Quit => {
                    self.confirm_quit = true;
                }
                Action::ToggleHelp | Action::NavigateBack => {
                    self.show_help = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                Action::Resize(_w, h) => {
                    self.visible_rows = (h as usize).saturating_sub(9);
                }
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::NavigateBack => match self.screen {
                Screen::Detail(_) => {
                    // Back to the list; every bit of list state survives.
                    self.screen = Screen::List;
                    self.detail = None;
                    self.detail_loading = false;
                    self.detail_scroll = 0;
                }
                Screen::List => {
                    if self.session.search_active() {
                        self.search_input.clear();
                        self.session.submit_search("");
                        self.clamp_cursor();
                    }
                }
            },
            Action::DrillIn => {
                if self.screen == Screen::List
                    && let Some(game) = self.session.visible().get(self.list_cursor).copied()
                {
                    let id = game.id;
                    self.screen = Screen::Detail(id);
                    self.detail = None;
                    self.detail_loading = true;
                    self.detail_scroll = 0;
                    self.send(BackendCommand::LoadDetail { id });
                }
            }
            Action::MoveDown => match self.screen {
                Screen::List => {
                    if self.list_cursor + 1 < self.visible_len() {
                        self.list_cursor += 1;
                    }
                }
                Screen::Detail(_) => {
                    self.detail_scroll = self.detail_scroll.saturating_add(1);
                }
            },
            Action::MoveUp => match self.screen {
                Screen::List => {
                    self.list_cursor = self.list_cursor.saturating_sub(1);
                }
                Screen::Detail(_) => {
                    self.detail_scroll = self.detail_scroll.saturating_sub(1);
                }
            },
            Action::PageDown => {
                let page = self.visible_rows.max(1);
                match self.screen {
                    Screen::List => {
                        self.list_cursor =
                            (self.list_cursor + page).min(self.visible_len().saturating_sub(1));
                    }
                    Screen::Detail(_) => {
                        self.detail_scroll = self.detail_scroll.saturating_add(page as u16);
                    }
                }
            }
            Action::PageUp => {
                let page = self.visible_rows.max(1);
                match self.screen {
                    Screen::List => {
                        self.list_cursor = self.list_cursor.saturating_sub(page);
                    }
                    Screen::Detail(_) => {
                        self.detail_scroll = self.detail_scroll.saturating_sub(page as u16);
                    }
                }
            }
            Action::GoTop => match self.screen {
                Screen::List => self.list_cursor = 0,
                Screen::Detail(_) => self.detail_scroll = 0,
            },
            Action::GoBottom => match self.screen {
                Screen::List => {
                    self.list_cursor = self.visible_len().saturating_sub(1);
                }
                Screen::Detail(_) => {
                    self.detail_scroll = u16::MAX;
                }
            },
            Action::StartSearch => {
                if self.screen == Screen::List {
                    self.input_mode = InputMode::Search;
                    self.search_input = self.session.search_query().to_string();
                }
            }
            Action::SearchInput(c) => {
                if c == '\x08' {
                    self.search_input.pop();
                } else {
                    self.search_input.push(c);
                }
                // Every keystroke re-targets the search; emptying the box
                // falls straight back to the filtered view.
                match self.session.submit_search(&self.search_input) {
                    SearchDirective::Fetch(query) => {
                        self.send(BackendCommand::Search { query });
                    }
                    SearchDirective::Cleared => {}
                }
                self.list_cursor = 0;
            }
            Action::SearchConfirm => {
                self.input_mode = InputMode::Normal;
            }
            Action::SearchCancel => {
                self.input_mode = InputMode::Normal;
                self.search_input.clear();
                self.session.submit_search("");
                self.clamp_cursor();
            }
            Action::CycleFilterDim => {
                self.focused_dim = self.focused_dim.next();
            }
            Action::FilterPrevValue => {
                self.cycle_filter_value(false);
            }
            Action::FilterNextValue => {
                self.cycle_filter_value(true);
            }
            Action::ResetSession => {
                if self.screen == Screen::List {
                    self.session.reset();
                    self.search_input.clear();
                    self.input_mode = InputMode::Normal;
                    self.list_cursor = 0;
                    // A fresh session starts over from page 1.
                    self.request_next_page();
                }
            }
            Action::LoadMore => {
                if self.screen == Screen::List {
                    self.request_next_page();
                }
            }
            Action::ToggleTheme => {
                self.toggle_theme();
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::Resize(_w, h) => {
                self.visible_rows = (h as usize).saturating_sub(9);
            }
            Action::None => {}
        }
        false
    }
}
