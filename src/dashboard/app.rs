//! Dashboard input state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{cli::types::time::Season, report::Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Search,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Re-run the load; `options` also refetches the option list,
    /// `refresh` bypasses cached responses.
    Load { options: bool, refresh: bool },
}

impl Action {
    pub const SECTIONS: Action = Action::Load {
        options: false,
        refresh: false,
    };
    pub const ALL: Action = Action::Load {
        options: true,
        refresh: false,
    };
}

#[derive(Debug, Clone)]
pub struct App {
    pub title: String,
    pub year: Season,
    pub options: Vec<String>,
    pub selected: usize,
    pub sections: Vec<Section>,
    pub tab: usize,
    pub mode: Mode,
    pub search_input: String,
    pub search: Option<String>,
    pub supports_search: bool,
    pub status: String,
}

impl App {
    pub fn new(title: impl Into<String>, year: Season, supports_search: bool) -> Self {
        Self {
            title: title.into(),
            year,
            options: Vec::new(),
            selected: 0,
            sections: Vec::new(),
            tab: 0,
            mode: Mode::Normal,
            search_input: String::new(),
            search: None,
            supports_search,
            status: "Loading...".to_string(),
        }
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    /// Replace the option list, keeping the current selection by name when
    /// it is still present.
    pub fn set_options(&mut self, options: Vec<String>) {
        let current = self.selected_option().map(str::to_string);
        self.selected = current
            .and_then(|c| options.iter().position(|o| *o == c))
            .unwrap_or(0);
        self.options = options;
    }

    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.tab = self.tab.min(sections.len().saturating_sub(1));
        self.status = format!("{} section(s) loaded", sections.len());
        self.sections = sections;
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.sections.get(self.tab)
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        match self.mode {
            Mode::Normal => self.on_normal_key(key.code),
            Mode::Search => self.on_search_key(key.code),
        }
    }

    fn on_normal_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Left => self.shift_year(-1),
            KeyCode::Right => self.shift_year(1),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Tab => {
                if !self.sections.is_empty() {
                    self.tab = (self.tab + 1) % self.sections.len();
                }
                Action::None
            }
            KeyCode::BackTab => {
                if !self.sections.is_empty() {
                    self.tab = (self.tab + self.sections.len() - 1) % self.sections.len();
                }
                Action::None
            }
            KeyCode::Char('/') if self.supports_search => {
                self.mode = Mode::Search;
                self.search_input = self.search.clone().unwrap_or_default();
                Action::None
            }
            KeyCode::Char('r') => {
                self.status = "Refreshing...".to_string();
                Action::Load {
                    options: true,
                    refresh: true,
                }
            }
            _ => Action::None,
        }
    }

    fn on_search_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.search_input.clear();
                Action::None
            }
            KeyCode::Enter => {
                self.mode = Mode::Normal;
                let term = self.search_input.trim().to_string();
                self.search = (!term.is_empty()).then_some(term);
                self.search_input.clear();
                Action::SECTIONS
            }
            KeyCode::Backspace => {
                self.search_input.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn shift_year(&mut self, delta: i32) -> Action {
        let year = self.year.shifted(delta);
        if year == self.year {
            return Action::None;
        }
        self.year = year;
        Action::ALL
    }

    fn move_selection(&mut self, delta: isize) -> Action {
        if self.options.is_empty() {
            return Action::None;
        }
        let len = self.options.len() as isize;
        let next = (self.selected as isize + delta).rem_euclid(len) as usize;
        if next == self.selected {
            return Action::None;
        }
        self.selected = next;
        self.tab = 0;
        Action::SECTIONS
    }
}
