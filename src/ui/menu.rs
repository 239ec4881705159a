//! Keyboard-driven menus shown outside of active play.

use crate::game::GamePhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    HighScores,
    Quit,
    Resume,
    Restart,
    MainMenu,
    Back,
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Start => "Start Game",
            MenuItem::HighScores => "High Scores",
            MenuItem::Quit => "Quit",
            MenuItem::Resume => "Resume",
            MenuItem::Restart => "Restart",
            MenuItem::MainMenu => "Main Menu",
            MenuItem::Back => "Back",
        }
    }
}

/// A vertical list of items with a wrapping cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: &'static str,
    items: Vec<MenuItem>,
    selected: usize,
}

impl Menu {
    pub fn new(title: &'static str, items: Vec<MenuItem>) -> Self {
        Self {
            title,
            items,
            selected: 0,
        }
    }

    /// The menu offered in `phase`; `None` while playing
    pub fn for_phase(phase: GamePhase) -> Option<Self> {
        let menu = match phase {
            GamePhase::Menu => Self::new(
                "SNAKE",
                vec![MenuItem::Start, MenuItem::HighScores, MenuItem::Quit],
            ),
            GamePhase::Paused => Self::new(
                "PAUSED",
                vec![MenuItem::Resume, MenuItem::Restart, MenuItem::MainMenu],
            ),
            GamePhase::GameOver => {
                Self::new("GAME OVER", vec![MenuItem::Restart, MenuItem::MainMenu])
            }
            GamePhase::HighScores => Self::new("HIGH SCORES", vec![MenuItem::Back]),
            GamePhase::Playing => return None,
        };
        Some(menu)
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<MenuItem> {
        self.items.get(self.selected).copied()
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }
}
