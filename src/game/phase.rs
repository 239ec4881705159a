//! Which screen the game is on and how it may move between them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
    HighScores,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game over",
            GamePhase::HighScores => "high scores",
        };
        f.write_str(name)
    }
}

/// Phase state machine. Each request returns whether it changed the phase;
/// requests that are not valid from the current phase are ignored.
#[derive(Debug, Clone, Default)]
pub struct PhaseMachine {
    phase: GamePhase,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Begin a new game from any phase
    pub fn start(&mut self) -> bool {
        self.transition(GamePhase::Playing)
    }

    pub fn pause(&mut self) -> bool {
        self.phase == GamePhase::Playing && self.transition(GamePhase::Paused)
    }

    pub fn resume(&mut self) -> bool {
        self.phase == GamePhase::Paused && self.transition(GamePhase::Playing)
    }

    /// Pause while playing, resume while paused
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => false,
        }
    }

    pub fn game_over(&mut self) -> bool {
        self.phase == GamePhase::Playing && self.transition(GamePhase::GameOver)
    }

    pub fn show_menu(&mut self) -> bool {
        matches!(
            self.phase,
            GamePhase::Paused | GamePhase::GameOver | GamePhase::HighScores
        ) && self.transition(GamePhase::Menu)
    }

    pub fn show_high_scores(&mut self) -> bool {
        self.phase == GamePhase::Menu && self.transition(GamePhase::HighScores)
    }

    fn transition(&mut self, next: GamePhase) -> bool {
        let previous = self.phase;
        self.phase = next;
        tracing::info!(from = %previous, to = %next, "phase changed");
        true
    }
}
