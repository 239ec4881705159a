//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The play mode drives it through [`FixedTimestep`] at a fixed tick rate.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod phase;
pub mod snake;
pub mod state;
pub mod timestep;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use food::Food;
pub use grid::{Cell, CellBounds, Grid};
pub use phase::{GamePhase, PhaseMachine};
pub use snake::{CollisionKind, Snake};
pub use state::GameState;
pub use timestep::{FixedTimestep, FrameClock, LoopState, TickFlow};
