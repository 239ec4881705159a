//! Classic Snake for the terminal
//!
//! This library provides:
//! - Core game logic: grid, snake, food, tick engine and the fixed-timestep loop (game module)
//! - Phase state machine and menus (game::phase, ui)
//! - High-score persistence (scores module)
//! - TUI rendering and keyboard input (render, input modules)
//! - The interactive play mode that ties them together (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod scores;
pub mod sound;
pub mod ui;
