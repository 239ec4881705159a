//! Sound cues raised by gameplay and menus.
//!
//! Gameplay only names the cue; a [`SoundSink`] decides what, if anything,
//! is heard.

use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// A turn was requested
    Move,
    /// Food was eaten
    Eat,
    /// The snake hit a wall or itself
    Crash,
    /// A menu entry was chosen
    MenuSelect,
}

pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);

    /// Flip sound on or off, returning the new state
    fn toggle(&mut self) -> bool;

    fn is_enabled(&self) -> bool;
}

/// Plays nothing
#[derive(Debug, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _cue: SoundCue) {}

    fn toggle(&mut self) -> bool {
        false
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Rings the terminal bell for eating and crashing
pub struct TerminalBell<W: Write> {
    out: W,
    enabled: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out, enabled: true }
    }

    fn rings_for(cue: SoundCue) -> bool {
        matches!(cue, SoundCue::Eat | SoundCue::Crash)
    }
}

impl<W: Write> SoundSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) {
        if !self.enabled || !Self::rings_for(cue) {
            return;
        }
        // A lost bell is not worth interrupting the game for
        if let Err(err) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            tracing::debug!("bell failed: {err}");
        }
    }

    fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        tracing::info!(enabled = self.enabled, "sound toggled");
        self.enabled
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
