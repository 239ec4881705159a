//! Interactive play in the terminal.
//!
//! Each frame runs the same fixed sequence: measure the time since the last
//! frame, dispatch the key presses queued since then, run the logic ticks
//! the elapsed time pays for, and draw once. The frame interval only caps
//! how often this happens; snake speed comes from the tick rate alone.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{
    Direction, FixedTimestep, FrameClock, GameConfig, GameEngine, GamePhase, GameState,
    PhaseMachine, TickFlow, TickOutcome,
};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, View};
use crate::scores::HighScores;
use crate::sound::{SoundCue, SoundSink};
use crate::ui::{Menu, MenuItem};

pub struct PlayMode<S: SoundSink> {
    config: GameConfig,
    engine: GameEngine,
    state: GameState,
    timestep: FixedTimestep,
    phases: PhaseMachine,
    menu: Option<Menu>,
    high_scores: HighScores,
    metrics: GameMetrics,
    sound: S,
    renderer: Renderer,
    input_handler: InputHandler,
    queued: Vec<KeyAction>,
    should_quit: bool,
}

impl<S: SoundSink> PlayMode<S> {
    pub fn new(config: GameConfig, high_scores: HighScores, sound: S) -> Self {
        let mut engine = GameEngine::new(config.clone());
        let state = engine.reset();
        let timestep = FixedTimestep::from_config(&config);
        let phases = PhaseMachine::new();
        let menu = Menu::for_phase(phases.phase());

        Self {
            config,
            engine,
            state,
            timestep,
            phases,
            menu,
            high_scores,
            metrics: GameMetrics::new(),
            sound,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            queued: Vec::new(),
            should_quit: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phases.phase()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Frame slots cap the redraw rate; a late frame simply waits for the next slot
        let mut frame_timer = interval(self.config.frame_interval());
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut clock = FrameClock::new();

        loop {
            tokio::select! {
                // Queue terminal events until the next frame
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.queue_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // One frame: input, logic ticks, render
                _ = frame_timer.tick() => {
                    let delta = clock.lap();
                    self.frame(delta);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.view());
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        tracing::info!(games = self.metrics.games_played, "leaving play mode");
        Ok(())
    }

    fn view(&self) -> View<'_> {
        View {
            phase: self.phases.phase(),
            state: &self.state,
            menu: self.menu.as_ref(),
            high_scores: &self.high_scores,
            metrics: &self.metrics,
            grid: self.config.grid(),
            cell_inset: self.config.cell_inset,
            sound_enabled: self.sound.is_enabled(),
        }
    }

    /// Buffer a terminal event for the next frame
    pub fn queue_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            if action != KeyAction::None {
                self.queued.push(action);
            }
        }
    }

    /// Run one frame's worth of game logic. Returns the ticks run.
    pub fn frame(&mut self, delta: Duration) -> u32 {
        for action in std::mem::take(&mut self.queued) {
            self.dispatch(action);
            if self.should_quit {
                return 0;
            }
        }

        let playing = self.phases.phase() == GamePhase::Playing;
        let mut ran = 0;

        if playing {
            let Self {
                engine,
                state,
                timestep,
                sound,
                ..
            } = self;
            let mut last = TickOutcome::default();

            ran = timestep.advance(delta, || {
                last = engine.tick(state);
                if last.ate_food {
                    sound.play(SoundCue::Eat);
                }
                if last.is_terminal() {
                    TickFlow::Halt
                } else {
                    TickFlow::Continue
                }
            });

            // Count this frame before a game over reports the totals
            self.metrics.on_frame(delta, ran, playing);
            if self.timestep.is_over() {
                self.finish_game(last);
            }
        } else {
            self.metrics.on_frame(delta, ran, playing);
        }

        ran
    }

    /// Apply one key action in the current phase
    pub fn dispatch(&mut self, action: KeyAction) {
        let phase = self.phases.phase();

        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ToggleSound => {
                self.sound.toggle();
            }
            KeyAction::Steer(direction) if phase == GamePhase::Playing => {
                self.state.snake.change_direction(direction);
                self.sound.play(SoundCue::Move);
            }
            KeyAction::Steer(direction) => {
                if let Some(menu) = self.menu.as_mut() {
                    match direction {
                        Direction::Up | Direction::Left => menu.previous(),
                        Direction::Down | Direction::Right => menu.next(),
                    }
                }
            }
            KeyAction::Confirm => {
                if let Some(item) = self.menu.as_ref().and_then(Menu::selected) {
                    self.sound.play(SoundCue::MenuSelect);
                    self.activate(item);
                }
            }
            KeyAction::TogglePause => {
                if self.phases.toggle_pause() {
                    self.sound.play(SoundCue::MenuSelect);
                    self.sync_menu();
                }
            }
            KeyAction::Restart => {
                // Only a finished game can be restarted from the keyboard shortcut
                if phase == GamePhase::GameOver {
                    self.sound.play(SoundCue::MenuSelect);
                    self.start_new_game();
                }
            }
            KeyAction::HighScores => {
                if self.phases.show_high_scores() {
                    self.sync_menu();
                }
            }
            KeyAction::Back => {
                let changed = match phase {
                    GamePhase::Paused => self.phases.resume(),
                    _ => self.phases.show_menu(),
                };
                if changed {
                    self.sync_menu();
                }
            }
            KeyAction::None => {}
        }
    }

    fn activate(&mut self, item: MenuItem) {
        match item {
            MenuItem::Start | MenuItem::Restart => self.start_new_game(),
            MenuItem::HighScores => {
                self.phases.show_high_scores();
                self.sync_menu();
            }
            MenuItem::Resume => {
                self.phases.resume();
                self.sync_menu();
            }
            MenuItem::MainMenu | MenuItem::Back => {
                self.phases.show_menu();
                self.sync_menu();
            }
            MenuItem::Quit => self.should_quit = true,
        }
    }

    fn start_new_game(&mut self) {
        self.state = self.engine.reset();
        self.timestep = FixedTimestep::from_config(&self.config);
        self.phases.start();
        self.metrics.on_game_start();
        self.sync_menu();
        tracing::info!("new game started");
    }

    fn finish_game(&mut self, last: TickOutcome) {
        if let Some(kind) = last.collision {
            self.sound.play(SoundCue::Crash);
            tracing::info!(score = self.state.score, ?kind, "game over");
        } else {
            tracing::info!(score = self.state.score, "board filled");
        }

        self.phases.game_over();
        self.high_scores.record_and_save(self.state.score);
        self.metrics.on_game_over(self.state.score);
        tracing::info!(
            ticks = self.metrics.ticks,
            max_ticks_per_frame = self.metrics.max_ticks_per_frame,
            frames = self.metrics.frames,
            best = self.metrics.best_this_session,
            games = self.metrics.games_played,
            "session stats"
        );
        self.sync_menu();
    }

    fn sync_menu(&mut self) {
        self.menu = Menu::for_phase(self.phases.phase());
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
