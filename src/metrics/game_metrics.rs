use std::time::Duration;

/// Per-session counters shown in the header
pub struct GameMetrics {
    /// Time spent in the playing phase of the current game
    pub play_time: Duration,
    /// Logic ticks run in the current game
    pub ticks: u64,
    /// Most ticks any single frame had to run
    pub max_ticks_per_frame: u32,
    pub frames: u64,
    pub best_this_session: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            play_time: Duration::ZERO,
            ticks: 0,
            max_ticks_per_frame: 0,
            frames: 0,
            best_this_session: 0,
            games_played: 0,
        }
    }

    /// Record one rendered frame. `delta` only counts toward play time
    /// when the game was running during the frame.
    pub fn on_frame(&mut self, delta: Duration, ticks_run: u32, playing: bool) {
        self.frames += 1;
        if playing {
            self.play_time += delta;
        }
        self.ticks += u64::from(ticks_run);
        self.max_ticks_per_frame = self.max_ticks_per_frame.max(ticks_run);
    }

    pub fn on_game_start(&mut self) {
        self.play_time = Duration::ZERO;
        self.ticks = 0;
        self.max_ticks_per_frame = 0;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.best_this_session {
            self.best_this_session = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.play_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.play_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.play_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.play_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_paused_frames_do_not_count_as_play_time() {
        let mut metrics = GameMetrics::new();
        metrics.on_frame(Duration::from_millis(500), 3, true);
        metrics.on_frame(Duration::from_millis(700), 0, false);

        assert_eq!(metrics.play_time, Duration::from_millis(500));
        assert_eq!(metrics.frames, 2);
        assert_eq!(metrics.ticks, 3);
        assert_eq!(metrics.max_ticks_per_frame, 3);
    }

    #[test]
    fn test_session_best_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.best_this_session, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.best_this_session, 10); // Should not decrease
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.best_this_session, 15); // Should update
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_game_start_resets_counters() {
        let mut metrics = GameMetrics::new();
        metrics.on_frame(Duration::from_secs(2), 4, true);

        metrics.on_game_start();
        assert_eq!(metrics.play_time, Duration::ZERO);
        assert_eq!(metrics.ticks, 0);
        assert_eq!(metrics.max_ticks_per_frame, 0);
        assert_eq!(metrics.frames, 1);
    }
}
