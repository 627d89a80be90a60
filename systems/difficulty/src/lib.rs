#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Time-driven difficulty model.
//!
//! The multiplier starts at the configured minimum and is recomputed once per
//! update interval from the unpaused play time. Overrides take effect
//! immediately and stay in place until the next recomputation.

use std::time::Duration;

use skyward_core::{scaling::inverse_lerp, DIFFICULTY_CEILING, DIFFICULTY_FLOOR};

const SECONDS_PER_MINUTE: f32 = 60.0;

/// Configuration parameters required to construct the difficulty model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    increase_rate: f32,
    update_interval: Duration,
    min_multiplier: f32,
    max_multiplier: f32,
}

impl Config {
    /// Creates a configuration; the bounds are reordered when inverted.
    #[must_use]
    pub fn new(
        increase_rate: f32,
        update_interval: Duration,
        min_multiplier: f32,
        max_multiplier: f32,
    ) -> Self {
        Self {
            increase_rate,
            update_interval,
            min_multiplier: min_multiplier.min(max_multiplier),
            max_multiplier: max_multiplier.max(min_multiplier),
        }
    }

    /// Multiplier gained per minute of unpaused play.
    #[must_use]
    pub const fn increase_rate(&self) -> f32 {
        self.increase_rate
    }

    /// Cadence at which the multiplier is recomputed.
    #[must_use]
    pub const fn update_interval(&self) -> Duration {
        self.update_interval
    }

    /// Lowest multiplier the model reports.
    #[must_use]
    pub const fn min_multiplier(&self) -> f32 {
        self.min_multiplier
    }

    /// Highest multiplier the model reports.
    #[must_use]
    pub const fn max_multiplier(&self) -> f32 {
        self.max_multiplier
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            0.1,
            Duration::from_secs(10),
            DIFFICULTY_FLOOR,
            DIFFICULTY_CEILING,
        )
    }
}

/// Two-state (running / paused) difficulty state machine.
#[derive(Debug)]
pub struct DifficultyModel {
    config: Config,
    multiplier: f32,
    elapsed: Duration,
    interval_timer: Duration,
    paused: bool,
}

impl DifficultyModel {
    /// Creates a running model at the minimum multiplier.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            multiplier: config.min_multiplier,
            config,
            elapsed: Duration::ZERO,
            interval_timer: Duration::ZERO,
            paused: false,
        }
    }

    /// Advances the model by `dt`.
    ///
    /// Returns the multiplier when at least one recomputation happened during
    /// the step. Play time advances one whole interval per unpaused
    /// boundary; the interval clock keeps running while paused, but boundaries
    /// crossed while paused are dropped.
    pub fn tick(&mut self, dt: Duration) -> Option<f32> {
        if self.config.update_interval.is_zero() {
            return None;
        }

        self.interval_timer = self.interval_timer.saturating_add(dt);
        let mut recomputed = false;
        while self.interval_timer >= self.config.update_interval {
            self.interval_timer -= self.config.update_interval;
            if !self.paused {
                self.elapsed = self.elapsed.saturating_add(self.config.update_interval);
                self.recompute();
                recomputed = true;
            }
        }

        recomputed.then_some(self.multiplier)
    }

    /// Overrides the multiplier, clamped to the configured range.
    pub fn set_difficulty(&mut self, value: f32) -> f32 {
        self.multiplier = self.clamp(value);
        tracing::info!(
            requested = value,
            multiplier = self.multiplier,
            "difficulty overridden"
        );
        self.multiplier
    }

    /// Stops play-time accrual.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Restarts play-time accrual.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Clears play time and returns to the minimum multiplier.
    pub fn reset(&mut self) {
        self.multiplier = self.config.min_multiplier;
        self.elapsed = Duration::ZERO;
        self.interval_timer = Duration::ZERO;
        tracing::info!(multiplier = self.multiplier, "difficulty reset");
    }

    /// Multiplier currently in effect.
    #[must_use]
    pub const fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Unpaused play time accrued since the last reset.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Reports whether accrual is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Configuration the model was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Position of the multiplier within the configured range, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        inverse_lerp(
            self.config.min_multiplier,
            self.config.max_multiplier,
            self.multiplier,
        )
    }

    /// Play time formatted as `mm:ss`.
    #[must_use]
    pub fn format_elapsed(&self) -> String {
        let total = self.elapsed.as_secs();
        format!("{:02}:{:02}", total / 60, total % 60)
    }

    fn recompute(&mut self) {
        let minutes = self.elapsed.as_secs_f32() / SECONDS_PER_MINUTE;
        let multiplier = self.clamp(self.config.min_multiplier + minutes * self.config.increase_rate);
        tracing::debug!(
            elapsed = %self.format_elapsed(),
            multiplier,
            "difficulty recomputed"
        );
        self.multiplier = multiplier;
    }

    fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.config.min_multiplier, self.config.max_multiplier)
    }
}

impl Default for DifficultyModel {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(model: &mut DifficultyModel, seconds: u64) -> Vec<f32> {
        (0..seconds)
            .filter_map(|_| model.tick(Duration::from_secs(1)))
            .collect()
    }

    #[test]
    fn ten_minutes_at_default_rate_doubles_multiplier() {
        let mut model = DifficultyModel::default();
        let updates = run(&mut model, 600);
        assert_eq!(updates.len(), 60);
        assert!((model.multiplier() - 2.0).abs() < 1e-4);
        assert_eq!(model.format_elapsed(), "10:00");
        assert!((model.progress() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn multiplier_only_changes_on_interval_boundaries() {
        let mut model = DifficultyModel::default();
        assert_eq!(model.tick(Duration::from_millis(9_900)), None);
        let updated = model.tick(Duration::from_millis(100)).expect("boundary");
        assert!(updated > 1.0);
    }

    #[test]
    fn multiplier_is_monotonic_and_capped() {
        let mut model = DifficultyModel::default();
        let updates = run(&mut model, 3_600);
        assert!(updates.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!((model.multiplier() - DIFFICULTY_CEILING).abs() < f32::EPSILON);
    }

    #[test]
    fn paused_model_keeps_multiplier_and_elapsed() {
        let mut model = DifficultyModel::default();
        let _ = run(&mut model, 120);
        let before = model.multiplier();
        let elapsed = model.elapsed();

        model.pause();
        assert!(run(&mut model, 300).is_empty());
        assert_eq!(model.multiplier(), before);
        assert_eq!(model.elapsed(), elapsed);

        model.resume();
        let _ = run(&mut model, 10);
        assert!(model.multiplier() > before);
    }

    #[test]
    fn pause_across_a_boundary_drops_that_interval() {
        let mut model = DifficultyModel::default();
        let _ = run(&mut model, 9);
        assert_eq!(model.elapsed(), Duration::ZERO);

        model.pause();
        assert!(run(&mut model, 2).is_empty());
        model.resume();
        let updates = run(&mut model, 9);

        assert_eq!(updates.len(), 1);
        assert_eq!(model.elapsed(), Duration::from_secs(10));
        assert!((model.multiplier() - (1.0 + 0.1 / 6.0)).abs() < 1e-5);
    }

    #[test]
    fn overrides_are_clamped() {
        let mut model = DifficultyModel::default();
        assert_eq!(model.set_difficulty(7.0), DIFFICULTY_CEILING);
        assert_eq!(model.set_difficulty(0.2), DIFFICULTY_FLOOR);
    }

    #[test]
    fn reset_returns_to_minimum() {
        let mut model = DifficultyModel::default();
        let _ = run(&mut model, 300);
        model.reset();
        assert_eq!(model.multiplier(), DIFFICULTY_FLOOR);
        assert_eq!(model.elapsed(), Duration::ZERO);
        assert_eq!(model.format_elapsed(), "00:00");
    }
}
