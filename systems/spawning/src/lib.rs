#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawn scheduler for hazards and legacy attack patterns.
//!
//! Each family runs as a repeating task holding a countdown to its next
//! wake. Waits shrink with the difficulty multiplier and never drop below
//! the configured minimum spawn interval.

use std::{fmt, time::Duration};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use skyward_core::{
    seed::{derive_labeled_seed, RNG_STREAM_ATTACK_PATTERNS, RNG_STREAM_HAZARDS},
    AttackPatternId, Command, Event, HazardCatalog, HazardConfig, HazardConfigId, HazardKind,
    ScreenBounds, SpawnOrigin, SpawnSide, Vec2,
};
use thiserror::Error;

/// Configuration parameters required to construct the scheduler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    rng_seed: u64,
    min_spawn_interval: f32,
    min_time_between_patterns: f32,
    max_time_between_patterns: f32,
    spawn_hazards: bool,
    use_attack_patterns: bool,
    edge_margin: f32,
    lateral_fraction: f32,
}

impl Config {
    /// Creates a configuration with the default cadence and both families
    /// enabled.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self {
            rng_seed,
            min_spawn_interval: 1.0,
            min_time_between_patterns: 3.0,
            max_time_between_patterns: 6.0,
            spawn_hazards: true,
            use_attack_patterns: true,
            edge_margin: 1.0,
            lateral_fraction: 0.8,
        }
    }

    /// Enables or disables the hazard family.
    #[must_use]
    pub const fn with_hazards(mut self, enabled: bool) -> Self {
        self.spawn_hazards = enabled;
        self
    }

    /// Enables or disables the legacy attack-pattern family.
    #[must_use]
    pub const fn with_attack_patterns(mut self, enabled: bool) -> Self {
        self.use_attack_patterns = enabled;
        self
    }

    /// Overrides the floor applied to every wait.
    #[must_use]
    pub const fn with_min_spawn_interval(mut self, seconds: f32) -> Self {
        self.min_spawn_interval = seconds;
        self
    }

    /// Overrides the attack-pattern wait window (before difficulty scaling).
    #[must_use]
    pub const fn with_pattern_window(mut self, min: f32, max: f32) -> Self {
        self.min_time_between_patterns = min;
        self.max_time_between_patterns = max;
        self
    }

    /// Seed the random streams are derived from.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

/// Spawn family managed by the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Hazards from the catalog.
    Hazards,
    /// Legacy bullet-hell attack patterns.
    AttackPatterns,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hazards => f.write_str("hazards"),
            Self::AttackPatterns => f.write_str("attack patterns"),
        }
    }
}

/// Errors raised while constructing the scheduler.
#[derive(Debug, Error, PartialEq)]
pub enum SpawningError {
    /// An enabled family has nothing registered in the catalog.
    #[error("{family} are enabled but the catalog registers none")]
    EmptyFamily {
        /// Family without entries.
        family: Family,
    },
    /// The minimum spawn interval must be positive.
    #[error("minimum spawn interval must be positive, got {0}")]
    NonPositiveInterval(f32),
    /// The attack-pattern wait window is negative or inverted.
    #[error("invalid attack pattern window [{min}, {max}]")]
    InvalidPatternWindow {
        /// Configured minimum.
        min: f32,
        /// Configured maximum.
        max: f32,
    },
}

#[derive(Clone, Copy, Debug)]
struct RepeatingTask {
    countdown: f32,
}

impl RepeatingTask {
    const fn immediate() -> Self {
        Self { countdown: 0.0 }
    }

    const fn after(seconds: f32) -> Self {
        Self { countdown: seconds }
    }
}

/// Read-only inputs the scheduler needs on every step.
#[derive(Clone, Copy, Debug)]
pub struct SpawnView<'a> {
    /// Catalog to draw configurations from.
    pub catalog: &'a HazardCatalog,
    /// Difficulty multiplier in effect.
    pub multiplier: f32,
    /// Current screen rectangle.
    pub bounds: ScreenBounds,
    /// Lead player position, when a player is alive.
    pub player: Option<Vec2>,
}

/// Pure system that emits hazard and attack-pattern spawn commands.
#[derive(Debug)]
pub struct Spawning {
    config: Config,
    hazard_rng: ChaCha8Rng,
    pattern_rng: ChaCha8Rng,
    hazard_task: Option<RepeatingTask>,
    pattern_task: Option<RepeatingTask>,
}

impl Spawning {
    /// Creates a running scheduler.
    pub fn new(config: Config, catalog: &HazardCatalog) -> Result<Self, SpawningError> {
        if config.min_spawn_interval <= 0.0 {
            return Err(SpawningError::NonPositiveInterval(
                config.min_spawn_interval,
            ));
        }
        if config.min_time_between_patterns < 0.0
            || config.max_time_between_patterns < config.min_time_between_patterns
        {
            return Err(SpawningError::InvalidPatternWindow {
                min: config.min_time_between_patterns,
                max: config.max_time_between_patterns,
            });
        }
        if config.spawn_hazards && catalog.hazards().is_empty() {
            return Err(SpawningError::EmptyFamily {
                family: Family::Hazards,
            });
        }
        if config.use_attack_patterns && catalog.attack_patterns().is_empty() {
            return Err(SpawningError::EmptyFamily {
                family: Family::AttackPatterns,
            });
        }

        let mut spawning = Self {
            config,
            hazard_rng: ChaCha8Rng::seed_from_u64(derive_labeled_seed(
                config.rng_seed,
                RNG_STREAM_HAZARDS,
            )),
            pattern_rng: ChaCha8Rng::seed_from_u64(derive_labeled_seed(
                config.rng_seed,
                RNG_STREAM_ATTACK_PATTERNS,
            )),
            hazard_task: None,
            pattern_task: None,
        };
        spawning.start_tasks(1.0);
        Ok(spawning)
    }

    /// Consumes events and the current view to emit spawn commands.
    pub fn handle(&mut self, events: &[Event], view: SpawnView<'_>, out: &mut Vec<Command>) {
        let mut accumulated = Duration::ZERO;
        for event in events {
            match event {
                Event::TimeAdvanced { dt } => accumulated = accumulated.saturating_add(*dt),
                Event::RunReset if !self.is_paused() => {
                    accumulated = Duration::ZERO;
                    self.stop_tasks();
                    self.start_tasks(view.multiplier);
                }
                _ => {}
            }
        }

        let dt = accumulated.as_secs_f32();
        self.run_hazard_task(dt, view, out);
        self.run_pattern_task(dt, view, out);
    }

    /// Tears down both repeating tasks. Calling it again has no effect.
    pub fn pause(&mut self) {
        if self.is_paused() {
            return;
        }
        self.stop_tasks();
        tracing::info!("spawning paused");
    }

    /// Restarts one fresh task per enabled family; a no-op while running.
    ///
    /// The hazard task fires on the next step, the pattern task waits first.
    pub fn resume(&mut self, multiplier: f32) {
        if !self.is_paused() {
            return;
        }
        self.start_tasks(multiplier);
        tracing::info!(tasks = self.active_tasks(), "spawning resumed");
    }

    /// Reports whether no repeating task is running.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.active_tasks() == 0
    }

    /// Number of repeating tasks currently running.
    #[must_use]
    pub fn active_tasks(&self) -> usize {
        usize::from(self.hazard_task.is_some()) + usize::from(self.pattern_task.is_some())
    }

    /// Forwards a difficulty override to the world's difficulty model.
    pub fn set_difficulty(&self, value: f32, out: &mut Vec<Command>) {
        out.push(Command::SetDifficulty { value });
    }

    /// Configuration the scheduler was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    fn start_tasks(&mut self, multiplier: f32) {
        if self.config.spawn_hazards {
            self.hazard_task = Some(RepeatingTask::immediate());
        }
        if self.config.use_attack_patterns {
            let wait = self.pattern_wait(multiplier);
            self.pattern_task = Some(RepeatingTask::after(wait));
        }
    }

    fn stop_tasks(&mut self) {
        self.hazard_task = None;
        self.pattern_task = None;
    }

    fn run_hazard_task(&mut self, dt: f32, view: SpawnView<'_>, out: &mut Vec<Command>) {
        let Some(mut task) = self.hazard_task.take() else {
            return;
        };
        task.countdown -= dt;
        while task.countdown <= 0.0 {
            let Some(index) = select_hazard(view.catalog.hazards(), &mut self.hazard_rng) else {
                break;
            };
            let config = &view.catalog.hazards()[index];
            let (side, position) = self.hazard_spawn_point(config, view.bounds);
            tracing::debug!(
                config = %config.name,
                ?side,
                x = position.x,
                y = position.y,
                "hazard scheduled"
            );
            out.push(Command::SpawnHazard {
                config: HazardConfigId::new(index as u32),
                side,
                position,
            });
            task.countdown += self.hazard_wait(config, view.multiplier);
        }
        self.hazard_task = Some(task);
    }

    fn run_pattern_task(&mut self, dt: f32, view: SpawnView<'_>, out: &mut Vec<Command>) {
        let Some(mut task) = self.pattern_task.take() else {
            return;
        };
        let patterns = view.catalog.attack_patterns();
        task.countdown -= dt;
        while task.countdown <= 0.0 && !patterns.is_empty() {
            let index = self.pattern_rng.gen_range(0..patterns.len());
            let origin = self.pattern_origin(patterns[index].spawn_origin, view);
            tracing::debug!(pattern = %patterns[index].name, "attack pattern scheduled");
            out.push(Command::StartAttackPattern {
                pattern: AttackPatternId::new(index as u32),
                origin,
            });
            task.countdown += self.pattern_wait(view.multiplier);
        }
        self.pattern_task = Some(task);
    }

    fn hazard_wait(&mut self, config: &HazardConfig, multiplier: f32) -> f32 {
        let multiplier = positive(multiplier);
        let wait = self.hazard_rng.gen_range(
            config.min_time_between_spawns / multiplier..=config.max_time_between_spawns / multiplier,
        );
        wait.max(self.config.min_spawn_interval)
    }

    fn pattern_wait(&mut self, multiplier: f32) -> f32 {
        let wait = self.pattern_rng.gen_range(
            self.config.min_time_between_patterns..=self.config.max_time_between_patterns,
        );
        (wait / positive(multiplier)).max(self.config.min_spawn_interval)
    }

    fn hazard_spawn_point(&mut self, config: &HazardConfig, bounds: ScreenBounds) -> (SpawnSide, Vec2) {
        let sides = &config.allowed_sides;
        let mut side = sides[self.hazard_rng.gen_range(0..sides.len())];
        // Clouds always hang from the top edge.
        if config.kind() == HazardKind::AcidRain {
            side = SpawnSide::Top;
        }

        let half = bounds.half_extents() * self.config.lateral_fraction;
        let center = bounds.center();
        let margin = self.config.edge_margin;
        let position = match side {
            SpawnSide::Top | SpawnSide::Bottom => {
                let x = center.x + self.hazard_rng.gen_range(-half.x..=half.x);
                let y = if side == SpawnSide::Top {
                    bounds.max().y + margin
                } else {
                    bounds.min().y - margin
                };
                Vec2::new(x, y)
            }
            SpawnSide::Left | SpawnSide::Right => {
                let y = center.y + self.hazard_rng.gen_range(-half.y..=half.y);
                let x = if side == SpawnSide::Left {
                    bounds.min().x - margin
                } else {
                    bounds.max().x + margin
                };
                Vec2::new(x, y)
            }
        };
        (side, position)
    }

    fn pattern_origin(&mut self, origin: SpawnOrigin, view: SpawnView<'_>) -> Vec2 {
        let bounds = view.bounds;
        let margin = self.config.edge_margin;
        let (min, max) = (bounds.min(), bounds.max());
        match origin {
            SpawnOrigin::Top => Vec2::new(self.pattern_rng.gen_range(min.x..=max.x), max.y + margin),
            SpawnOrigin::Bottom => {
                Vec2::new(self.pattern_rng.gen_range(min.x..=max.x), min.y - margin)
            }
            SpawnOrigin::Left => Vec2::new(min.x - margin, self.pattern_rng.gen_range(min.y..=max.y)),
            SpawnOrigin::Right => {
                Vec2::new(max.x + margin, self.pattern_rng.gen_range(min.y..=max.y))
            }
            SpawnOrigin::Center => bounds.center(),
            SpawnOrigin::AtPlayerLocation => view.player.unwrap_or_else(|| bounds.center()),
        }
    }
}

/// Picks a hazard configuration.
///
/// Every configuration passes independently when a uniform roll does not
/// exceed its spawn chance. When nothing passes, the whole list is eligible.
fn select_hazard(configs: &[HazardConfig], rng: &mut ChaCha8Rng) -> Option<usize> {
    if configs.is_empty() {
        return None;
    }
    let survivors: Vec<usize> = configs
        .iter()
        .enumerate()
        .filter(|(_, config)| rng.gen::<f32>() <= config.spawn_chance)
        .map(|(index, _)| index)
        .collect();
    if survivors.is_empty() {
        return Some(rng.gen_range(0..configs.len()));
    }
    Some(survivors[rng.gen_range(0..survivors.len())])
}

fn positive(multiplier: f32) -> f32 {
    if multiplier > f32::EPSILON {
        multiplier
    } else {
        1.0
    }
}
