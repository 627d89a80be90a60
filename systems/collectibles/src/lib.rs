#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Timed spawning of flock pickups while a run is being played.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use skyward_core::{
    seed::{derive_labeled_seed, RNG_STREAM_COLLECTIBLES},
    CollectibleConfig, CollectibleConfigId, Command, Event, HazardCatalog, ScreenBounds, Vec2,
};

const LATERAL_FRACTION: f32 = 0.9;
const SPAWN_HEIGHT_ABOVE_TOP: f32 = 2.0;

/// Read-only inputs the collectible spawner needs on every step.
#[derive(Clone, Copy, Debug)]
pub struct CollectibleView<'a> {
    /// Catalog holding the collectible configurations.
    pub catalog: &'a HazardCatalog,
    /// Difficulty multiplier in effect.
    pub multiplier: f32,
    /// Current screen rectangle.
    pub bounds: ScreenBounds,
    /// Whether the run is in its playing state.
    pub playing: bool,
}

/// Pure system that emits collectible spawn commands.
#[derive(Debug)]
pub struct CollectibleSpawning {
    rng: ChaCha8Rng,
    countdowns: Vec<f32>,
    spawning: bool,
}

impl CollectibleSpawning {
    /// Creates an idle spawner; timers are armed when play starts.
    #[must_use]
    pub fn new(rng_seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(derive_labeled_seed(rng_seed, RNG_STREAM_COLLECTIBLES)),
            countdowns: Vec::new(),
            spawning: false,
        }
    }

    /// Consumes events and the current view to emit spawn commands.
    pub fn handle(&mut self, events: &[Event], view: CollectibleView<'_>, out: &mut Vec<Command>) {
        if !view.playing {
            self.spawning = false;
            return;
        }

        let configs = view.catalog.collectibles();
        if !self.spawning || self.countdowns.len() != configs.len() {
            self.spawning = true;
            self.reset_timers(configs);
        }

        let elapsed = events
            .iter()
            .filter_map(|event| match event {
                Event::TimeAdvanced { dt } => Some(*dt),
                _ => None,
            })
            .fold(Duration::ZERO, Duration::saturating_add)
            .as_secs_f32();

        let multiplier = if view.multiplier > f32::EPSILON {
            view.multiplier
        } else {
            1.0
        };
        for (index, config) in configs.iter().enumerate() {
            self.countdowns[index] -= elapsed;
            if self.countdowns[index] > 0.0 {
                continue;
            }
            self.countdowns[index] = self.window(config) / multiplier;
            if self.rng.gen::<f32>() > config.spawn_chance {
                continue;
            }

            let half_width = view.bounds.half_extents().x * LATERAL_FRACTION;
            let x = view.bounds.center().x + self.rng.gen_range(-half_width..=half_width);
            let position = Vec2::new(x, view.bounds.max().y + SPAWN_HEIGHT_ABOVE_TOP);
            tracing::debug!(collectible = %config.name, x, "collectible scheduled");
            out.push(Command::SpawnCollectible {
                config: CollectibleConfigId::new(index as u32),
                position,
            });
        }
    }

    /// Reports whether timers are armed for an ongoing run.
    #[must_use]
    pub const fn is_spawning(&self) -> bool {
        self.spawning
    }

    fn reset_timers(&mut self, configs: &[CollectibleConfig]) {
        let countdowns = configs.iter().map(|config| self.window(config)).collect();
        self.countdowns = countdowns;
    }

    fn window(&mut self, config: &CollectibleConfig) -> f32 {
        self.rng
            .gen_range(config.min_time_between_spawns..=config.max_time_between_spawns)
    }
}
