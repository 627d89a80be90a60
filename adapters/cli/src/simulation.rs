//! Headless host loop.
//!
//! Plays the part of the game engine: ticks the world, feeds the schedulers,
//! moves a single lead player and reports the overlaps a physics engine
//! would detect.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    time::Duration,
};

use anyhow::{Context, Result};
use skyward_core::{Command, Event, HazardCatalog, HazardId, HazardKind, PlayerId, ScreenBounds, Vec2};
use skyward_system_collectibles::{CollectibleSpawning, CollectibleView};
use skyward_system_spawning::{SpawnView, Spawning};
use skyward_world::{self as world, query, World};

const LEAD_PLAYER: PlayerId = PlayerId::new(0);
const HAZARD_CONTACT_RADIUS: f32 = 1.0;
const PROJECTILE_CONTACT_RADIUS: f32 = 0.3;
const PLAYER_HEIGHT_ABOVE_BOTTOM: f32 = 3.0;
const PLAYER_SWAY_SPEED: f32 = 0.8;
const PLAYER_SWAY_FRACTION: f32 = 0.7;

/// Parameters of a headless run.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Settings {
    pub(crate) bounds: ScreenBounds,
    pub(crate) seed: u64,
    pub(crate) tutorial: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Tutorial,
    Playing,
}

/// World plus the systems and host state driving it.
pub(crate) struct Simulation {
    world: World,
    spawning: Spawning,
    collectibles: CollectibleSpawning,
    phase: Phase,
    tutorial_remaining: f32,
    clock: f32,
    touching: BTreeSet<HazardId>,
    summary: RunSummary,
}

impl Simulation {
    pub(crate) fn new(catalog: HazardCatalog, settings: Settings) -> Result<Self> {
        let spawning = Spawning::new(
            skyward_system_spawning::Config::new(settings.seed),
            &catalog,
        )
        .context("failed to configure the spawn scheduler")?;
        let world = World::new(
            catalog,
            world::Config::new(settings.bounds, settings.seed),
        );
        let in_tutorial = settings.tutorial > 0.0;

        let mut simulation = Self {
            world,
            spawning,
            collectibles: CollectibleSpawning::new(settings.seed),
            phase: if in_tutorial {
                Phase::Tutorial
            } else {
                Phase::Playing
            },
            tutorial_remaining: settings.tutorial,
            clock: 0.0,
            touching: BTreeSet::new(),
            summary: RunSummary::default(),
        };
        let position = simulation.player_position();
        let _ = simulation.apply(Command::SetPlayerPosition {
            player: LEAD_PLAYER,
            position,
        });
        if in_tutorial {
            simulation.spawning.pause();
            let _ = simulation.apply(Command::PauseDifficulty);
        }
        Ok(simulation)
    }

    /// Advances the run by one frame.
    pub(crate) fn step(&mut self, dt: Duration) {
        let seconds = dt.as_secs_f32();
        self.clock += seconds;
        self.advance_phase(seconds);

        let position = self.player_position();
        let _ = self.apply(Command::SetPlayerPosition {
            player: LEAD_PLAYER,
            position,
        });
        let events = self.apply(Command::Tick { dt });

        let mut commands = Vec::new();
        self.spawning.handle(
            &events,
            SpawnView {
                catalog: query::catalog(&self.world),
                multiplier: query::multiplier(&self.world),
                bounds: query::bounds(&self.world),
                player: query::lead_player_position(&self.world),
            },
            &mut commands,
        );
        self.collectibles.handle(
            &events,
            CollectibleView {
                catalog: query::catalog(&self.world),
                multiplier: query::multiplier(&self.world),
                bounds: query::bounds(&self.world),
                playing: self.phase == Phase::Playing,
            },
            &mut commands,
        );
        self.detect_contacts(position, &mut commands);

        for command in commands {
            let _ = self.apply(command);
        }
    }

    /// Totals gathered so far.
    pub(crate) fn summary(&self) -> RunSummary {
        let difficulty = query::difficulty(&self.world);
        RunSummary {
            multiplier: difficulty.multiplier(),
            play_time: difficulty.format_elapsed(),
            ..self.summary.clone()
        }
    }

    fn apply(&mut self, command: Command) -> Vec<Event> {
        let mut events = Vec::new();
        world::apply(&mut self.world, command, &mut events);
        for event in &events {
            self.summary.record(event);
        }
        events
    }

    fn advance_phase(&mut self, seconds: f32) {
        if self.phase != Phase::Tutorial {
            return;
        }
        self.tutorial_remaining -= seconds;
        if self.tutorial_remaining > 0.0 {
            return;
        }
        self.phase = Phase::Playing;
        self.spawning.resume(query::multiplier(&self.world));
        let _ = self.apply(Command::ResumeDifficulty);
        tracing::info!(clock = self.clock, "tutorial finished, run started");
    }

    fn player_position(&self) -> Vec2 {
        let bounds = query::bounds(&self.world);
        let sway = (self.clock * PLAYER_SWAY_SPEED).sin();
        Vec2::new(
            bounds.center().x + sway * bounds.half_extents().x * PLAYER_SWAY_FRACTION,
            bounds.min().y + PLAYER_HEIGHT_ABOVE_BOTTOM,
        )
    }

    fn detect_contacts(&mut self, player: Vec2, out: &mut Vec<Command>) {
        let overlapping: BTreeSet<HazardId> = query::hazard_view(&self.world)
            .iter()
            .filter(|hazard| hazard.position.distance(player) <= HAZARD_CONTACT_RADIUS)
            .map(|hazard| hazard.id)
            .collect();
        for hazard in overlapping.difference(&self.touching) {
            out.push(Command::PlayerContactBegan {
                hazard: *hazard,
                player: LEAD_PLAYER,
            });
        }
        for hazard in self.touching.difference(&overlapping) {
            if query::hazard(&self.world, *hazard).is_some() {
                out.push(Command::PlayerContactEnded {
                    hazard: *hazard,
                    player: LEAD_PLAYER,
                });
            }
        }
        self.touching = overlapping;

        for projectile in query::projectiles(&self.world) {
            if projectile.position().distance(player) <= PROJECTILE_CONTACT_RADIUS {
                out.push(Command::ProjectileContact {
                    projectile: projectile.id(),
                    player: LEAD_PLAYER,
                });
            }
        }
    }
}

/// Event totals reported at the end of a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RunSummary {
    hazards: BTreeMap<HazardKind, usize>,
    explosions: usize,
    projectiles: usize,
    patterns: usize,
    collectibles: usize,
    damage: u32,
    skipped: usize,
    multiplier: f32,
    play_time: String,
}

impl RunSummary {
    fn record(&mut self, event: &Event) {
        match event {
            Event::HazardSpawned { kind, .. } => *self.hazards.entry(*kind).or_default() += 1,
            Event::HazardExploded { .. } => self.explosions += 1,
            Event::ProjectileSpawned { .. } => self.projectiles += 1,
            Event::AttackPatternStarted { .. } => self.patterns += 1,
            Event::CollectibleSpawned { .. } => self.collectibles += 1,
            Event::PlayerDamaged { amount, .. } => self.damage += amount,
            Event::SpawnSkipped { .. } => self.skipped += 1,
            _ => {}
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "play time        {}", self.play_time)?;
        writeln!(f, "difficulty       {:.2}", self.multiplier)?;
        for (kind, count) in &self.hazards {
            writeln!(f, "{:<16} {count}", format!("{kind:?}"))?;
        }
        writeln!(f, "explosions       {}", self.explosions)?;
        writeln!(f, "projectiles      {}", self.projectiles)?;
        writeln!(f, "attack patterns  {}", self.patterns)?;
        writeln!(f, "collectibles     {}", self.collectibles)?;
        writeln!(f, "damage taken     {}", self.damage)?;
        write!(f, "skipped spawns   {}", self.skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(20);

    fn settings(seed: u64, tutorial: f32) -> Settings {
        Settings {
            bounds: ScreenBounds::centered(5.0, 9.0),
            seed,
            tutorial,
        }
    }

    fn run(settings: Settings, frames: usize) -> Simulation {
        let mut simulation =
            Simulation::new(HazardCatalog::builtin(), settings).expect("simulation");
        for _ in 0..frames {
            simulation.step(FRAME);
        }
        simulation
    }

    #[test]
    fn runs_are_reproducible_for_a_seed() {
        let first = run(settings(42, 0.0), 1_500).summary();
        let second = run(settings(42, 0.0), 1_500).summary();
        assert_eq!(first, second);
        assert!(first.hazards.values().sum::<usize>() > 0);
        assert_eq!(first.play_time, "00:30");
    }

    #[test]
    fn first_frame_spawns_a_hazard() {
        let summary = run(settings(3, 0.0), 1).summary();
        assert_eq!(summary.hazards.values().sum::<usize>(), 1);
    }

    #[test]
    fn tutorial_holds_back_spawns_and_difficulty() {
        let mut simulation = run(settings(3, 5.0), 200);
        let summary = simulation.summary();
        assert!(summary.hazards.is_empty());
        assert_eq!(summary.collectibles, 0);
        assert_eq!(summary.play_time, "00:00");

        for _ in 0..100 {
            simulation.step(FRAME);
        }
        let summary = simulation.summary();
        assert!(!summary.hazards.is_empty());
    }
}
