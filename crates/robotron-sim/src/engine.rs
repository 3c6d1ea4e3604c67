//! Simulation director: the core of the game.
//!
//! `Director` owns the hecs world, loads levels, fires shots, runs every
//! system in a fixed order each frame and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use robotron_core::components::{Bullet, Player};
use robotron_core::constants::SCREEN_RECT;
use robotron_core::enums::{GamePhase, SliceAxis};
use robotron_core::error::LevelError;
use robotron_core::events::{AudioCue, GameEvent};
use robotron_core::geometry::aim_from;
use robotron_core::input::FrameInput;
use robotron_core::level::LevelLayout;
use robotron_core::state::GameStateSnapshot;
use robotron_core::types::{Rect, SimTime, Vec2};

use crate::audio::{AudioTable, ExplosionCue};
use crate::shatter;
use crate::systems;
use crate::systems::bullets::Kill;
use crate::systems::snapshot::FrameReport;
use crate::world_setup;

/// Configuration for a director.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Screen bounds. Fixed for the director's lifetime.
    pub screen: Rect,
    /// Enemies killed by bullets break into debris.
    pub shatter_on_kill: bool,
    /// Player-enemy contact freezes the run until the next level load.
    pub player_down_ends_run: bool,
    /// Cap on bullets in flight. `None` is unbounded.
    pub max_live_bullets: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            screen: SCREEN_RECT,
            shatter_on_kill: true,
            player_down_ends_run: true,
            max_live_bullets: None,
        }
    }
}

/// The simulation director. Owns the ECS world and all sim state.
pub struct Director {
    world: World,
    config: SimConfig,
    time: SimTime,
    phase: GamePhase,
    score: u32,
    rng: ChaCha8Rng,
    audio: AudioTable,
    despawn_buffer: Vec<Entity>,

    // Cues and events raised since the last frame, and those of the last
    // frame as published in snapshots.
    pending_audio: Vec<AudioCue>,
    pending_events: Vec<GameEvent>,
    frame_audio: Vec<AudioCue>,
    frame_events: Vec<GameEvent>,
}

impl Director {
    /// Create a director. The player starts at the screen center before any
    /// level is loaded.
    pub fn new(config: SimConfig, audio: AudioTable) -> Self {
        let mut world = World::new();
        world_setup::spawn_player(&mut world, config.screen.center());
        Self {
            world,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            phase: GamePhase::default(),
            score: 0,
            audio,
            despawn_buffer: Vec::new(),
            pending_audio: Vec::new(),
            pending_events: Vec::new(),
            frame_audio: Vec::new(),
            frame_events: Vec::new(),
        }
    }

    /// Populate the world from `layout`.
    ///
    /// The whole layout is validated first; on error nothing changes. With
    /// `clear` every collection is emptied and the score reset before
    /// spawning. The player is always replaced.
    pub fn load_level(&mut self, layout: &LevelLayout, clear: bool) -> Result<(), LevelError> {
        let level = layout.validate()?;

        if clear {
            self.world.clear();
            self.score = 0;
        } else {
            let players: Vec<Entity> = self
                .world
                .query::<&Player>()
                .iter()
                .map(|(entity, _)| entity)
                .collect();
            for entity in players {
                let despawned = self.world.despawn(entity);
                debug_assert!(despawned.is_ok(), "queried player must still exist");
            }
        }

        world_setup::spawn_player(&mut self.world, level.player);
        for (kind, position) in &level.spawns {
            world_setup::spawn(&mut self.world, *kind, *position);
        }
        self.phase = GamePhase::Active;

        tracing::info!(
            clear,
            entities = level.spawns.len() + 1,
            player_x = level.player.x,
            player_y = level.player.y,
            "level loaded"
        );
        Ok(())
    }

    /// Fire a bullet from the player toward `target`.
    ///
    /// Returns `None` without side effects when the target sits on the
    /// player, the run is down, or the bullet cap is reached.
    pub fn shoot_at(&mut self, target: Vec2) -> Option<Entity> {
        if self.phase != GamePhase::Active {
            return None;
        }
        let origin = systems::player::position(&self.world)?;
        let aim = aim_from(origin, target)?;

        if let Some(cap) = self.config.max_live_bullets {
            let live = self.world.query::<&Bullet>().iter().count();
            if live >= cap {
                tracing::debug!(live, cap, "bullet cap reached");
                return None;
            }
        }

        let explosion = ExplosionCue(self.audio.get(AudioCue::Explosion));
        let bullet = world_setup::spawn_bullet(&mut self.world, aim, explosion);

        self.audio.trigger(AudioCue::Shoot);
        self.pending_audio.push(AudioCue::Shoot);
        self.pending_events.push(GameEvent::ShotFired {
            origin: aim.origin,
            direction: aim.direction,
        });
        tracing::debug!(
            x = aim.origin.x,
            y = aim.origin.y,
            dx = aim.direction.x,
            dy = aim.direction.y,
            "shot fired"
        );
        Some(bullet)
    }

    /// Advance the simulation by one frame of `dt` seconds.
    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        if self.phase == GamePhase::Active {
            if let Some(aim) = input.aim {
                if let Some(origin) = systems::player::position(&self.world) {
                    self.shoot_at(aim.target_from(origin));
                }
            }
            self.run_systems(dt, input);
            self.time.advance(f64::from(dt));
        }

        self.frame_audio = std::mem::take(&mut self.pending_audio);
        self.frame_events = std::mem::take(&mut self.pending_events);

        tracing::trace!(
            frame = self.time.frame,
            entities = self.world.len(),
            score = self.score,
            "frame"
        );
    }

    /// Read-only view of the world after the last frame.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &FrameReport {
                time: self.time,
                phase: self.phase,
                score: self.score,
                screen: self.config.screen,
                audio_events: &self.frame_audio,
                events: &self.frame_events,
            },
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the running score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that place entities by hand.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32, input: &FrameInput) {
        let screen = self.config.screen;

        // 1. Player
        systems::player::run(&mut self.world, &input.movement, dt, &screen);
        // 2. Bullets vs enemies
        let kills = systems::bullets::run(
            &mut self.world,
            dt,
            &screen,
            &mut self.pending_audio,
            &mut self.despawn_buffer,
        );
        self.apply_kills(kills);
        // 3. Enemies chase the player
        let target = systems::player::position(&self.world);
        systems::enemies::run(
            &mut self.world,
            target,
            dt,
            &screen,
            &mut self.despawn_buffer,
        );
        // 4. Family
        systems::family::run(&mut self.world, dt, &screen, &mut self.rng);
        // 5. Debris
        systems::debris::run(&mut self.world, dt, &screen, &mut self.despawn_buffer);
        // 6. Player-enemy contact
        if let Some(position) = systems::collision::player_contact(&self.world) {
            self.pending_events.push(GameEvent::PlayerDown { position });
            tracing::warn!(
                x = position.x,
                y = position.y,
                ends_run = self.config.player_down_ends_run,
                "player down"
            );
            if self.config.player_down_ends_run {
                self.phase = GamePhase::PlayerDown;
            }
        }
    }

    /// Score kills, report them and break the enemies into debris.
    fn apply_kills(&mut self, kills: Vec<Kill>) {
        for kill in kills {
            self.score += kill.reward;
            self.pending_events.push(GameEvent::EnemyDestroyed {
                variant: kill.variant,
                position: kill.position,
                reward: kill.reward,
            });
            tracing::debug!(
                id = kill.enemy.id(),
                variant = ?kill.variant,
                reward = kill.reward,
                score = self.score,
                "enemy destroyed"
            );
            if self.config.shatter_on_kill {
                shatter::shatter(
                    &mut self.world,
                    kill.position,
                    &kill.sprite,
                    &self.config.screen,
                    SliceAxis::Horizontal,
                );
            }
        }
    }
}
