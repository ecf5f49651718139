//! Headless flight session: one bird, a patrolling nest and two hawks
//!
//! The bird wins by settling onto the nest and loses by touching a hawk or
//! the floor. The scene owns every entity in an [`Arena`]; rendering and
//! input polling stay with the caller.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animation::{AnimationAtlas, SheetLayout};
use super::arena::{Arena, EntityId};
use super::entity::{Entity, EntityType};
use super::world::{WorldBounds, reaches};
use crate::error::PerchError;
use crate::render::{Renderer, SpriteInstance, Texture, TextureProvider};
use crate::tuning::{Physics, Tuning};

pub const BIRD_TEXTURE: &str = "assets/owl.png";
pub const NEST_TEXTURE: &str = "assets/nest.png";
pub const HAWK_TEXTURE: &str = "assets/evil_hawk.png";

/// How the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

/// Input intents for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneInput {
    pub left: bool,
    pub right: bool,
    /// Edge-triggered: true only on the frame the key went down
    pub jump: bool,
}

/// Values shown on the heads-up display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub fuel: u32,
    pub outcome: Outcome,
}

/// A complete flight session
#[derive(Debug)]
pub struct FlightScene<T: Texture> {
    pub arena: Arena<T>,
    pub bird: EntityId,
    pub nest: EntityId,
    pub hawks: [EntityId; 2],
    pub bounds: WorldBounds,
    target_expansion: f32,
    outcome: Outcome,
    frames: u64,
}

impl<T: Texture> FlightScene<T> {
    /// Build a session; nest and hawk placement is drawn from `seed`
    pub fn new<P>(tuning: &Tuning, textures: &mut P, seed: u64) -> Result<Self, PerchError>
    where
        P: TextureProvider<Texture = T>,
    {
        tuning.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let physics = tuning.physics();
        let (w, h) = (tuning.world_width, tuning.world_height);
        let mut arena = Arena::new();

        let bird_physics = Physics {
            frame_speed: tuning.bird_frame_speed,
            bounciness: tuning.bird_bounciness,
            ..physics
        };
        let (cols, rows) = tuning.bird_sheet;
        let bird = Entity::atlas(
            EntityType::Player,
            tuning.bird_size * 0.5,
            tuning.bird_size,
            textures.load(BIRD_TEXTURE)?,
            SheetLayout::new(cols, rows)?,
            AnimationAtlas::uniform(tuning.bird_frames.clone())?,
            &bird_physics,
        )?;
        let bird = arena.insert(bird);

        let nest_pos = Vec2::new(
            random_between(&mut rng, 100.0, w - 200.0),
            random_between(&mut rng, 100.0, h - 200.0),
        );
        let mut nest = Entity::new(
            EntityType::Platform,
            nest_pos,
            tuning.nest_size,
            textures.load(NEST_TEXTURE)?,
            &physics,
        )?;
        nest.set_patrol_speed(tuning.nest_speed);
        let nest = arena.insert(nest);

        let mut hawks = [EntityId(0); 2];
        for (slot, speed) in hawks.iter_mut().zip(tuning.hawk_speeds) {
            let pos = Vec2::new(
                random_between(&mut rng, 100.0, w - 100.0),
                random_between(&mut rng, 100.0, h - 100.0),
            );
            let mut hawk = Entity::new(
                EntityType::Enemy,
                pos,
                tuning.hawk_size,
                textures.load(HAWK_TEXTURE)?,
                &physics,
            )?;
            hawk.set_patrol_speed(speed);
            *slot = arena.insert(hawk);
        }

        log::info!(
            "Scene ready (seed {}): nest at ({:.0}, {:.0})",
            seed,
            nest_pos.x,
            nest_pos.y
        );

        Ok(Self {
            arena,
            bird,
            nest,
            hawks,
            bounds: WorldBounds::new(w, h),
            target_expansion: tuning.target_expansion,
            outcome: Outcome::Playing,
            frames: 0,
        })
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn bird(&self) -> Option<&Entity<T>> {
        self.arena.get(self.bird)
    }

    pub fn hud(&self) -> Hud {
        Hud {
            fuel: self.bird().and_then(Entity::fuel).unwrap_or(0),
            outcome: self.outcome,
        }
    }

    /// Apply input to the bird
    fn steer(&mut self, input: &SceneInput) {
        let Some(bird) = self.arena.get_mut(self.bird) else {
            return;
        };

        if input.jump {
            bird.jump();
        }

        let thrusting = if input.left {
            bird.move_left();
            bird.thrust_left()
        } else if input.right {
            bird.move_right();
            bird.thrust_right()
        } else {
            false
        };
        if !thrusting {
            bird.stop_thrust();
        }
    }

    /// Settle the session once the bird ends up somewhere decisive
    fn judge(&self) -> Outcome {
        let Some(bird) = self.arena.get(self.bird) else {
            return Outcome::Lost;
        };

        let mut outcome = Outcome::Playing;
        if let Some(nest) = self.arena.get(self.nest) {
            if reaches(bird, nest, self.target_expansion) && bird.velocity().y >= 0.0 {
                outcome = Outcome::Won;
            }
        }
        for hawk in self.hawks.iter().filter_map(|&id| self.arena.get(id)) {
            if reaches(bird, hawk, self.target_expansion) {
                outcome = Outcome::Lost;
            }
        }
        outcome
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        if let Some(bird) = self.arena.get_mut(self.bird) {
            bird.set_velocity(Vec2::ZERO);
            bird.set_acceleration(Vec2::ZERO);
        }
        log::info!("Session over after {} frames: {:?}", self.frames, outcome);
    }

    /// Render every live entity, back to front
    pub fn render<R: Renderer<T>>(&self, renderer: &mut R) {
        for entity in self.draw_order() {
            entity.render(renderer);
        }
    }

    /// Sprite data in draw order (nest, hawks, bird)
    pub fn sprites(&self) -> Vec<SpriteInstance> {
        self.draw_order().filter_map(Entity::sprite).collect()
    }

    fn draw_order(&self) -> impl Iterator<Item = &Entity<T>> {
        [self.nest, self.hawks[0], self.hawks[1], self.bird]
            .into_iter()
            .filter_map(move |id| self.arena.get(id))
    }
}

/// Advance the session by one frame
///
/// Does nothing once the session is won or lost.
pub fn tick<T: Texture>(scene: &mut FlightScene<T>, input: &SceneInput, dt: f32) {
    if scene.outcome != Outcome::Playing {
        return;
    }
    scene.frames += 1;

    scene.steer(input);

    scene.arena.update(scene.nest, dt, &[]);
    for hawk in scene.hawks {
        scene.arena.update(hawk, dt, &[]);
    }
    let candidates = [scene.nest, scene.hawks[0], scene.hawks[1]];
    scene.arena.update(scene.bird, dt, &candidates);

    let hit_floor = match scene.arena.get_mut(scene.bird) {
        Some(bird) => scene.bounds.confine(bird).floor,
        None => true,
    };
    if hit_floor {
        scene.finish(Outcome::Lost);
        return;
    }

    let outcome = scene.judge();
    if outcome != Outcome::Playing {
        scene.finish(outcome);
    }
}

/// Uniform draw from `[lo, hi]`, collapsing to `lo` for an empty range
fn random_between(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..=hi)
    } else {
        lo
    }
}
