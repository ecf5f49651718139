//! Entity: the per-frame composition of kinematics, collision, patrol,
//! player control and animation
//!
//! All entities share the kinematic/collider core. Optional behaviors are
//! attached from the entity type: platforms and enemies patrol, players get
//! a [`Pilot`], atlas-textured entities get an [`Animator`].

use std::borrow::Borrow;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::{AnimationAtlas, Animator, Direction, SheetLayout, TextureMode};
use super::collider::Collider;
use super::kinematics::Kinematics;
use super::patrol::Patrol;
use super::pilot::Pilot;
use super::resolve::{Bounce, CollisionFlags, resolve_x, resolve_y};
use crate::error::PerchError;
use crate::render::{Rect, Renderer, SpriteInstance, Texture, atlas_uv_rect, full_rect};
use crate::tuning::Physics;

/// Entity category; decides which behaviors are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntityType {
    Player,
    Block,
    Platform,
    Enemy,
    #[default]
    None,
}

impl EntityType {
    pub fn patrols(self) -> bool {
        matches!(self, EntityType::Platform | EntityType::Enemy)
    }

    pub fn is_piloted(self) -> bool {
        self == EntityType::Player
    }
}

/// Inactive entities skip update and render and never collide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntityStatus {
    #[default]
    Active,
    Inactive,
}

/// A simulated, drawable game entity owning its texture `T`
#[derive(Debug)]
pub struct Entity<T: Texture> {
    kind: EntityType,
    status: EntityStatus,
    kin: Kinematics,
    scale: Vec2,
    collider_dimensions: Vec2,
    bounce: Bounce,
    horizontal_damping: f32,
    /// Rotation in degrees
    angle: f32,
    direction: Direction,
    flags: CollisionFlags,

    texture: T,
    texture_mode: TextureMode,
    animator: Option<Animator>,

    patrol: Option<Patrol>,
    pilot: Option<Pilot>,
    physics: Physics,
}

impl<T: Texture> Entity<T> {
    /// Single-image entity; starts at rest with no gravity
    pub fn new(
        kind: EntityType,
        position: Vec2,
        scale: Vec2,
        texture: T,
        physics: &Physics,
    ) -> Result<Self, PerchError> {
        check_dimensions(scale)?;
        Ok(Self {
            kind,
            status: EntityStatus::Active,
            kin: Kinematics::at(position),
            scale,
            collider_dimensions: scale,
            bounce: Bounce {
                bounciness: physics.bounciness,
                min_velocity: physics.min_bounce_velocity,
                y_threshold: physics.y_collision_threshold,
            },
            horizontal_damping: physics.horizontal_damping,
            angle: 0.0,
            direction: Direction::Right,
            flags: CollisionFlags::default(),
            texture,
            texture_mode: TextureMode::Single,
            animator: None,
            patrol: kind.patrols().then(|| Patrol::new(physics.patrol_speed, physics.world_width)),
            pilot: kind.is_piloted().then(|| Pilot::new(physics)),
            physics: *physics,
        })
    }

    /// Animated sprite-sheet entity; falls under gravity
    ///
    /// Fails if the atlas references cells outside the sheet or the
    /// configured frame speed is not positive.
    pub fn atlas(
        kind: EntityType,
        position: Vec2,
        scale: Vec2,
        texture: T,
        sheet: SheetLayout,
        atlas: AnimationAtlas,
        physics: &Physics,
    ) -> Result<Self, PerchError> {
        atlas.check_sheet(&sheet)?;
        let animator = Animator::new(atlas, physics.frame_speed)?;

        let mut entity = Self::new(kind, position, scale, texture, physics)?;
        entity.kin.acceleration = Vec2::new(0.0, physics.gravity);
        entity.texture_mode = TextureMode::Atlas(sheet);
        entity.animator = Some(animator);
        Ok(entity)
    }

    // === Per-frame contract ===

    /// Advance one frame against candidate entities
    pub fn update(&mut self, dt: f32, candidates: &[&Entity<T>]) {
        self.update_against(dt, candidates.iter().map(|e| e.collider()));
    }

    /// Advance one frame against raw collider snapshots
    ///
    /// `candidates` is walked once per axis, so it must be cheap to clone.
    pub fn update_against<I>(&mut self, dt: f32, candidates: I)
    where
        I: IntoIterator + Clone,
        I::Item: Borrow<Collider>,
    {
        if !self.is_active() {
            return;
        }

        self.flags.reset();

        if let Some(pilot) = self.pilot.as_mut() {
            let thrusting = !self.kin.is_coasting();
            if pilot.meter.advance(dt, thrusting, &mut pilot.fuel) && pilot.fuel.is_empty() {
                // Out of fuel mid-thrust: engines cut
                self.kin.acceleration.x = 0.0;
            }
        }

        self.kin.integrate_velocity(dt, self.horizontal_damping);

        if let Some(power) = self.pilot.as_mut().and_then(Pilot::take_jump) {
            self.kin.apply_jump(power);
        }

        if let Some(patrol) = self.patrol.as_mut() {
            patrol.step(&mut self.kin.position, self.scale);
        }

        self.kin.integrate_y(dt);
        resolve_y(
            &mut self.kin,
            self.collider_dimensions,
            &self.bounce,
            candidates.clone(),
            &mut self.flags,
        );

        self.kin.integrate_x(dt);
        resolve_x(
            &mut self.kin,
            self.collider_dimensions,
            &self.bounce,
            candidates,
            &mut self.flags,
        );

        if let Some(animator) = self.animator.as_mut() {
            animator.advance(dt, self.direction);
        }
    }

    /// Draw data for the current frame; `None` while inactive
    pub fn sprite(&self) -> Option<SpriteInstance> {
        if !self.is_active() {
            return None;
        }

        let size = self.texture.size();
        let source = match (self.texture_mode, self.animator.as_ref()) {
            (TextureMode::Atlas(sheet), Some(animator)) => {
                atlas_uv_rect(size, animator.current_frame(self.direction), &sheet)
            }
            _ => full_rect(size),
        };

        Some(SpriteInstance {
            source,
            dest: Rect::new(self.kin.position.x, self.kin.position.y, self.scale.x, self.scale.y),
            origin: (self.scale * 0.5).to_array(),
            rotation: self.angle,
            _pad: 0.0,
        })
    }

    /// Hand this entity's sprite and collider outline to a renderer
    pub fn render<R: Renderer<T>>(&self, renderer: &mut R) {
        if let Some(sprite) = self.sprite() {
            renderer.draw_sprite(&self.texture, &sprite);
            renderer.draw_collider(self.collider_rect());
        }
    }

    // === Collision ===

    /// Current collision box
    pub fn collider(&self) -> Collider {
        Collider {
            center: self.kin.position,
            dimensions: self.collider_dimensions,
            active: self.is_active(),
        }
    }

    /// Whether this entity's box overlaps `other`'s
    pub fn overlaps(&self, other: &Entity<T>) -> bool {
        self.collider().overlaps(&other.collider())
    }

    /// Collider outline in world space
    pub fn collider_rect(&self) -> Rect {
        Rect::centered(self.kin.position, self.collider_dimensions)
    }

    pub fn reset_collision_flags(&mut self) {
        self.flags.reset();
    }

    pub fn collision_flags(&self) -> CollisionFlags {
        self.flags
    }

    pub fn is_colliding_top(&self) -> bool {
        self.flags.top
    }

    pub fn is_colliding_bottom(&self) -> bool {
        self.flags.bottom
    }

    pub fn is_colliding_left(&self) -> bool {
        self.flags.left
    }

    pub fn is_colliding_right(&self) -> bool {
        self.flags.right
    }

    // === Lifecycle ===

    pub fn activate(&mut self) {
        self.status = EntityStatus::Active;
    }

    pub fn deactivate(&mut self) {
        self.status = EntityStatus::Inactive;
    }

    pub fn is_active(&self) -> bool {
        self.status == EntityStatus::Active
    }

    pub fn status(&self) -> EntityStatus {
        self.status
    }

    // === Movement intent ===

    pub fn move_up(&mut self) {
        self.kin.movement.y = -1.0;
        self.direction = Direction::Up;
    }

    pub fn move_down(&mut self) {
        self.kin.movement.y = 1.0;
        self.direction = Direction::Down;
    }

    pub fn move_left(&mut self) {
        self.kin.movement.x = -1.0;
        self.direction = Direction::Left;
    }

    pub fn move_right(&mut self) {
        self.kin.movement.x = 1.0;
        self.direction = Direction::Right;
    }

    pub fn reset_movement(&mut self) {
        self.kin.movement = Vec2::ZERO;
    }

    pub fn normalise_movement(&mut self) {
        self.kin.normalise_movement();
    }

    // === Player control ===

    /// Request a jump for the next update
    ///
    /// Returns false when refused (no fuel, or not a player). Each attempt
    /// by a player costs one fuel step either way.
    pub fn jump(&mut self) -> bool {
        match self.pilot.as_mut() {
            Some(pilot) => {
                let accepted = pilot.request_jump();
                if !accepted {
                    log::debug!("jump refused: out of fuel");
                }
                accepted
            }
            None => false,
        }
    }

    pub fn thrust_left(&mut self) -> bool {
        self.thrust(-1.0)
    }

    pub fn thrust_right(&mut self) -> bool {
        self.thrust(1.0)
    }

    fn thrust(&mut self, sign: f32) -> bool {
        match self.pilot.as_ref().and_then(|p| p.thrust_toward(sign)) {
            Some(accel) => {
                self.kin.acceleration.x = accel;
                true
            }
            None => false,
        }
    }

    /// Stop thrusting and let drag take over
    pub fn stop_thrust(&mut self) {
        self.kin.acceleration.x = 0.0;
    }

    /// Zero horizontal velocity, keeping vertical
    pub fn halt_horizontal(&mut self) {
        self.kin.velocity.x = 0.0;
    }

    /// Remaining fuel (players only)
    pub fn fuel(&self) -> Option<u32> {
        self.pilot.as_ref().map(|p| p.fuel.level())
    }

    pub fn is_jump_pending(&self) -> bool {
        self.pilot.as_ref().is_some_and(Pilot::is_jump_pending)
    }

    pub fn jump_power(&self) -> Option<f32> {
        self.pilot.as_ref().map(|p| p.jump_power)
    }

    pub fn set_jump_power(&mut self, power: f32) {
        if let Some(pilot) = self.pilot.as_mut() {
            pilot.jump_power = power;
        }
    }

    // === Accessors ===

    pub fn entity_type(&self) -> EntityType {
        self.kind
    }

    pub fn kinematics(&self) -> &Kinematics {
        &self.kin
    }

    pub fn position(&self) -> Vec2 {
        self.kin.position
    }

    pub fn movement(&self) -> Vec2 {
        self.kin.movement
    }

    pub fn velocity(&self) -> Vec2 {
        self.kin.velocity
    }

    pub fn acceleration(&self) -> Vec2 {
        self.kin.acceleration
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn collider_dimensions(&self) -> Vec2 {
        self.collider_dimensions
    }

    pub fn texture(&self) -> &T {
        &self.texture
    }

    pub fn texture_mode(&self) -> TextureMode {
        self.texture_mode
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Animation rate (atlas entities only)
    pub fn frame_speed(&self) -> Option<f32> {
        self.animator.as_ref().map(Animator::frame_speed)
    }

    /// Sheet cell currently shown (atlas entities only)
    pub fn animation_frame(&self) -> Option<u32> {
        self.animator
            .as_ref()
            .map(|a| a.current_frame(self.direction))
    }

    pub fn animation_atlas(&self) -> Option<&AnimationAtlas> {
        self.animator.as_ref().map(Animator::atlas)
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn bounciness(&self) -> f32 {
        self.bounce.bounciness
    }

    pub fn patrol(&self) -> Option<&Patrol> {
        self.patrol.as_ref()
    }

    // === Setters ===

    pub fn set_position(&mut self, position: Vec2) {
        self.kin.position = position;
    }

    pub fn set_movement(&mut self, movement: Vec2) {
        self.kin.movement = movement;
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.kin.velocity = velocity;
    }

    pub fn set_acceleration(&mut self, acceleration: Vec2) {
        self.kin.acceleration = acceleration;
    }

    pub fn set_bounciness(&mut self, bounciness: f32) {
        self.bounce.bounciness = bounciness;
    }

    pub fn set_min_bounce_velocity(&mut self, min_velocity: f32) {
        self.bounce.min_velocity = min_velocity;
    }

    /// Render size; the collider keeps its own dimensions
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    pub fn set_collider_dimensions(&mut self, dimensions: Vec2) -> Result<(), PerchError> {
        check_dimensions(dimensions)?;
        self.collider_dimensions = dimensions;
        Ok(())
    }

    /// Swap the texture; the previous handle is dropped (released) here
    pub fn set_texture(&mut self, texture: T) {
        self.texture = texture;
    }

    /// Change the animation rate; a no-op for single-image entities
    pub fn set_frame_speed(&mut self, frame_speed: f32) -> Result<(), PerchError> {
        match self.animator.as_mut() {
            Some(animator) => animator.set_frame_speed(frame_speed),
            None => Ok(()),
        }
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    pub fn set_patrol_speed(&mut self, speed: f32) {
        if let Some(patrol) = self.patrol.as_mut() {
            patrol.speed = speed;
        }
    }

    /// Retype the entity, attaching or detaching patrol and pilot
    pub fn set_entity_type(&mut self, kind: EntityType) {
        self.kind = kind;
        if !kind.patrols() {
            self.patrol = None;
        } else if self.patrol.is_none() {
            self.patrol = Some(Patrol::new(self.physics.patrol_speed, self.physics.world_width));
        }
        if !kind.is_piloted() {
            self.pilot = None;
        } else if self.pilot.is_none() {
            self.pilot = Some(Pilot::new(&self.physics));
        }
    }
}

fn check_dimensions(dimensions: Vec2) -> Result<(), PerchError> {
    if dimensions.x > 0.0 && dimensions.y > 0.0 {
        Ok(())
    } else {
        Err(PerchError::InvalidCollider {
            width: dimensions.x,
            height: dimensions.y,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use glam::UVec2;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Texture stub that counts releases
    #[derive(Debug)]
    pub(crate) struct TestTexture {
        pub size: UVec2,
        pub released: Rc<Cell<u32>>,
    }

    impl TestTexture {
        pub(crate) fn new(w: u32, h: u32) -> Self {
            Self {
                size: UVec2::new(w, h),
                released: Rc::new(Cell::new(0)),
            }
        }
    }

    impl Texture for TestTexture {
        fn size(&self) -> UVec2 {
            self.size
        }
    }

    impl Drop for TestTexture {
        fn drop(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn block(x: f32, y: f32, w: f32, h: f32) -> Entity<TestTexture> {
        Entity::new(
            EntityType::Block,
            Vec2::new(x, y),
            Vec2::new(w, h),
            TestTexture::new(16, 16),
            &Physics::default(),
        )
        .unwrap()
    }

    fn player(x: f32, y: f32) -> Entity<TestTexture> {
        Entity::new(
            EntityType::Player,
            Vec2::new(x, y),
            Vec2::splat(40.0),
            TestTexture::new(16, 16),
            &Physics::default(),
        )
        .unwrap()
    }

    fn bird() -> Entity<TestTexture> {
        Entity::atlas(
            EntityType::Player,
            Vec2::new(100.0, 100.0),
            Vec2::splat(40.0),
            TestTexture::new(600, 900),
            SheetLayout::new(6, 9).unwrap(),
            AnimationAtlas::uniform(vec![0, 1, 2, 3, 4, 5]).unwrap(),
            &Physics {
                frame_speed: 6.0,
                ..Physics::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_components_follow_type() {
        assert!(player(0.0, 0.0).fuel().is_some());
        assert!(player(0.0, 0.0).patrol().is_none());
        assert!(block(0.0, 0.0, 10.0, 10.0).patrol().is_none());

        let mut e = block(0.0, 0.0, 10.0, 10.0);
        e.set_entity_type(EntityType::Enemy);
        assert!(e.patrol().is_some());
        assert!(e.fuel().is_none());
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let err = Entity::new(
            EntityType::Block,
            Vec2::ZERO,
            Vec2::new(0.0, 10.0),
            TestTexture::new(1, 1),
            &Physics::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            PerchError::InvalidCollider {
                width: 0.0,
                height: 10.0
            }
        );
    }

    #[test]
    fn test_atlas_rejects_zero_frame_speed() {
        let err = Entity::atlas(
            EntityType::Player,
            Vec2::ZERO,
            Vec2::splat(40.0),
            TestTexture::new(600, 900),
            SheetLayout::new(6, 9).unwrap(),
            AnimationAtlas::uniform(vec![0]).unwrap(),
            &Physics {
                frame_speed: 0.0,
                ..Physics::default()
            },
        )
        .unwrap_err();
        assert_eq!(err, PerchError::InvalidFrameSpeed(0.0));
    }

    #[test]
    fn test_atlas_entity_falls() {
        let mut b = bird();
        assert_eq!(b.acceleration(), Vec2::new(0.0, crate::consts::GRAVITY));
        b.update(0.1, &[]);
        assert!(b.velocity().y > 0.0);
        assert!(b.position().y > 100.0);
    }

    #[test]
    fn test_inactive_entity_is_frozen() {
        let mut b = bird();
        b.set_velocity(Vec2::new(50.0, 50.0));
        b.deactivate();
        b.update(0.1, &[]);
        assert_eq!(b.position(), Vec2::new(100.0, 100.0));
        assert!(b.sprite().is_none());

        b.activate();
        b.update(0.1, &[]);
        assert_ne!(b.position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_flags_reset_each_frame() {
        let floor = block(100.0, 130.0, 200.0, 40.0);
        let mut p = player(100.0, 100.0);
        p.set_velocity(Vec2::new(0.0, 100.0));
        p.update(0.0, &[&floor]);
        assert!(p.is_colliding_bottom());

        p.set_position(Vec2::new(500.0, 500.0));
        p.update(0.016, &[&floor]);
        assert!(!p.collision_flags().any());
    }

    #[test]
    fn test_entities_and_snapshots_resolve_alike() {
        let floor = block(100.0, 130.0, 200.0, 40.0);
        let wall = block(135.0, 100.0, 40.0, 200.0);

        let mut by_entity = player(100.0, 100.0);
        by_entity.set_velocity(Vec2::new(120.0, 100.0));
        by_entity.update(0.0, &[&floor, &wall]);

        let mut by_snapshot = player(100.0, 100.0);
        by_snapshot.set_velocity(Vec2::new(120.0, 100.0));
        by_snapshot.update_against(0.0, &[floor.collider(), wall.collider()]);

        assert_eq!(by_entity.position(), by_snapshot.position());
        assert_eq!(by_entity.velocity(), by_snapshot.velocity());
        assert_eq!(by_entity.collision_flags(), by_snapshot.collision_flags());
        assert!(by_entity.is_colliding_bottom());
    }

    #[test]
    fn test_inactive_candidate_is_ignored() {
        let mut floor = block(100.0, 130.0, 200.0, 40.0);
        floor.deactivate();
        let mut p = player(100.0, 100.0);
        p.set_velocity(Vec2::new(0.0, 100.0));
        p.update(0.0, &[&floor]);
        assert!(!p.is_colliding_bottom());
        assert_eq!(p.velocity().y, 100.0);
    }

    #[test]
    fn test_jump_applies_before_position() {
        let mut p = player(0.0, 0.0);
        assert!(p.jump());
        assert!(p.is_jump_pending());
        p.update(0.5, &[]);
        assert!(!p.is_jump_pending());
        assert_eq!(p.velocity().y, -100.0);
        assert_eq!(p.position().y, -50.0);
    }

    #[test]
    fn test_non_player_cannot_jump() {
        let mut e = block(0.0, 0.0, 10.0, 10.0);
        assert!(!e.jump());
        e.update(0.1, &[]);
        assert_eq!(e.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_thrust_meters_fuel() {
        let mut p = player(0.0, 0.0);
        assert!(p.thrust_right());
        assert_eq!(p.acceleration().x, 500.0);

        // 0.25 s of thrust in two frames charges one step
        p.update(0.125, &[]);
        p.update(0.125, &[]);
        assert_eq!(p.fuel(), Some(950));

        p.stop_thrust();
        p.update(0.125, &[]);
        p.update(0.125, &[]);
        assert_eq!(p.fuel(), Some(950));
    }

    #[test]
    fn test_thrust_cut_when_fuel_runs_out() {
        let physics = Physics {
            fuel_capacity: 50,
            ..Physics::default()
        };
        let mut p = Entity::new(
            EntityType::Player,
            Vec2::ZERO,
            Vec2::splat(40.0),
            TestTexture::new(1, 1),
            &physics,
        )
        .unwrap();
        assert!(p.thrust_left());
        p.update(0.25, &[]);
        assert_eq!(p.fuel(), Some(0));
        assert_eq!(p.acceleration().x, 0.0);
        assert!(!p.thrust_left());
    }

    #[test]
    fn test_halt_horizontal_keeps_vertical() {
        let mut p = player(0.0, 0.0);
        p.set_velocity(Vec2::new(30.0, -20.0));
        p.halt_horizontal();
        assert_eq!(p.velocity(), Vec2::new(0.0, -20.0));
    }

    #[test]
    fn test_movement_sets_direction() {
        let mut b = bird();
        b.move_left();
        assert_eq!(b.direction(), Direction::Left);
        b.move_up();
        assert_eq!(b.direction(), Direction::Up);
        assert_eq!(b.movement(), Vec2::new(-1.0, -1.0));
        b.normalise_movement();
        assert!((b.movement().length() - 1.0).abs() < 1e-6);
        b.reset_movement();
        assert_eq!(b.movement(), Vec2::ZERO);
    }

    #[test]
    fn test_sprite_rectangles() {
        let mut b = bird();
        let sprite = b.sprite().unwrap();
        assert_eq!(sprite.source, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(sprite.dest, Rect::new(100.0, 100.0, 40.0, 40.0));
        assert_eq!(sprite.origin, [20.0, 20.0]);

        // One frame interval at 6 fps
        b.update(1.0 / 6.0, &[]);
        assert_eq!(b.animation_frame(), Some(1));
        assert_eq!(b.sprite().unwrap().source.x, 100.0);

        let single = block(0.0, 0.0, 10.0, 10.0);
        assert_eq!(single.sprite().unwrap().source, Rect::new(0.0, 0.0, 16.0, 16.0));
    }

    #[test]
    fn test_render_hands_off_sprite_and_collider() {
        struct Recorder {
            sprites: usize,
            colliders: Vec<Rect>,
        }
        impl Renderer<TestTexture> for Recorder {
            fn draw_sprite(&mut self, _texture: &TestTexture, _sprite: &SpriteInstance) {
                self.sprites += 1;
            }
            fn draw_collider(&mut self, rect: Rect) {
                self.colliders.push(rect);
            }
        }

        let mut rec = Recorder {
            sprites: 0,
            colliders: Vec::new(),
        };
        let mut e = block(50.0, 50.0, 20.0, 10.0);
        e.render(&mut rec);
        e.deactivate();
        e.render(&mut rec);

        assert_eq!(rec.sprites, 1);
        assert_eq!(rec.colliders, vec![Rect::new(40.0, 45.0, 20.0, 10.0)]);
    }

    #[test]
    fn test_texture_released_once() {
        let tex = TestTexture::new(8, 8);
        let released = tex.released.clone();
        let e = Entity::new(EntityType::None, Vec2::ZERO, Vec2::ONE, tex, &Physics::default()).unwrap();
        assert_eq!(released.get(), 0);
        drop(e);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_set_texture_releases_previous() {
        let first = TestTexture::new(8, 8);
        let released = first.released.clone();
        let mut e = Entity::new(EntityType::None, Vec2::ZERO, Vec2::ONE, first, &Physics::default()).unwrap();
        e.set_texture(TestTexture::new(4, 4));
        assert_eq!(released.get(), 1);
        assert_eq!(e.texture().size(), UVec2::new(4, 4));
    }

    #[test]
    fn test_collider_independent_of_scale() {
        let mut e = block(0.0, 0.0, 40.0, 40.0);
        e.set_collider_dimensions(Vec2::new(20.0, 10.0)).unwrap();
        e.set_scale(Vec2::new(80.0, 80.0));
        assert_eq!(e.collider_dimensions(), Vec2::new(20.0, 10.0));
        assert!(e.set_collider_dimensions(Vec2::new(-1.0, 5.0)).is_err());
        assert_eq!(e.collider_dimensions(), Vec2::new(20.0, 10.0));
    }
}
