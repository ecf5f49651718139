//! Frame-stepped entity simulation
//!
//! Everything here is single-threaded and driven by an explicit frame delta:
//! - No rendering or platform dependencies
//! - No process-wide state; candidates and time are passed per call
//! - Y is integrated and resolved before X every frame

pub mod animation;
pub mod arena;
pub mod collider;
pub mod entity;
pub mod fuel;
pub mod kinematics;
pub mod patrol;
pub mod pilot;
pub mod resolve;
pub mod scene;
pub mod world;

pub use animation::{AnimationAtlas, Animator, Direction, SheetLayout, TextureMode};
pub use arena::{Arena, EntityId};
pub use collider::{Collider, axis_overlap};
pub use entity::{Entity, EntityStatus, EntityType};
pub use fuel::{Fuel, ThrustMeter};
pub use kinematics::Kinematics;
pub use patrol::Patrol;
pub use pilot::Pilot;
pub use resolve::{Bounce, CollisionFlags, rebound, resolve_x, resolve_y};
pub use scene::{FlightScene, Hud, Outcome, SceneInput, tick};
pub use world::{EdgeContact, WorldBounds, reaches};
