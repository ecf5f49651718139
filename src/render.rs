//! Renderer-facing data
//!
//! The core never touches a drawing surface. Entities describe what to draw
//! as a [`SpriteInstance`] (plain `Pod` data, ready for an instance buffer)
//! and hand it to a [`Renderer`] together with the texture they own.

use bytemuck::{Pod, Zeroable};
use glam::{UVec2, Vec2};

use crate::error::PerchError;
use crate::sim::SheetLayout;

/// Loaded image handle
///
/// An entity owns its handle exclusively; implementations release the
/// underlying GPU/asset resource in `Drop`, which runs exactly once when the
/// entity (or the replaced handle) goes away.
pub trait Texture {
    /// Size in pixels
    fn size(&self) -> UVec2;
}

/// Loads textures by file path
pub trait TextureProvider {
    type Texture: Texture;

    fn load(&mut self, path: &str) -> Result<Self::Texture, PerchError>;
}

/// Draws sprites for a given texture type
pub trait Renderer<T: Texture> {
    fn draw_sprite(&mut self, texture: &T, sprite: &SpriteInstance);

    /// Collider outline; ignored unless the renderer shows debug boxes
    fn draw_collider(&mut self, _rect: Rect) {}
}

/// Axis-aligned rectangle (top-left origin)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, Pod, Zeroable)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let min = center - size * 0.5;
        Self::new(min.x, min.y, size.x, size.y)
    }
}

/// One textured quad
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Source rectangle in texture pixels
    pub source: Rect,
    /// Destination: x/y is the entity center, width/height its scale
    pub dest: Rect,
    /// Rotation pivot inside `dest` (half the scale)
    pub origin: [f32; 2],
    /// Rotation in degrees
    pub rotation: f32,
    pub _pad: f32,
}

/// Sub-rectangle of sheet cell `frame` (row-major)
pub fn atlas_uv_rect(texture_size: UVec2, frame: u32, sheet: &SheetLayout) -> Rect {
    let cell_w = texture_size.x as f32 / sheet.cols() as f32;
    let cell_h = texture_size.y as f32 / sheet.rows() as f32;
    let (col, row) = sheet.cell(frame);
    Rect::new(col as f32 * cell_w, row as f32 * cell_h, cell_w, cell_h)
}

/// Whole-image source rectangle
pub fn full_rect(texture_size: UVec2) -> Rect {
    Rect::new(0.0, 0.0, texture_size.x as f32, texture_size.y as f32)
}
