//! Sprite-sheet animation driven by elapsed time
//!
//! Each facing direction owns a cyclic sequence of sheet cells. The cursor
//! advances one step every `1 / frame_speed` seconds and wraps around.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PerchError;

/// Facing direction; selects the frame sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    #[default]
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    #[inline]
    fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }
}

/// Grid layout of a sprite sheet
///
/// Both dimensions are non-zero and their product fits in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct SheetLayout {
    cols: u32,
    rows: u32,
}

impl SheetLayout {
    pub fn new(cols: u32, rows: u32) -> Result<Self, PerchError> {
        if cols == 0 || rows == 0 || cols.checked_mul(rows).is_none() {
            return Err(PerchError::InvalidSheetLayout { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cells(&self) -> u32 {
        self.cols * self.rows
    }

    /// Column and row of a cell index (row-major)
    #[inline]
    pub fn cell(&self, index: u32) -> (u32, u32) {
        (index % self.cols, index / self.cols)
    }
}

impl TryFrom<(u32, u32)> for SheetLayout {
    type Error = PerchError;

    fn try_from((cols, rows): (u32, u32)) -> Result<Self, PerchError> {
        Self::new(cols, rows)
    }
}

impl From<SheetLayout> for (u32, u32) {
    fn from(sheet: SheetLayout) -> Self {
        (sheet.cols, sheet.rows)
    }
}

/// How an entity's texture is sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextureMode {
    /// Whole image, no animation
    #[default]
    Single,
    /// Cells of a sprite sheet
    Atlas(SheetLayout),
}

/// Frame sequences for every direction
///
/// Construction guarantees a non-empty sequence for each of the four
/// directions, so lookups never fail at runtime. Deserialization goes
/// through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<Direction, Vec<u32>>",
    into = "HashMap<Direction, Vec<u32>>"
)]
pub struct AnimationAtlas {
    sequences: [Vec<u32>; 4],
}

impl AnimationAtlas {
    /// Build from a direction map; every direction must be present and non-empty
    pub fn new(mut map: HashMap<Direction, Vec<u32>>) -> Result<Self, PerchError> {
        let mut take = |dir: Direction| match map.remove(&dir) {
            Some(seq) if !seq.is_empty() => Ok(seq),
            _ => Err(PerchError::MissingAnimation(dir)),
        };
        Ok(Self {
            sequences: [
                take(Direction::Left)?,
                take(Direction::Up)?,
                take(Direction::Right)?,
                take(Direction::Down)?,
            ],
        })
    }

    /// Same sequence for all directions
    pub fn uniform(frames: Vec<u32>) -> Result<Self, PerchError> {
        let map = Direction::ALL.iter().map(|&d| (d, frames.clone())).collect();
        Self::new(map)
    }

    #[inline]
    pub fn sequence(&self, direction: Direction) -> &[u32] {
        &self.sequences[direction.index()]
    }

    /// Reject sequences that reference cells outside the sheet
    pub fn check_sheet(&self, sheet: &SheetLayout) -> Result<(), PerchError> {
        let cells = sheet.cells();
        match self.sequences.iter().flatten().find(|&&f| f >= cells) {
            Some(&frame) => Err(PerchError::FrameOutOfSheet { frame, cells }),
            None => Ok(()),
        }
    }
}

impl TryFrom<HashMap<Direction, Vec<u32>>> for AnimationAtlas {
    type Error = PerchError;

    fn try_from(map: HashMap<Direction, Vec<u32>>) -> Result<Self, PerchError> {
        Self::new(map)
    }
}

impl From<AnimationAtlas> for HashMap<Direction, Vec<u32>> {
    fn from(atlas: AnimationAtlas) -> Self {
        let [left, up, right, down] = atlas.sequences;
        HashMap::from([
            (Direction::Left, left),
            (Direction::Up, up),
            (Direction::Right, right),
            (Direction::Down, down),
        ])
    }
}

/// Time-driven cursor over the atlas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AnimatorState")]
pub struct Animator {
    atlas: AnimationAtlas,
    frame_speed: f32,
    cursor: usize,
    elapsed: f32,
}

impl Animator {
    pub fn new(atlas: AnimationAtlas, frame_speed: f32) -> Result<Self, PerchError> {
        validate_frame_speed(frame_speed)?;
        Ok(Self {
            atlas,
            frame_speed,
            cursor: 0,
            elapsed: 0.0,
        })
    }

    pub fn atlas(&self) -> &AnimationAtlas {
        &self.atlas
    }

    pub fn frame_speed(&self) -> f32 {
        self.frame_speed
    }

    pub fn set_frame_speed(&mut self, frame_speed: f32) -> Result<(), PerchError> {
        validate_frame_speed(frame_speed)?;
        self.frame_speed = frame_speed;
        Ok(())
    }

    /// Cursor position within the current sequence
    pub fn cursor(&self, direction: Direction) -> usize {
        self.cursor % self.atlas.sequence(direction).len()
    }

    /// Sheet cell to draw for `direction`
    pub fn current_frame(&self, direction: Direction) -> u32 {
        let seq = self.atlas.sequence(direction);
        seq[self.cursor % seq.len()]
    }

    /// Accumulate `dt`; step at most one frame per call
    pub fn advance(&mut self, dt: f32, direction: Direction) {
        let len = self.atlas.sequence(direction).len();
        let interval = 1.0 / self.frame_speed;

        self.elapsed += dt;
        if self.elapsed >= interval {
            self.elapsed -= interval;
            self.cursor = (self.cursor + 1) % len;
        }
    }
}

/// Unchecked wire form of [`Animator`]
#[derive(Deserialize)]
struct AnimatorState {
    atlas: AnimationAtlas,
    frame_speed: f32,
    #[serde(default)]
    cursor: usize,
    #[serde(default)]
    elapsed: f32,
}

impl TryFrom<AnimatorState> for Animator {
    type Error = PerchError;

    fn try_from(state: AnimatorState) -> Result<Self, PerchError> {
        let mut animator = Animator::new(state.atlas, state.frame_speed)?;
        let longest = Direction::ALL
            .iter()
            .map(|&d| animator.atlas.sequence(d).len())
            .max()
            .unwrap_or(1);
        animator.cursor = state.cursor % longest;
        if state.elapsed.is_finite() && state.elapsed >= 0.0 {
            animator.elapsed = state.elapsed;
        }
        Ok(animator)
    }
}

fn validate_frame_speed(frame_speed: f32) -> Result<(), PerchError> {
    if frame_speed.is_finite() && frame_speed > 0.0 {
        Ok(())
    } else {
        Err(PerchError::InvalidFrameSpeed(frame_speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_frames() -> AnimationAtlas {
        AnimationAtlas::uniform(vec![0, 1, 2, 3, 4, 5]).unwrap()
    }

    #[test]
    fn test_missing_direction_rejected() {
        let mut map = HashMap::new();
        map.insert(Direction::Left, vec![0]);
        map.insert(Direction::Right, vec![1]);
        map.insert(Direction::Down, vec![2]);
        assert_eq!(
            AnimationAtlas::new(map).unwrap_err(),
            PerchError::MissingAnimation(Direction::Up)
        );
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(matches!(
            AnimationAtlas::uniform(Vec::new()),
            Err(PerchError::MissingAnimation(_))
        ));
    }

    #[test]
    fn test_deserialized_atlas_is_checked() {
        let empty = r#"{"Left":[],"Up":[0],"Right":[0],"Down":[0]}"#;
        assert!(serde_json::from_str::<AnimationAtlas>(empty).is_err());
        assert!(serde_json::from_str::<AnimationAtlas>(r#"{"Left":[0]}"#).is_err());

        let atlas = six_frames();
        let json = serde_json::to_string(&atlas).unwrap();
        assert_eq!(serde_json::from_str::<AnimationAtlas>(&json).unwrap(), atlas);
    }

    #[test]
    fn test_deserialized_animator_is_checked() {
        let mut anim = Animator::new(six_frames(), 6.0).unwrap();
        anim.advance(0.2, Direction::Right);
        let json = serde_json::to_string(&anim).unwrap();
        let restored: Animator = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, anim);

        let stalled = json.replace("\"frame_speed\":6.0", "\"frame_speed\":0.0");
        assert_ne!(stalled, json);
        assert!(serde_json::from_str::<Animator>(&stalled).is_err());
    }

    #[test]
    fn test_sheet_layout_rejects_zero_and_overflow() {
        assert!(SheetLayout::new(0, 3).is_err());
        assert!(SheetLayout::new(u32::MAX, 2).is_err());
        assert!(serde_json::from_str::<SheetLayout>("[0,9]").is_err());

        let sheet: SheetLayout = serde_json::from_str("[6,9]").unwrap();
        assert_eq!((sheet.cols(), sheet.rows(), sheet.cells()), (6, 9, 54));
    }

    #[test]
    fn test_zero_frame_speed_rejected() {
        assert_eq!(
            Animator::new(six_frames(), 0.0).unwrap_err(),
            PerchError::InvalidFrameSpeed(0.0)
        );
        let mut anim = Animator::new(six_frames(), 6.0).unwrap();
        assert!(anim.set_frame_speed(f32::NAN).is_err());
        assert_eq!(anim.frame_speed(), 6.0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut anim = Animator::new(six_frames(), 6.0).unwrap();
        let start = anim.cursor(Direction::Right);

        for _ in 0..6 {
            anim.advance(1.0 / 6.0, Direction::Right);
        }
        assert_eq!(anim.cursor(Direction::Right), start);
    }

    #[test]
    fn test_advances_one_frame_per_interval() {
        let mut anim = Animator::new(six_frames(), 10.0).unwrap();
        anim.advance(0.06, Direction::Right);
        assert_eq!(anim.current_frame(Direction::Right), 0);
        anim.advance(0.06, Direction::Right);
        assert_eq!(anim.current_frame(Direction::Right), 1);
    }

    #[test]
    fn test_direction_switch_changes_sequence() {
        let mut map = HashMap::new();
        map.insert(Direction::Left, vec![10, 11]);
        map.insert(Direction::Up, vec![20]);
        map.insert(Direction::Right, vec![0, 1, 2]);
        map.insert(Direction::Down, vec![30, 31, 32]);
        let mut anim = Animator::new(AnimationAtlas::new(map).unwrap(), 1.0).unwrap();

        anim.advance(1.0, Direction::Right);
        anim.advance(1.0, Direction::Right);
        assert_eq!(anim.current_frame(Direction::Right), 2);
        // Cursor 2 wraps into the shorter Left sequence
        assert_eq!(anim.current_frame(Direction::Left), 10);
        assert_eq!(anim.current_frame(Direction::Up), 20);
    }

    #[test]
    fn test_sheet_bounds_checked() {
        let sheet = SheetLayout::new(2, 2).unwrap();
        assert!(six_frames().check_sheet(&sheet).is_err());
        assert!(SheetLayout::new(0, 3).is_err());
        assert_eq!(sheet.cell(3), (1, 1));
    }
}
