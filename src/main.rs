//! Perch headless runner
//!
//! Plays one flight session with a simple autopilot and logs the result.
//! Usage: `perch [tuning.json] [seed]`

use glam::UVec2;

use perch::PerchError;
use perch::render::{Rect, Renderer, SpriteInstance, Texture, TextureProvider};
use perch::sim::{FlightScene, Outcome, SceneInput, tick};
use perch::tuning::Tuning;

const FPS: f32 = 60.0;
const MAX_FRAMES: u64 = 60 * 120;

/// Stand-in texture: a named size with no pixels behind it
#[derive(Debug)]
struct PlaceholderTexture {
    path: String,
    size: UVec2,
}

impl Texture for PlaceholderTexture {
    fn size(&self) -> UVec2 {
        self.size
    }
}

impl Drop for PlaceholderTexture {
    fn drop(&mut self) {
        log::debug!("Released {}", self.path);
    }
}

struct Placeholders;

impl TextureProvider for Placeholders {
    type Texture = PlaceholderTexture;

    fn load(&mut self, path: &str) -> Result<PlaceholderTexture, PerchError> {
        let size = match path {
            perch::sim::scene::BIRD_TEXTURE => UVec2::new(384, 576),
            perch::sim::scene::NEST_TEXTURE => UVec2::new(128, 64),
            perch::sim::scene::HAWK_TEXTURE => UVec2::new(160, 100),
            other => return Err(PerchError::Texture(format!("unknown asset {}", other))),
        };
        log::debug!("Loaded {} ({}x{})", path, size.x, size.y);
        Ok(PlaceholderTexture {
            path: path.to_string(),
            size,
        })
    }
}

/// Counts draw calls instead of drawing
#[derive(Default)]
struct NullRenderer {
    sprites: usize,
    colliders: usize,
}

impl Renderer<PlaceholderTexture> for NullRenderer {
    fn draw_sprite(&mut self, _texture: &PlaceholderTexture, _sprite: &SpriteInstance) {
        self.sprites += 1;
    }

    fn draw_collider(&mut self, _rect: Rect) {
        self.colliders += 1;
    }
}

/// Steer toward a point above the nest, flapping to hold altitude
fn autopilot(scene: &FlightScene<PlaceholderTexture>) -> SceneInput {
    let (Some(bird), Some(nest)) = (scene.bird(), scene.arena.get(scene.nest)) else {
        return SceneInput::default();
    };
    let target = nest.position() - glam::Vec2::new(0.0, nest.scale().y);
    let dx = target.x - bird.position().x;

    SceneInput {
        left: dx < -10.0,
        right: dx > 10.0,
        jump: bird.position().y > target.y && bird.velocity().y > 40.0,
    }
}

fn run() -> Result<Outcome, PerchError> {
    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);

    let mut scene = FlightScene::new(&tuning, &mut Placeholders, seed)?;
    let mut renderer = NullRenderer::default();
    let dt = 1.0 / FPS;

    while scene.outcome() == Outcome::Playing && scene.frames() < MAX_FRAMES {
        let input = autopilot(&scene);
        tick(&mut scene, &input, dt);
        scene.render(&mut renderer);

        if scene.frames() % FPS as u64 == 0 {
            let hud = scene.hud();
            log::debug!("t={}s fuel={}", scene.frames() / FPS as u64, hud.fuel);
        }
    }

    let hud = scene.hud();
    log::info!(
        "Finished: {:?} after {} frames, fuel left {}, {} sprites / {} colliders drawn",
        hud.outcome,
        scene.frames(),
        hud.fuel,
        renderer.sprites,
        renderer.colliders
    );
    Ok(hud.outcome)
}

fn main() {
    env_logger::init();
    log::info!("Perch (headless) starting...");

    match run() {
        Ok(outcome) => println!("{:?}", outcome),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
