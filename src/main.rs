//! Bloom Dash entry point
//!
//! The core has no window of its own. Natively this runs a headless demo:
//! the autopilot plays for a while, every frame goes to a logging renderer,
//! and the final run summary is printed as JSON.
//!
//! Usage: `bloom-dash [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
use bloom_dash::renderer::{FrameData, Renderer};

/// Simulated host frame time (~60 fps)
#[cfg(not(target_arch = "wasm32"))]
const FRAME_MS: u32 = 16;
/// Demo length in simulated seconds
#[cfg(not(target_arch = "wasm32"))]
const DEMO_SECONDS: u32 = 120;

/// Renderer that only logs what it would draw
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
struct LogRenderer {
    frames: u64,
}

#[cfg(not(target_arch = "wasm32"))]
impl Renderer for LogRenderer {
    fn backend(&self) -> &'static str {
        "log"
    }

    fn draw(&mut self, frame: &FrameData) {
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::debug!(
                "Frame {}: {} sprites, score {}, {:?}, sky {:?}",
                self.frames,
                frame.instances.len(),
                frame.score,
                frame.season,
                frame.palette.sky
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use bloom_dash::renderer::AssetManifest;
    use bloom_dash::sim::GameEvent;
    use bloom_dash::{Game, InputEvent, Settings};

    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let assets = AssetManifest::default();
    for key in assets.missing() {
        log::warn!("No image for {}, it will not be drawn", key.as_str());
    }

    let mut game = Game::new(settings)?;
    game.set_autopilot(true);
    let mut renderer = LogRenderer::default();
    log::info!(
        "Bloom Dash (headless, {} renderer) starting...",
        renderer.backend()
    );

    let mut elapsed_ms = 0;
    while elapsed_ms < DEMO_SECONDS * 1000 {
        for event in game.advance(FRAME_MS) {
            if let GameEvent::GameOver { score, .. } = event {
                log::info!("Run ended with score {score}, restarting");
                game.push_input(InputEvent::Restart);
            }
        }
        renderer.draw(&game.frame(&assets));
        elapsed_ms += FRAME_MS;
    }

    println!("{}", serde_json::to_string_pretty(&game.summary())?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives `Game` directly; nothing to do here
}
