#[macro_use]
mod utils;
mod canvas;
mod color;
mod config;
mod error;
mod field;
mod frame_loop;
mod particle;
mod simulator;
mod surface;
mod viewport;

pub use canvas::CanvasSurface;
pub use color::Color;
pub use config::{FieldConfig, ResizePolicy};
pub use error::SurfaceError;
pub use field::ParticleField;
pub use frame_loop::FrameLoop;
pub use particle::Particle;
pub use simulator::Simulator;
pub use surface::{PixelSurface, Surface};
pub use viewport::{viewport_size, ResizeListener};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;
use utils::Timer;
use wasm_bindgen::prelude::*;

// Use `wee_alloc` as the global allocator when the feature is enabled.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Gold dust drifting behind the page content.
#[wasm_bindgen]
pub struct ParticleEffect {
    simulator: Rc<RefCell<Simulator<CanvasSurface>>>,
    frame_loop: FrameLoop,
    _resize: ResizeListener,
}

#[wasm_bindgen]
impl ParticleEffect {
    pub fn start() -> Result<ParticleEffect, JsValue> {
        Ok(ParticleEffect::launch(&mut StdRng::from_entropy())?)
    }

    pub fn start_with_seed(seed: u64) -> Result<ParticleEffect, JsValue> {
        Ok(ParticleEffect::launch(&mut StdRng::seed_from_u64(seed))?)
    }

    pub fn stop(&self) {
        self.frame_loop.stop();
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.simulator.borrow().field().len()
    }

    /// Stops the animation and removes the canvas from the page.
    pub fn dispose(self) {
        self.frame_loop.stop();
        self.simulator.borrow().surface().detach();
    }
}

impl ParticleEffect {
    fn launch<R: Rng + ?Sized>(rng: &mut R) -> Result<ParticleEffect, SurfaceError> {
        let _timer = Timer::new("ParticleEffect::launch");
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let document = window.document().ok_or(SurfaceError::NoDocument)?;
        let (width, height) = viewport_size(&window)?;

        let surface = CanvasSurface::create_overlay(&document, width, height)?;
        let mut simulator = Simulator::new(surface, FieldConfig::default());
        simulator.initialize(width, height, rng);
        let simulator = Rc::new(RefCell::new(simulator));

        let resize_target = Rc::clone(&simulator);
        let resize = ResizeListener::bind(&window, move |width, height| {
            resize_target.borrow_mut().on_resize(width, height)
        });
        let frame_target = Rc::clone(&simulator);
        let frame_loop = resize.and_then(|resize| {
            FrameLoop::start(&window, move || frame_target.borrow_mut().tick())
                .map(|frame_loop| (frame_loop, resize))
        });
        let (frame_loop, resize) = match frame_loop {
            Ok(bound) => bound,
            Err(err) => {
                simulator.borrow().surface().detach();
                return Err(err);
            }
        };

        log!(
            "particle effect running: {} particles over {}x{}",
            simulator.borrow().field().len(),
            width,
            height
        );

        Ok(ParticleEffect {
            simulator,
            frame_loop,
            _resize: resize,
        })
    }
}

/// Best-effort start for the page: if the canvas or the frame clock is
/// unavailable the effect is skipped and a warning is logged.
#[wasm_bindgen]
pub fn start_background() -> Option<ParticleEffect> {
    match ParticleEffect::launch(&mut StdRng::from_entropy()) {
        Ok(effect) => Some(effect),
        Err(err) => {
            warn!("particle effect disabled: {}", err);
            None
        }
    }
}
