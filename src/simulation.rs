//! Effect builder and runner.
//!
//! Use method chaining to configure, then either [`run`](Effect::run) a
//! windowed viewer or [`build`](Effect::build) a headless
//! [`ParticleSystem`] you drive yourself.

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::error::RunError;
use crate::field::FieldConfig;
use crate::system::ParticleSystem;
use crate::visuals::Palette;
use crate::window::App;

/// A flow-field effect builder.
///
/// # Example
///
/// ```ignore
/// use flowtrails::{Effect, FieldConfig, Palette};
///
/// Effect::new()
///     .with_size(1280, 720)
///     .with_particle_count(3000)
///     .with_palette(Palette::Ocean)
///     .with_field(FieldConfig::new().with_zoom(0.02))
///     .run()?;
/// ```
pub struct Effect {
    width: u32,
    height: u32,
    particle_count: usize,
    palette: Palette,
    field: FieldConfig,
    seed: Option<u64>,
    title: String,
}

impl Effect {
    /// Create an effect with default settings: 1000x500 canvas, 1500
    /// particles, the [`Palette::Spectrum`] colors and the classic field
    /// parameters.
    pub fn new() -> Self {
        Self {
            width: 1000,
            height: 500,
            particle_count: 1500,
            palette: Palette::default(),
            field: FieldConfig::new(),
            seed: None,
            title: "flowtrails".to_string(),
        }
    }

    /// Set the canvas dimensions in pixels. Both must be non-zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "canvas dimensions must be non-zero");
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the trail color palette. Colors are assigned to particles
    /// cyclically.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the flow field parameters.
    pub fn with_field(mut self, field: FieldConfig) -> Self {
        self.field = field;
        self
    }

    /// Seed the spawn randomization for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the window title used by [`run`](Effect::run).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Build the headless particle system without opening a window.
    ///
    /// Call [`ParticleSystem::render`] yourself with any
    /// [`Canvas`](crate::Canvas) implementation.
    pub fn build(&self) -> ParticleSystem {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ParticleSystem::new(
            self.width,
            self.height,
            self.particle_count,
            self.palette,
            self.field,
            rng,
        )
    }

    /// Open a window and run the effect until it is closed.
    ///
    /// Blocks on the event loop; one frame is rendered per display refresh.
    pub fn run(self) -> Result<(), RunError> {
        let system = self.build();

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(system, self.title, self.width, self.height);
        event_loop.run_app(&mut app)?;

        match app.take_error() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for Effect {
    fn default() -> Self {
        Self::new()
    }
}
