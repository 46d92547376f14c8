//! The particle system: one flow field plus a fixed collection of particles.
//!
//! An external driver calls [`ParticleSystem::render`] once per display
//! refresh. Each render pass draws every particle from its pre-tick trail,
//! then updates it against the shared field, optionally overlays the grid
//! for debugging, and finally grows the cell size so the field coarsens over
//! the session. That slow coarsening is the effect's intended visual drift.
//!
//! The system is headless: it only talks to a [`Canvas`], so it can be
//! driven by the windowed runner, a test double or any custom backend.

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;

use crate::canvas::Canvas;
use crate::field::{FieldConfig, FlowField};
use crate::particle::Particle;
use crate::visuals::Palette;

const GRID_COLOR: Vec3 = Vec3::ONE;
const GRID_ALPHA: f32 = 0.15;

/// Owns the flow field and the particle collection, and carries the
/// per-frame render contract.
///
/// Built via [`Effect::build`](crate::Effect::build).
#[derive(Debug)]
pub struct ParticleSystem {
    width: f32,
    height: f32,
    field: FlowField,
    particles: Vec<Particle>,
    palette: Palette,
    config: FieldConfig,
    debug: bool,
    rng: StdRng,
}

impl ParticleSystem {
    pub(crate) fn new(
        width: u32,
        height: u32,
        particle_count: usize,
        palette: Palette,
        config: FieldConfig,
        rng: StdRng,
    ) -> Self {
        let width = width as f32;
        let height = height as f32;
        let mut system = Self {
            width,
            height,
            field: FlowField::generate(width, height, &config),
            particles: Vec::with_capacity(particle_count),
            palette,
            config,
            debug: false,
            rng,
        };
        system.spawn_particles(particle_count);
        log::info!(
            "initialized {}x{} effect: {} particles, {} field cells",
            width,
            height,
            system.particles.len(),
            system.field.cell_count()
        );
        system
    }

    fn spawn_particles(&mut self, count: usize) {
        self.particles.clear();
        for i in 0..count {
            let color = self.palette.color_for(i);
            self.particles
                .push(Particle::spawn(self.width, self.height, color, &mut self.rng));
        }
    }

    /// Draw and update every particle, then coarsen the field.
    ///
    /// Draw happens before update on purpose: the trail on screen is the
    /// pre-tick history. With the debug overlay enabled, grid lines at the
    /// current cell size are drawn on top of the particles.
    pub fn render<C: Canvas>(&mut self, canvas: &mut C) {
        for particle in &mut self.particles {
            particle.draw(canvas);
            particle.update(&self.field, &mut self.rng);
        }

        if self.debug {
            self.draw_grid(canvas);
        }

        self.field.grow(self.config.growth);
    }

    /// Replace field and particles for the new canvas dimensions.
    ///
    /// This is a full re-initialize, not a resample: every particle respawns
    /// inside the new bounds. The current (grown) cell size carries over so
    /// the session's visual drift is preserved.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;

        let config = FieldConfig {
            cell_size: self.field.cell_size(),
            ..self.config
        };
        self.field = FlowField::generate(self.width, self.height, &config);

        let count = self.particles.len();
        self.spawn_particles(count);
        log::info!("resized effect to {}x{}", width, height);
    }

    /// Flip the debug grid overlay. Returns the new state.
    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        self.debug
    }

    fn draw_grid<C: Canvas>(&self, canvas: &mut C) {
        let cell = self.field.cell_size();

        canvas.save();
        canvas.set_global_alpha(GRID_ALPHA);
        canvas.set_stroke_color(GRID_COLOR);

        let mut x = 0.0;
        while x < self.width {
            canvas.begin_path();
            canvas.move_to(Vec2::new(x, 0.0));
            canvas.line_to(Vec2::new(x, self.height));
            canvas.stroke();
            x += cell;
        }

        let mut y = 0.0;
        while y < self.height {
            canvas.begin_path();
            canvas.move_to(Vec2::new(0.0, y));
            canvas.line_to(Vec2::new(self.width, y));
            canvas.stroke();
            y += cell;
        }

        canvas.restore();
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The shared flow field.
    pub fn field(&self) -> &FlowField {
        &self.field
    }

    /// All particles, in draw order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Whether the debug grid overlay is enabled.
    pub fn debug(&self) -> bool {
        self.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    struct NullCanvas;

    impl Canvas for NullCanvas {
        fn save(&mut self) {}
        fn restore(&mut self) {}
        fn set_global_alpha(&mut self, _alpha: f32) {}
        fn set_stroke_color(&mut self, _color: Vec3) {}
        fn set_line_width(&mut self, _width: f32) {}
        fn begin_path(&mut self) {}
        fn move_to(&mut self, _point: Vec2) {}
        fn line_to(&mut self, _point: Vec2) {}
        fn stroke(&mut self) {}
    }

    fn test_system(width: u32, height: u32, count: usize) -> ParticleSystem {
        ParticleSystem::new(
            width,
            height,
            count,
            Palette::Spectrum,
            FieldConfig::new().with_cell_size(10.0),
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_initialize_spawns_exact_count_with_cyclic_colors() {
        let system = test_system(800, 600, 40);
        assert_eq!(system.particles().len(), 40);
        let colors = Palette::Spectrum.colors();
        for (i, particle) in system.particles().iter().enumerate() {
            assert_eq!(particle.color(), colors[i % colors.len()]);
        }
    }

    #[test]
    fn test_render_grows_cell_size_monotonically() {
        let mut system = test_system(800, 600, 10);
        let mut canvas = NullCanvas;
        let mut last = system.field().cell_size();
        for _ in 0..10 {
            system.render(&mut canvas);
            let now = system.field().cell_size();
            assert!(now >= last);
            last = now;
        }
        // Default growth of 0.3 over ten frames.
        assert!((last - 13.0).abs() < 0.01);
    }

    #[test]
    fn test_resize_respawns_all_particles_in_bounds() {
        let mut system = test_system(800, 600, 50);
        let mut canvas = NullCanvas;
        for _ in 0..5 {
            system.render(&mut canvas);
        }
        system.resize(200, 100);
        assert!((system.width() - 200.0).abs() < 0.001);
        for particle in system.particles() {
            let p = particle.position();
            assert!(p.x >= 0.0 && p.x < 200.0, "x out of bounds: {p:?}");
            assert!(p.y >= 0.0 && p.y < 100.0, "y out of bounds: {p:?}");
        }
    }

    #[test]
    fn test_resize_keeps_grown_cell_size() {
        let mut system = test_system(800, 600, 10);
        let mut canvas = NullCanvas;
        for _ in 0..10 {
            system.render(&mut canvas);
        }
        let grown = system.field().cell_size();
        system.resize(400, 300);
        assert!((system.field().cell_size() - grown).abs() < 0.001);
    }

    #[test]
    fn test_toggle_debug_flips_overlay() {
        let mut system = test_system(100, 100, 1);
        assert!(!system.debug());
        assert!(system.toggle_debug());
        assert!(system.debug());
        assert!(!system.toggle_debug());
    }

    #[test]
    fn test_debug_overlay_adds_grid_strokes() {
        #[derive(Default)]
        struct StrokeCounter(usize);
        impl Canvas for StrokeCounter {
            fn save(&mut self) {}
            fn restore(&mut self) {}
            fn set_global_alpha(&mut self, _alpha: f32) {}
            fn set_stroke_color(&mut self, _color: Vec3) {}
            fn set_line_width(&mut self, _width: f32) {}
            fn begin_path(&mut self) {}
            fn move_to(&mut self, _point: Vec2) {}
            fn line_to(&mut self, _point: Vec2) {}
            fn stroke(&mut self) {
                self.0 += 1;
            }
        }

        let mut plain = test_system(100, 100, 5);
        let mut counter = StrokeCounter::default();
        plain.render(&mut counter);
        let without_overlay = counter.0;

        let mut debug = test_system(100, 100, 5);
        debug.toggle_debug();
        let mut counter = StrokeCounter::default();
        debug.render(&mut counter);
        // 10 vertical + 10 horizontal lines at cell size 10 on a 100px canvas.
        assert_eq!(counter.0, without_overlay + 20);
    }
}
