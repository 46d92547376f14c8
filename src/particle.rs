//! A single self-propelled trail segment.
//!
//! Each particle carries a fixed speed, a fixed color and a bounded history
//! of past positions. Every tick it samples the shared [`FlowField`] at its
//! current grid cell, steers along the sampled angle, appends its position to
//! the history window and advances. When its lifetime runs out it respawns
//! at a fresh random point.
//!
//! Particles never read each other's state; within a frame the field is
//! read-only, so updates are order-independent.

use std::collections::VecDeque;
use std::ops::Range;

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::Rng;

use crate::canvas::Canvas;
use crate::field::FlowField;

/// Per-particle speed magnitude range, fixed at spawn.
const SPEED_RANGE: Range<f32> = 0.1..3.1;

/// Upper bound for the randomized trail length.
const MAX_TRAIL: usize = 200;

/// Lifetime ticks granted per unit of trail length.
const LIFETIME_PER_TRAIL: u32 = 4;

/// One particle of the effect: position, steering state and trail history.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    speed: f32,
    color: Vec3,
    history: VecDeque<Vec2>,
    max_trail: usize,
    lifetime: u32,
    opacity: f32,
}

impl Particle {
    /// Spawn a particle at a random point in `[0, width) x [0, height)`.
    ///
    /// Speed and trail length are randomized once here and survive respawns;
    /// only position, history, lifetime and opacity reset.
    pub(crate) fn spawn(width: f32, height: f32, color: Vec3, rng: &mut StdRng) -> Self {
        let position = random_point(width, height, rng);
        let max_trail = rng.gen_range(1..=MAX_TRAIL);
        Self {
            position,
            velocity: Vec2::ZERO,
            speed: rng.gen_range(SPEED_RANGE),
            color,
            history: VecDeque::from([position]),
            max_trail,
            lifetime: max_trail as u32 * LIFETIME_PER_TRAIL,
            opacity: 1.0,
        }
    }

    /// Advance one tick: steer along the field, extend the trail, move.
    ///
    /// When the lifetime countdown hits zero the particle respawns instead;
    /// the respawn consumes that tick.
    pub(crate) fn update(&mut self, field: &FlowField, rng: &mut StdRng) {
        if self.lifetime == 0 {
            self.reset(field.width(), field.height(), rng);
            return;
        }
        self.lifetime -= 1;

        let angle = field.sample(self.position.x, self.position.y);
        self.velocity = Vec2::new(angle.cos(), angle.sin()) * self.speed;

        self.history.push_back(self.position);
        if self.history.len() > self.max_trail {
            self.history.pop_front();
        }

        self.position += self.velocity;
    }

    /// Respawn in place: new random position, trail collapsed to that single
    /// point, lifetime and opacity restored.
    pub(crate) fn reset(&mut self, width: f32, height: f32, rng: &mut StdRng) {
        self.position = random_point(width, height, rng);
        self.velocity = Vec2::ZERO;
        self.history.clear();
        self.history.push_back(self.position);
        self.lifetime = self.max_trail as u32 * LIFETIME_PER_TRAIL;
        self.opacity = 1.0;
    }

    /// Stroke the trail as one polyline, oldest position first. No fill.
    pub(crate) fn draw<C: Canvas>(&self, canvas: &mut C) {
        let Some(&first) = self.history.front() else {
            return;
        };

        canvas.save();
        canvas.set_global_alpha(self.opacity);
        canvas.set_stroke_color(self.color);
        canvas.set_fill_color(self.color);

        canvas.begin_path();
        canvas.move_to(first);
        for &point in self.history.iter().skip(1) {
            canvas.line_to(point);
        }
        canvas.stroke();
        canvas.restore();
    }

    /// Current position in pixel space.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Velocity applied on the most recent tick.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Trail color, fixed at spawn.
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Past positions, oldest first. Never longer than the trail bound.
    pub fn history(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.history.iter().copied()
    }

    /// Number of positions currently in the trail.
    pub fn trail_len(&self) -> usize {
        self.history.len()
    }

    /// Maximum trail length, fixed at spawn.
    pub fn max_trail(&self) -> usize {
        self.max_trail
    }

    /// Remaining lifetime ticks before the next respawn.
    pub fn lifetime(&self) -> u32 {
        self.lifetime
    }

    /// Trail alpha. Restored to 1 on respawn.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

fn random_point(width: f32, height: f32, rng: &mut StdRng) -> Vec2 {
    Vec2::new(
        rng.gen_range(0.0..width).floor(),
        rng.gen_range(0.0..height).floor(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldConfig;
    use rand::SeedableRng;

    fn test_field(width: f32, height: f32) -> FlowField {
        FlowField::generate(width, height, &FieldConfig::new().with_cell_size(10.0))
    }

    #[test]
    fn test_spawn_in_bounds_with_single_history_entry() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let p = Particle::spawn(800.0, 600.0, Vec3::ONE, &mut rng);
            assert!(p.position().x >= 0.0 && p.position().x < 800.0);
            assert!(p.position().y >= 0.0 && p.position().y < 600.0);
            assert_eq!(p.trail_len(), 1);
            assert_eq!(p.history().next(), Some(p.position()));
            assert!((1..=MAX_TRAIL).contains(&p.max_trail()));
            assert_eq!(p.lifetime(), p.max_trail() as u32 * LIFETIME_PER_TRAIL);
        }
    }

    #[test]
    fn test_reset_collapses_history() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = test_field(800.0, 600.0);
        let mut p = Particle::spawn(800.0, 600.0, Vec3::ONE, &mut rng);
        for _ in 0..10 {
            p.update(&field, &mut rng);
        }
        p.reset(800.0, 600.0, &mut rng);
        assert_eq!(p.trail_len(), 1);
        assert_eq!(p.history().next(), Some(p.position()));
        assert_eq!(p.lifetime(), p.max_trail() as u32 * LIFETIME_PER_TRAIL);
        assert!((p.opacity() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_update_decrements_lifetime_and_moves() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = test_field(800.0, 600.0);
        let mut p = Particle::spawn(800.0, 600.0, Vec3::ONE, &mut rng);
        let before = p.lifetime();
        let start = p.position();
        p.update(&field, &mut rng);
        assert_eq!(p.lifetime(), before - 1);
        assert_eq!(p.position(), start + p.velocity());
    }

    #[test]
    fn test_velocity_follows_sampled_angle() {
        let mut rng = StdRng::seed_from_u64(3);
        // curve = 0 forces every cell angle to 0: velocity must be (speed, 0).
        let field = FlowField::generate(
            100.0,
            100.0,
            &FieldConfig::new().with_cell_size(10.0).with_curve(0.0),
        );
        let mut p = Particle::spawn(100.0, 100.0, Vec3::ONE, &mut rng);
        p.update(&field, &mut rng);
        assert!((p.velocity().x - p.speed).abs() < 0.001);
        assert!(p.velocity().y.abs() < 0.001);
    }

    #[test]
    fn test_trail_is_a_sliding_window() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = test_field(800.0, 600.0);
        let mut p = Particle::spawn(800.0, 600.0, Vec3::ONE, &mut rng);
        p.max_trail = 5;
        p.lifetime = 100;
        for _ in 0..50 {
            p.update(&field, &mut rng);
            assert!(p.trail_len() <= 5);
        }
        assert_eq!(p.trail_len(), 5);
        // Newest entry is the pre-move position of the last tick.
        let last = p.history().last().unwrap();
        assert_eq!(p.position(), last + p.velocity());
    }

    #[test]
    fn test_expired_particle_respawns_on_next_tick() {
        let mut rng = StdRng::seed_from_u64(5);
        let field = test_field(800.0, 600.0);
        let mut p = Particle::spawn(800.0, 600.0, Vec3::ONE, &mut rng);
        p.lifetime = 1;
        p.update(&field, &mut rng); // counts down to zero, still moves
        assert_eq!(p.lifetime(), 0);
        p.update(&field, &mut rng); // respawn tick
        assert_eq!(p.lifetime(), p.max_trail() as u32 * LIFETIME_PER_TRAIL);
        assert_eq!(p.trail_len(), 1);
    }

    #[test]
    fn test_draw_strokes_history_once() {
        #[derive(Default)]
        struct Recorder {
            strokes: usize,
            moves: usize,
            lines: usize,
            saves: i32,
            stroke_color: Option<Vec3>,
            fill_color: Option<Vec3>,
        }
        impl Canvas for Recorder {
            fn save(&mut self) {
                self.saves += 1;
            }
            fn restore(&mut self) {
                self.saves -= 1;
            }
            fn set_global_alpha(&mut self, _alpha: f32) {}
            fn set_stroke_color(&mut self, color: Vec3) {
                self.stroke_color = Some(color);
            }
            fn set_fill_color(&mut self, color: Vec3) {
                self.fill_color = Some(color);
            }
            fn set_line_width(&mut self, _width: f32) {}
            fn begin_path(&mut self) {}
            fn move_to(&mut self, _point: Vec2) {
                self.moves += 1;
            }
            fn line_to(&mut self, _point: Vec2) {
                self.lines += 1;
            }
            fn stroke(&mut self) {
                self.strokes += 1;
            }
        }

        let mut rng = StdRng::seed_from_u64(9);
        let field = test_field(800.0, 600.0);
        let mut p = Particle::spawn(800.0, 600.0, Vec3::ONE, &mut rng);
        p.max_trail = 10;
        p.lifetime = 100;
        for _ in 0..6 {
            p.update(&field, &mut rng);
        }

        let mut canvas = Recorder::default();
        p.draw(&mut canvas);
        assert_eq!(canvas.strokes, 1);
        assert_eq!(canvas.moves, 1);
        assert_eq!(canvas.lines, p.trail_len() - 1);
        assert_eq!(canvas.saves, 0, "save/restore must balance");
        // Stroke and fill colors are both set to the trail color.
        assert_eq!(canvas.stroke_color, Some(p.color()));
        assert_eq!(canvas.fill_color, Some(p.color()));
    }
}
