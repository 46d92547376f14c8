//! Driving the simulation without a window: implement `Canvas` yourself and
//! call `render` at whatever cadence you like.
//!
//! Run with: `cargo run --example headless`

use flowtrails::{Canvas, Effect, Vec2, Vec3};

/// Counts segments instead of drawing them.
#[derive(Default)]
struct SegmentCounter {
    segments: u64,
    strokes: u64,
}

impl Canvas for SegmentCounter {
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn set_global_alpha(&mut self, _alpha: f32) {}
    fn set_stroke_color(&mut self, _color: Vec3) {}
    fn set_line_width(&mut self, _width: f32) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _point: Vec2) {}
    fn line_to(&mut self, _point: Vec2) {
        self.segments += 1;
    }
    fn stroke(&mut self) {
        self.strokes += 1;
    }
}

fn main() {
    env_logger::init();

    let mut system = Effect::new()
        .with_size(1000, 500)
        .with_particle_count(500)
        .with_seed(42)
        .build();

    let mut canvas = SegmentCounter::default();
    for _ in 0..120 {
        system.render(&mut canvas);
    }

    let longest = system
        .particles()
        .iter()
        .map(|p| p.trail_len())
        .max()
        .unwrap_or(0);

    println!("120 frames over a {}x{} canvas", system.width(), system.height());
    println!("strokes: {}, line segments: {}", canvas.strokes, canvas.segments);
    println!(
        "field coarsened to cell size {:.1}, longest trail {} points",
        system.field().cell_size(),
        longest
    );
}
