//! The abstract 2D drawing surface the effect renders onto.
//!
//! The simulation never talks to a concrete backend. Everything it draws goes
//! through [`Canvas`], a small path/stroke contract modeled on immediate-mode
//! 2D canvas APIs: push state, set alpha and colors, build a polyline path,
//! stroke it, pop state.
//!
//! The windowed runner ships a GPU-backed implementation; tests and headless
//! callers can implement the trait in a few lines (a recorder, a rasterizer,
//! an SVG writer).
//!
//! # Example
//!
//! ```ignore
//! struct StrokeCounter(usize);
//!
//! impl Canvas for StrokeCounter {
//!     fn stroke(&mut self) { self.0 += 1; }
//!     // remaining methods are no-ops
//! }
//! ```

use glam::{Vec2, Vec3};

/// A 2D drawing surface supporting stroked polyline paths.
///
/// State (alpha, stroke and fill colors, line width) is mutable and scoped
/// with [`save`](Canvas::save)/[`restore`](Canvas::restore), mirroring the
/// usual 2D canvas state stack. A path is built with
/// [`begin_path`](Canvas::begin_path), [`move_to`](Canvas::move_to) and
/// [`line_to`](Canvas::line_to), then drawn with [`stroke`](Canvas::stroke).
///
/// Implementations may ignore state they cannot honor (for example a
/// hardware line renderer that only draws 1px lines may ignore the line
/// width), but must keep the save/restore pairing consistent.
pub trait Canvas {
    /// Push the current drawing state onto the state stack.
    fn save(&mut self);

    /// Pop the most recently saved drawing state. Unbalanced restores are
    /// ignored.
    fn restore(&mut self);

    /// Set the global alpha applied to subsequent strokes, in `[0, 1]`.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Set the stroke color as linear RGB in `[0, 1]` per channel.
    fn set_stroke_color(&mut self, color: Vec3);

    /// Set the fill color as linear RGB in `[0, 1]` per channel.
    ///
    /// The effect itself strokes only, so implementations that never fill
    /// can rely on the default no-op.
    fn set_fill_color(&mut self, _color: Vec3) {}

    /// Set the stroke width in pixels.
    fn set_line_width(&mut self, width: f32);

    /// Discard any current path and start a new one.
    fn begin_path(&mut self);

    /// Start a new subpath at `point`.
    fn move_to(&mut self, point: Vec2);

    /// Extend the current subpath with a line segment to `point`.
    fn line_to(&mut self, point: Vec2);

    /// Stroke the current path with the current color, alpha and width.
    /// The path is kept until the next [`begin_path`](Canvas::begin_path).
    fn stroke(&mut self);
}
