//! The flow field: a 2D grid of steering angles covering the canvas.
//!
//! Each cell holds one angle in radians, computed from a cheap trigonometric
//! function of the cell origin. Particles sample the cell under their current
//! position each tick and steer along the sampled angle, which gives the
//! whole swarm coherent, swirling motion.
//!
//! Angles are quantized to one decimal place on purpose: the quantization
//! produces visible bands of identical direction in the field, which is part
//! of the look.
//!
//! # Example
//!
//! ```ignore
//! let config = FieldConfig::new().with_zoom(0.009).with_curve(2.0);
//! let field = FlowField::generate(1000.0, 500.0, &config);
//! let angle = field.sample(250.0, 125.0);
//! ```

/// Configuration for flow field generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Grid cell size in pixels. Grows over the session via
    /// [`FlowField::grow`], coarsening the field.
    pub cell_size: f32,

    /// Spatial frequency of the angle function. Smaller values stretch the
    /// pattern out; larger values tighten the swirls.
    pub zoom: f32,

    /// Amplitude multiplier applied to the raw angle, in radians.
    pub curve: f32,

    /// Cell size increment applied after every rendered frame. The field
    /// coarsens forever by design; there is no upper bound.
    pub growth: f32,
}

impl FieldConfig {
    /// Create a field configuration with the classic defaults:
    /// `cell_size = 1.0`, `zoom = 0.009`, `curve = 2.0`, `growth = 0.3`.
    pub fn new() -> Self {
        Self {
            cell_size: 1.0,
            zoom: 0.009,
            curve: 2.0,
            growth: 0.3,
        }
    }

    /// Set the initial grid cell size in pixels. Must be positive.
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        assert!(cell_size > 0.0, "cell size must be positive");
        self.cell_size = cell_size;
        self
    }

    /// Set the spatial frequency of the angle function.
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the angle amplitude in radians.
    pub fn with_curve(mut self, curve: f32) -> Self {
        self.curve = curve;
        self
    }

    /// Set the per-frame cell size increment. Must not be negative.
    pub fn with_growth(mut self, growth: f32) -> Self {
        assert!(growth >= 0.0, "growth must not be negative");
        self.growth = growth;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Steering angle at pixel position `(x, y)`, in radians.
///
/// Pure and deterministic: `(cos(x * zoom) + sin(y * zoom)) * curve`,
/// rounded to one decimal place. The rounding is intentional; it bands the
/// field into regions of identical direction.
pub fn steering_angle(x: f32, y: f32, zoom: f32, curve: f32) -> f32 {
    let raw = ((x * zoom).cos() + (y * zoom).sin()) * curve;
    (raw * 10.0).round() / 10.0
}

/// A generated grid of steering angles.
///
/// The grid is built once for a given canvas size and regenerated wholesale
/// on resize; it is never mutated in place. Only the cell size changes
/// between regenerations, via [`grow`](FlowField::grow), which re-maps
/// positions onto the existing cells without reallocating.
#[derive(Debug, Clone)]
pub struct FlowField {
    width: f32,
    height: f32,
    cell_size: f32,
    cols: usize,
    rows: usize,
    cells: Vec<f32>,
}

impl FlowField {
    /// Generate the angle grid covering `width` x `height` pixels.
    ///
    /// The grid has `floor(width / cell_size)` columns (at least 1) and
    /// `floor(height / cell_size)` rows, with one extra row of cells so the
    /// bottom edge is covered: `cells.len() == cols * (rows + 1)`.
    pub fn generate(width: f32, height: f32, config: &FieldConfig) -> Self {
        let cols = ((width / config.cell_size).floor() as usize).max(1);
        let rows = (height / config.cell_size).floor() as usize;

        let mut cells = Vec::with_capacity(cols * (rows + 1));
        for col in 0..cols {
            for row in 0..=rows {
                let x = col as f32 * config.cell_size;
                let y = row as f32 * config.cell_size;
                cells.push(steering_angle(x, y, config.zoom, config.curve));
            }
        }

        Self {
            width,
            height,
            cell_size: config.cell_size,
            cols,
            rows,
            cells,
        }
    }

    /// Sample the steering angle under pixel position `(px, py)`.
    ///
    /// Out-of-range positions are clamped to the nearest cell: particles can
    /// legitimately drift off the canvas between resizes, and a clamped
    /// angle beats a panic for a purely cosmetic system.
    pub fn sample(&self, px: f32, py: f32) -> f32 {
        let col = ((px / self.cell_size).floor() as isize).clamp(0, self.cols as isize - 1) as usize;
        let row = ((py / self.cell_size).floor() as isize).clamp(0, self.rows as isize) as usize;
        self.cells[col * (self.rows + 1) + row]
    }

    /// Increase the cell size by `amount`. Subsequent samples map positions
    /// onto coarser cells; the cell data itself is untouched.
    pub fn grow(&mut self, amount: f32) {
        self.cell_size += amount;
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Current cell size in pixels.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of grid columns fixed at generation time.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of grid rows fixed at generation time.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of generated cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_config_defaults() {
        let config = FieldConfig::new();
        assert!((config.cell_size - 1.0).abs() < 0.001);
        assert!((config.zoom - 0.009).abs() < 0.001);
        assert!((config.curve - 2.0).abs() < 0.001);
        assert!((config.growth - 0.3).abs() < 0.001);
    }

    #[test]
    fn test_field_config_builder() {
        let config = FieldConfig::new()
            .with_cell_size(10.0)
            .with_zoom(0.02)
            .with_curve(3.0)
            .with_growth(0.1);
        assert!((config.cell_size - 10.0).abs() < 0.001);
        assert!((config.zoom - 0.02).abs() < 0.001);
        assert!((config.curve - 3.0).abs() < 0.001);
        assert!((config.growth - 0.1).abs() < 0.001);
    }

    #[test]
    #[should_panic(expected = "cell size must be positive")]
    fn test_field_config_rejects_zero_cell_size() {
        FieldConfig::new().with_cell_size(0.0);
    }

    #[test]
    fn test_steering_angle_at_origin() {
        // (cos(0) + sin(0)) * 2 = 2.0
        let angle = steering_angle(0.0, 0.0, 0.009, 2.0);
        assert!((angle - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_steering_angle_is_deterministic() {
        let a = steering_angle(123.0, 456.0, 0.009, 2.0);
        let b = steering_angle(123.0, 456.0, 0.009, 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_steering_angle_is_quantized() {
        // One decimal of precision: scaling by 10 yields an integer.
        for &(x, y) in &[(17.0, 3.0), (250.0, 125.0), (999.0, 499.0)] {
            let angle = steering_angle(x, y, 0.009, 2.0);
            assert!((angle * 10.0 - (angle * 10.0).round()).abs() < 0.0001);
        }
    }

    #[test]
    fn test_generate_cell_count() {
        let config = FieldConfig::new().with_cell_size(10.0);
        let field = FlowField::generate(100.0, 50.0, &config);
        assert_eq!(field.cols(), 10);
        assert_eq!(field.rows(), 5);
        assert_eq!(field.cell_count(), field.cols() * (field.rows() + 1));
    }

    #[test]
    fn test_sample_matches_direct_formula() {
        // Generation and direct query agree for every in-bounds cell.
        let config = FieldConfig::new().with_cell_size(10.0);
        let field = FlowField::generate(100.0, 50.0, &config);
        for col in 0..field.cols() {
            for row in 0..=field.rows() {
                let px = col as f32 * 10.0 + 0.5;
                let py = row as f32 * 10.0 + 0.5;
                let expected =
                    steering_angle(col as f32 * 10.0, row as f32 * 10.0, config.zoom, config.curve);
                assert_eq!(field.sample(px, py), expected, "cell ({col}, {row})");
            }
        }
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        let config = FieldConfig::new().with_cell_size(10.0);
        let field = FlowField::generate(100.0, 50.0, &config);
        assert_eq!(field.sample(-25.0, -25.0), field.sample(0.0, 0.0));
        assert_eq!(field.sample(1e6, 1e6), field.sample(99.0, 59.0));
    }

    #[test]
    fn test_tiny_canvas_still_generates() {
        // Canvas narrower than one cell: column count is clamped to 1.
        let config = FieldConfig::new().with_cell_size(64.0);
        let field = FlowField::generate(10.0, 10.0, &config);
        assert_eq!(field.cols(), 1);
        assert_eq!(field.rows(), 0);
        assert_eq!(field.cell_count(), 1);
        // Sampling anywhere lands in the single cell.
        assert_eq!(field.sample(5.0, 5.0), field.sample(0.0, 0.0));
    }

    #[test]
    fn test_grow_coarsens_without_reallocating() {
        let config = FieldConfig::new().with_cell_size(10.0);
        let mut field = FlowField::generate(100.0, 50.0, &config);
        let cells_before = field.cell_count();
        field.grow(0.3);
        assert!((field.cell_size() - 10.3).abs() < 0.001);
        assert_eq!(field.cell_count(), cells_before);
        assert_eq!(field.cols(), 10);
    }
}
