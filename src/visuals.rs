//! Color palettes for particle trails.
//!
//! Each particle is assigned one fixed color at spawn time, cycled from the
//! active palette. Colors are linear RGB `Vec3` values in `[0, 1]`.
//!
//! # Usage
//!
//! ```ignore
//! Effect::new()
//!     .with_palette(Palette::Ocean)
//!     .run()?;
//! ```

use glam::Vec3;

/// Build a color from a `0xRRGGBB` literal.
pub const fn hex(rgb: u32) -> Vec3 {
    Vec3::new(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    )
}

/// Pre-defined trail color palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Full spectrum sweep, red through violet and back to red (default).
    #[default]
    Spectrum,

    /// Black through red and orange to near-white.
    Fire,

    /// Deep blues and teals.
    Ocean,

    /// Vibrant pinks, cyans and purples.
    Neon,

    /// Dark gray to white.
    Grayscale,
}

/// The 17-entry spectrum ramp used by [`Palette::Spectrum`]. Red appears at
/// both ends so cyclic assignment wraps without a seam.
const SPECTRUM: [Vec3; 17] = [
    hex(0xff0000),
    hex(0xff5500),
    hex(0xff8500),
    hex(0xffce00),
    hex(0xffff00),
    hex(0xafff00),
    hex(0x70ff00),
    hex(0x36ff00),
    hex(0x00ff00),
    hex(0x00b54a),
    hex(0x007a85),
    hex(0x003bca),
    hex(0x0000ff),
    hex(0x7a00ff),
    hex(0xff00ff),
    hex(0xff008f),
    hex(0xff0000),
];

const FIRE: [Vec3; 6] = [
    hex(0x1a0000),
    hex(0x660000),
    hex(0xcc1100),
    hex(0xff6600),
    hex(0xffcc33),
    hex(0xfff2cc),
];

const OCEAN: [Vec3; 6] = [
    hex(0x001433),
    hex(0x003166),
    hex(0x005599),
    hex(0x0088aa),
    hex(0x33bbcc),
    hex(0x99e6e6),
];

const NEON: [Vec3; 5] = [
    hex(0xff00ff),
    hex(0x00ffff),
    hex(0x8800ff),
    hex(0xff0088),
    hex(0x00ff88),
];

const GRAYSCALE: [Vec3; 5] = [
    hex(0x222222),
    hex(0x555555),
    hex(0x888888),
    hex(0xbbbbbb),
    hex(0xffffff),
];

impl Palette {
    /// Get the color table for this palette.
    pub fn colors(&self) -> &'static [Vec3] {
        match self {
            Palette::Spectrum => &SPECTRUM,
            Palette::Fire => &FIRE,
            Palette::Ocean => &OCEAN,
            Palette::Neon => &NEON,
            Palette::Grayscale => &GRAYSCALE,
        }
    }

    /// Color for the particle at `index`, cycling through the table.
    pub fn color_for(&self, index: usize) -> Vec3 {
        let colors = self.colors();
        colors[index % colors.len()]
    }
}
