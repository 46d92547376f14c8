//! Denser, slower variant with the ocean palette and a coarser field.
//!
//! Run with: `cargo run --example ocean`

use flowtrails::{Effect, FieldConfig, Palette, RunError};

fn main() -> Result<(), RunError> {
    env_logger::init();

    Effect::new()
        .with_title("flowtrails - ocean")
        .with_size(1280, 720)
        .with_particle_count(3000)
        .with_palette(Palette::Ocean)
        .with_field(
            FieldConfig::new()
                .with_cell_size(8.0)
                .with_zoom(0.02)
                .with_curve(3.0)
                .with_growth(0.1),
        )
        .run()
}
