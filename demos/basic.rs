//! The classic effect with default settings. Press `d` for the debug grid.
//!
//! Run with: `cargo run --example basic`

use flowtrails::{Effect, RunError};

fn main() -> Result<(), RunError> {
    env_logger::init();

    Effect::new().with_title("flowtrails - basic").run()
}
