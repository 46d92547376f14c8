use flowtrails::{Effect, RunError};

fn main() -> Result<(), RunError> {
    env_logger::init();
    Effect::new().run()
}
