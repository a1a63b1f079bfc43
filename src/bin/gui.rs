use std::env;

use escape_time_explorer::{
    BackendKinds, EngineConfig, PixelsPresenterFactory, RunGuiCommand, UiOptions,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let backend = match env::var("FRACTAL_BACKEND") {
        Ok(name) => name.parse::<BackendKinds>()?,
        Err(_) => BackendKinds::default(),
    };
    let config = EngineConfig {
        backend,
        ..EngineConfig::default()
    };

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config, UiOptions::default());
    command.execute()
}
