use std::env;

use escape_time_explorer::{
    BackendKinds, ColourMapKinds, EngineConfig, FractalKinds, PpmFilePresenter,
    StillRenderController, UiOptions,
};
use log::info;

const DEFAULT_OUTPUT: &str = "output/fractal.ppm";
const BACKEND_VAR: &str = "FRACTAL_BACKEND";
const PALETTE_VAR: &str = "FRACTAL_PALETTE";

/// Usage: `escape_time_explorer [formula] [output.ppm]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let fractal_kind = match args.next() {
        Some(name) => name.parse::<FractalKinds>()?,
        None => FractalKinds::default(),
    };
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let backend = match env::var(BACKEND_VAR) {
        Ok(name) => name.parse::<BackendKinds>()?,
        Err(_) => BackendKinds::default(),
    };
    let colour_map = match env::var(PALETTE_VAR) {
        Ok(name) => name.parse::<ColourMapKinds>()?,
        Err(_) => ColourMapKinds::default(),
    };

    let config = EngineConfig {
        backend,
        ..EngineConfig::default()
    };
    let options = UiOptions {
        fractal_kind,
        colour_map,
        ..UiOptions::default()
    };

    info!("writing {} to {}", fractal_kind, output);

    let mut controller = StillRenderController::new(PpmFilePresenter::new());
    controller.generate(config, options)?;
    controller.write(&output)?;

    Ok(())
}
