use std::path::Path;

use log::info;

use crate::controllers::interactive::ViewController;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::ui_options::UiOptions;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::engine::engine_config::EngineConfig;

/// Renders a single frame and hands it to a file presenter.
pub struct StillRenderController<P: FilePresenterPort> {
    presenter: P,
    frame: Option<FrameData>,
}

impl<P: FilePresenterPort> StillRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    pub fn generate(
        &mut self,
        config: EngineConfig,
        options: UiOptions,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!(
            "rendering {} at {}x{}, {} iterations, {} backend",
            options.fractal_kind, config.width, config.height, config.max_iter, config.backend
        );

        let view = ViewController::new(config, options)?;
        let frame = view.render_frame()?;

        info!(
            "{} of {} pixels never escaped, colorized in {:?}",
            frame.active_pixels,
            frame.pixel_buffer.resolution().size(),
            frame.render_duration
        );

        self.frame = Some(frame);
        Ok(())
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameData> {
        self.frame.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = &self.frame {
            self.presenter.present(&frame.pixel_buffer, filepath.as_ref())?;
            info!("saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
