use winit::window::Window;

use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(&self, window: &'static Window) -> Result<PixelsPresenter, pixels::Error> {
        PixelsPresenter::new(window)
    }
}

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
