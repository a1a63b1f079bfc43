use winit::window::Window;
use crate::input::gui::ports::presenter::GuiPresenterPort;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window) -> Result<T, pixels::Error>;
}
