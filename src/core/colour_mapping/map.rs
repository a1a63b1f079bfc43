use crate::core::actions::colorize::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;
use std::error::Error;

/// A named palette taking normalised values in `[0, 1]`.
pub trait PaletteColourMap: ColourMap<f64> + Send + Sync {
    fn kind(&self) -> ColourMapKinds;
}

impl ColourMap<f64> for Box<dyn PaletteColourMap> {
    fn map(&self, value: f64) -> Result<Colour, Box<dyn Error>> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
