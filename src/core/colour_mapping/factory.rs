use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::map::PaletteColourMap;
use crate::core::colour_mapping::maps::gradient::PaletteGradient;

#[must_use]
pub fn colour_map_factory(kind: ColourMapKinds) -> Box<dyn PaletteColourMap> {
    Box::new(PaletteGradient::new(kind))
}
