use crate::core::actions::colorize::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::map::PaletteColourMap;
use crate::core::data::colour::Colour;
use std::error::Error;

type Stops = [(u8, u8, u8); 5];

// Samples of the perceptually uniform palettes at 0, 0.25, 0.5, 0.75 and 1.
const VIRIDIS: Stops = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

const PLASMA: Stops = [
    (13, 8, 135),
    (126, 3, 168),
    (204, 71, 120),
    (248, 149, 64),
    (240, 249, 33),
];

const MAGMA: Stops = [
    (0, 0, 4),
    (81, 18, 124),
    (183, 55, 121),
    (252, 137, 97),
    (252, 253, 191),
];

const CIVIDIS: Stops = [
    (0, 32, 77),
    (65, 77, 108),
    (124, 123, 120),
    (187, 175, 113),
    (255, 234, 70),
];

const fn stops_for(kind: ColourMapKinds) -> &'static Stops {
    match kind {
        ColourMapKinds::Viridis => &VIRIDIS,
        ColourMapKinds::Plasma => &PLASMA,
        ColourMapKinds::Magma => &MAGMA,
        ColourMapKinds::Cividis => &CIVIDIS,
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);

    (from + (to - from) * t) as u8
}

/// Piecewise-linear palette through five evenly spaced stops.
#[derive(Debug, Clone, Copy)]
pub struct PaletteGradient {
    kind: ColourMapKinds,
    stops: &'static Stops,
}

impl PaletteGradient {
    #[must_use]
    pub const fn new(kind: ColourMapKinds) -> Self {
        Self {
            kind,
            stops: stops_for(kind),
        }
    }
}

impl ColourMap<f64> for PaletteGradient {
    fn map(&self, value: f64) -> Result<Colour, Box<dyn Error>> {
        if !(0.0..=1.0).contains(&value) {
            return Err(Box::new(ColourMapError::ValueOutOfRange { value }));
        }

        let segments = self.stops.len() - 1;
        let scaled = value * segments as f64;
        let segment = (scaled as usize).min(segments - 1);
        let local_t = scaled - segment as f64;

        let (r0, g0, b0) = self.stops[segment];
        let (r1, g1, b1) = self.stops[segment + 1];

        Ok(Colour {
            r: lerp_channel(r0, r1, local_t),
            g: lerp_channel(g0, g1, local_t),
            b: lerp_channel(b0, b1, local_t),
        })
    }

    fn display_name(&self) -> &str {
        self.kind.display_name()
    }
}

impl PaletteColourMap for PaletteGradient {
    fn kind(&self) -> ColourMapKinds {
        self.kind
    }
}
