use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// One discrete user input, independent of the windowing toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    WheelZoom(ZoomDirection),
    ContinuousZoom,
    Pan { dx: i32, dy: i32 },
    SetIterations(u32),
    SetFixedIterations(bool),
    SelectFormula(FractalKinds),
    SetCustomConstant(Complex),
    CycleColourMap,
    SetColourMap(ColourMapKinds),
    SetGamma(f64),
    Reset,
}
