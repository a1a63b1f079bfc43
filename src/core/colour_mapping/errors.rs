use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum ColourMapError {
    ValueOutOfRange { value: f64 },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOutOfRange { value } => {
                write!(f, "colour map input {} is outside [0, 1]", value)
            }
        }
    }
}

impl Error for ColourMapError {}
