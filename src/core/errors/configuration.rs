use std::{error::Error, fmt};

/// Parameters the engine refuses before touching any pixel array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    InvalidResolution { width: u32, height: u32 },
    ZeroMaxIterations,
    UnsupportedFormula { name: String },
    UnsupportedBackend { name: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution { width, height } => {
                write!(f, "resolution must be at least 1x1: {}x{}", width, height)
            }
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::UnsupportedFormula { name } => {
                write!(f, "unsupported fractal formula: {:?}", name)
            }
            Self::UnsupportedBackend { name } => {
                write!(f, "unsupported iteration backend: {:?}", name)
            }
        }
    }
}

impl Error for ConfigurationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_resolution() {
        let err = ConfigurationError::InvalidResolution {
            width: 0,
            height: 600,
        };

        assert_eq!(format!("{}", err), "resolution must be at least 1x1: 0x600");
    }

    #[test]
    fn test_display_unsupported_formula() {
        let err = ConfigurationError::UnsupportedFormula {
            name: "Newton".to_string(),
        };

        assert_eq!(format!("{}", err), "unsupported fractal formula: \"Newton\"");
    }
}
