use std::str::FromStr;

use crate::core::actions::iterate::iterate_parallel_rayon::RayonBackend;
use crate::core::actions::iterate::iterate_serial::SerialBackend;
use crate::core::actions::iterate::ports::iteration_backend::IterationBackend;
use crate::core::errors::configuration::ConfigurationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKinds {
    Serial,
    #[default]
    Rayon,
}

impl BackendKinds {
    pub const ALL: &'static [Self] = &[Self::Rayon, Self::Serial];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Rayon => "rayon",
        }
    }
}

impl std::fmt::Display for BackendKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for BackendKinds {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "serial" | "cpu" => Ok(Self::Serial),
            "rayon" | "parallel" => Ok(Self::Rayon),
            _ => Err(ConfigurationError::UnsupportedBackend {
                name: name.to_string(),
            }),
        }
    }
}

#[must_use]
pub fn iteration_backend_factory(kind: BackendKinds) -> Box<dyn IterationBackend> {
    match kind {
        BackendKinds::Serial => Box::new(SerialBackend),
        BackendKinds::Rayon => Box::new(RayonBackend),
    }
}
