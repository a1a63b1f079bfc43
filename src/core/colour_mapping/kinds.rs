use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKinds {
    Viridis,
    #[default]
    Plasma,
    Magma,
    Cividis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourMap {
    pub name: String,
}

impl std::fmt::Display for UnknownColourMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown colour map: {:?}", self.name)
    }
}

impl std::error::Error for UnknownColourMap {}

impl ColourMapKinds {
    /// Cycling order, starting from the default.
    pub const ALL: &'static [Self] = &[Self::Plasma, Self::Magma, Self::Cividis, Self::Viridis];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Magma => "magma",
            Self::Cividis => "cividis",
        }
    }

    /// The palette after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let position = Self::ALL
            .iter()
            .position(|&kind| kind == self)
            .unwrap_or(0);

        Self::ALL[(position + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourMapKinds {
    type Err = UnknownColourMap;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted = name.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name() == wanted)
            .ok_or_else(|| UnknownColourMap {
                name: name.to_string(),
            })
    }
}
