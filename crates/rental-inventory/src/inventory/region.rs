use serde::{Deserialize, Serialize};
use std::fmt;

/// Market grouping that drives every region-specific rule in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Brazil,
    Usa,
    Canada,
    Europe,
    Latam,
    Asia,
    MiddleEast,
    Oceania,
    Africa,
    Global,
}

impl Region {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Brazil,
            Self::Usa,
            Self::Canada,
            Self::Europe,
            Self::Latam,
            Self::Asia,
            Self::MiddleEast,
            Self::Oceania,
            Self::Africa,
            Self::Global,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brazil => "brazil",
            Self::Usa => "usa",
            Self::Canada => "canada",
            Self::Europe => "europe",
            Self::Latam => "latam",
            Self::Asia => "asia",
            Self::MiddleEast => "middle_east",
            Self::Oceania => "oceania",
            Self::Africa => "africa",
            Self::Global => "global",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Brazil => "Brazil",
            Self::Usa => "United States",
            Self::Canada => "Canada",
            Self::Europe => "Europe",
            Self::Latam => "Latin America & Caribbean",
            Self::Asia => "Asia",
            Self::MiddleEast => "Middle East",
            Self::Oceania => "Oceania",
            Self::Africa => "Africa",
            Self::Global => "International",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
