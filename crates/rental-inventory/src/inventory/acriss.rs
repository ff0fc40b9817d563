//! ACRISS vehicle classification codes.
//!
//! Every vocabulary value used by the generator carries its ACRISS letter through an
//! exhaustive `match`, so adding a variant without a letter fails to compile instead of
//! producing a malformed code at runtime.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const CATEGORY_LETTERS: &str = "MECISFPLXUWOGRJ";
pub const BODY_TYPE_LETTERS: &str = "BCDWVFJTXPSKEGHMRLYN";
pub const TRANSMISSION_LETTERS: &str = "MANBCD";
pub const FUEL_AIR_LETTERS: &str = "RNDQHEVZABCILSUX";

/// Vehicle class, ordered by baseline price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Economy,
    Compact,
    Intermediate,
    Standard,
    Fullsize,
    Premium,
    Luxury,
    Electric,
}

impl Category {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Economy,
            Self::Compact,
            Self::Intermediate,
            Self::Standard,
            Self::Fullsize,
            Self::Premium,
            Self::Luxury,
            Self::Electric,
        ]
    }

    pub const fn acriss_letter(self) -> char {
        match self {
            Self::Economy => 'E',
            Self::Compact => 'C',
            Self::Intermediate => 'I',
            Self::Standard => 'S',
            Self::Fullsize => 'F',
            Self::Premium => 'P',
            Self::Luxury => 'L',
            Self::Electric => 'X',
        }
    }

    pub fn from_acriss_letter(letter: char) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.acriss_letter() == letter)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Economy => "ECONOMY",
            Self::Compact => "COMPACT",
            Self::Intermediate => "INTERMEDIATE",
            Self::Standard => "STANDARD",
            Self::Fullsize => "FULLSIZE",
            Self::Premium => "PREMIUM",
            Self::Luxury => "LUXURY",
            Self::Electric => "ELECTRIC",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Compact => "Compact",
            Self::Intermediate => "Intermediate",
            Self::Standard => "Standard",
            Self::Fullsize => "Full-size",
            Self::Premium => "Premium",
            Self::Luxury => "Luxury",
            Self::Electric => "Electric",
        }
    }

    /// Categories whose rentals always bundle insurance.
    pub const fn requires_insurance(self) -> bool {
        matches!(self, Self::Premium | Self::Luxury | Self::Electric)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BodyType {
    TwoDoor,
    FourDoor,
    Wagon,
    PassengerVan,
    Suv,
    Convertible,
    Coupe,
    Pickup,
    Crossover,
    Sport,
}

impl BodyType {
    pub const fn acriss_letter(self) -> char {
        match self {
            Self::TwoDoor => 'B',
            Self::FourDoor => 'D',
            Self::Wagon => 'W',
            Self::PassengerVan => 'V',
            Self::Suv => 'F',
            Self::Convertible => 'T',
            Self::Coupe => 'E',
            Self::Pickup => 'P',
            Self::Crossover => 'G',
            Self::Sport => 'S',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Transmission {
    Manual,
    Automatic,
    AutomaticAwd,
}

impl Transmission {
    pub const fn acriss_letter(self) -> char {
        match self {
            Self::Manual => 'M',
            Self::Automatic => 'A',
            Self::AutomaticAwd => 'D',
        }
    }

    pub const fn is_automatic(self) -> bool {
        matches!(self, Self::Automatic | Self::AutomaticAwd)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual Transmission",
            Self::Automatic => "Automatic Transmission",
            Self::AutomaticAwd => "Automatic, All-Wheel Drive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
    Flex,
}

impl FuelType {
    /// Position-four letter, which folds fuel and air conditioning together.
    ///
    /// Hybrid and flex fuel both map to `N` without air conditioning, so this letter alone
    /// cannot be decoded back to a fuel.
    pub const fn acriss_letter(self, air_conditioning: bool) -> char {
        match (self, air_conditioning) {
            (Self::Petrol, true) => 'V',
            (Self::Petrol, false) => 'Z',
            (Self::Diesel, true) => 'D',
            (Self::Diesel, false) => 'Q',
            (Self::Hybrid, true) => 'H',
            (Self::Hybrid, false) => 'N',
            (Self::Electric, true) => 'E',
            (Self::Electric, false) => 'C',
            (Self::Flex, true) => 'R',
            (Self::Flex, false) => 'N',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Hybrid => "Hybrid",
            Self::Electric => "Electric",
            Self::Flex => "Flex Fuel (Ethanol/Gasoline)",
        }
    }
}

/// A well-formed four letter ACRISS code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AcrissCode([u8; 4]);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AcrissError {
    #[error("ACRISS code must be exactly 4 characters, got {0}")]
    Length(usize),
    #[error("'{letter}' is not a valid ACRISS letter for position {position}")]
    InvalidLetter { position: usize, letter: char },
}

impl AcrissCode {
    /// Validates an externally supplied code against the positional alphabets.
    pub fn parse(raw: &str) -> Result<Self, AcrissError> {
        let normalized = raw.trim().to_ascii_uppercase();
        let letters: Vec<char> = normalized.chars().collect();
        if letters.len() != 4 {
            return Err(AcrissError::Length(letters.len()));
        }

        let alphabets = [
            CATEGORY_LETTERS,
            BODY_TYPE_LETTERS,
            TRANSMISSION_LETTERS,
            FUEL_AIR_LETTERS,
        ];
        let mut bytes = [0u8; 4];
        for (position, (letter, alphabet)) in letters.iter().zip(alphabets).enumerate() {
            if !alphabet.contains(*letter) {
                return Err(AcrissError::InvalidLetter {
                    position: position + 1,
                    letter: *letter,
                });
            }
            bytes[position] = *letter as u8;
        }

        Ok(Self(bytes))
    }

    pub fn as_str(&self) -> &str {
        // Only ever built from ASCII alphabet letters.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Category decoded from position one, when it is one the engine sells.
    pub fn category(&self) -> Option<Category> {
        Category::from_acriss_letter(self.0[0] as char)
    }
}

/// Builds the classification code for a fully specified vehicle.
pub fn synthesize_code(
    category: Category,
    body: BodyType,
    transmission: Transmission,
    fuel: FuelType,
    air_conditioning: bool,
) -> AcrissCode {
    AcrissCode([
        category.acriss_letter() as u8,
        body.acriss_letter() as u8,
        transmission.acriss_letter() as u8,
        fuel.acriss_letter(air_conditioning) as u8,
    ])
}

impl fmt::Display for AcrissCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AcrissCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AcrissCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        AcrissCode::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODIES: [BodyType; 10] = [
        BodyType::TwoDoor,
        BodyType::FourDoor,
        BodyType::Wagon,
        BodyType::PassengerVan,
        BodyType::Suv,
        BodyType::Convertible,
        BodyType::Coupe,
        BodyType::Pickup,
        BodyType::Crossover,
        BodyType::Sport,
    ];
    const TRANSMISSIONS: [Transmission; 3] = [
        Transmission::Manual,
        Transmission::Automatic,
        Transmission::AutomaticAwd,
    ];
    const FUELS: [FuelType; 5] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Hybrid,
        FuelType::Electric,
        FuelType::Flex,
    ];

    #[test]
    fn every_vocabulary_combination_yields_a_valid_code() {
        for category in Category::ordered() {
            for body in BODIES {
                for transmission in TRANSMISSIONS {
                    for fuel in FUELS {
                        for air in [true, false] {
                            let code = synthesize_code(category, body, transmission, fuel, air);
                            let reparsed = AcrissCode::parse(code.as_str())
                                .expect("synthesized code validates");
                            assert_eq!(reparsed, code);
                            assert_eq!(code.category(), Some(category));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn documented_letter_mappings_hold() {
        assert_eq!(FuelType::Flex.acriss_letter(true), 'R');
        assert_eq!(FuelType::Hybrid.acriss_letter(true), 'H');
        assert_eq!(FuelType::Electric.acriss_letter(true), 'E');
        assert_eq!(FuelType::Diesel.acriss_letter(true), 'D');
        assert_eq!(Transmission::Manual.acriss_letter(), 'M');
        assert_eq!(Transmission::Automatic.acriss_letter(), 'A');
    }

    #[test]
    fn hybrid_and_flex_share_a_letter_without_air() {
        assert_eq!(FuelType::Hybrid.acriss_letter(false), 'N');
        assert_eq!(FuelType::Flex.acriss_letter(false), 'N');
        assert_ne!(
            FuelType::Hybrid.acriss_letter(true),
            FuelType::Flex.acriss_letter(true)
        );
    }

    #[test]
    fn economy_manual_petrol_sedan() {
        let code = synthesize_code(
            Category::Economy,
            BodyType::FourDoor,
            Transmission::Manual,
            FuelType::Petrol,
            true,
        );
        assert_eq!(code.to_string(), "EDMV");
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        assert_eq!(AcrissCode::parse("ECM"), Err(AcrissError::Length(3)));
        assert_eq!(
            AcrissCode::parse("ZDMV"),
            Err(AcrissError::InvalidLetter {
                position: 1,
                letter: 'Z'
            })
        );
        assert_eq!(
            AcrissCode::parse("EDZV"),
            Err(AcrissError::InvalidLetter {
                position: 3,
                letter: 'Z'
            })
        );
        assert!(AcrissCode::parse(" edmv ").is_ok());
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = AcrissCode::parse("IFAR").expect("valid");
        assert_eq!(serde_json::to_string(&code).expect("serializes"), "\"IFAR\"");
        let back: AcrissCode = serde_json::from_str("\"IFAR\"").expect("deserializes");
        assert_eq!(back, code);
        assert!(serde_json::from_str::<AcrissCode>("\"IFAQQ\"").is_err());
    }
}
