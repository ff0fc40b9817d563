//! Per-market business rules. Every lookup is an exhaustive match over [`Region`].

use super::acriss::{Category, FuelType, Transmission};
use super::fleet::{fleet_for, FleetModel};
use super::region::Region;
use serde::{Deserialize, Serialize};

/// Rental company operating in a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalBrand {
    pub code: &'static str,
    pub name: &'static str,
}

const fn brand(code: &'static str, name: &'static str) -> RentalBrand {
    RentalBrand { code, name }
}

const HERTZ: RentalBrand = brand("ZE", "Hertz");
const AVIS: RentalBrand = brand("ZI", "Avis");
const ENTERPRISE: RentalBrand = brand("ZF", "Enterprise");
const NATIONAL: RentalBrand = brand("ZR", "National");
const BUDGET: RentalBrand = brand("ZD", "Budget");
const ALAMO: RentalBrand = brand("ZL", "Alamo");
const EUROPCAR: RentalBrand = brand("EP", "Europcar");
const SIXT: RentalBrand = brand("SX", "Sixt");
const LOCALIZA: RentalBrand = brand("LC", "Localiza");
const MOVIDA: RentalBrand = brand("MV", "Movida");
const UNIDAS: RentalBrand = brand("UN", "Unidas");
const TOYOTA_RENT: RentalBrand = brand("TR", "Toyota Rent a Car");
const NIPPON: RentalBrand = brand("NR", "Nippon Rent-A-Car");
const TIMES: RentalBrand = brand("TM", "Times Car Rental");
const UDRIVE: RentalBrand = brand("UD", "Udrive");
const THRIFTY: RentalBrand = brand("TH", "Thrifty");
const FIRST_CAR: RentalBrand = brand("FH", "First Car Rental");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MileageUnit {
    Miles,
    Km,
}

impl MileageUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Miles => "miles",
            Self::Km => "km",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrivingSide {
    Left,
    Right,
}

pub fn providers_for(region: Region) -> &'static [RentalBrand] {
    match region {
        Region::Brazil => &[LOCALIZA, MOVIDA, UNIDAS],
        Region::Usa => &[HERTZ, AVIS, ENTERPRISE, NATIONAL, BUDGET, ALAMO],
        Region::Canada => &[ENTERPRISE, AVIS, HERTZ, BUDGET],
        Region::Europe => &[EUROPCAR, SIXT, HERTZ, AVIS],
        Region::Latam => &[HERTZ, AVIS, BUDGET],
        Region::Asia => &[HERTZ, AVIS, TOYOTA_RENT, NIPPON, TIMES],
        Region::MiddleEast => &[HERTZ, AVIS, SIXT, UDRIVE],
        Region::Oceania => &[HERTZ, AVIS, THRIFTY],
        Region::Africa => &[AVIS, HERTZ, FIRST_CAR],
        Region::Global => &[HERTZ, AVIS, BUDGET],
    }
}

pub fn categories_for(region: Region) -> &'static [Category] {
    use Category::*;

    match region {
        Region::Brazil => &[Economy, Compact, Intermediate, Standard, Fullsize],
        Region::Usa => &[
            Economy,
            Compact,
            Intermediate,
            Standard,
            Fullsize,
            Premium,
            Luxury,
            Electric,
        ],
        Region::Canada => &[Economy, Compact, Intermediate, Standard, Fullsize, Premium],
        Region::Europe => &[
            Economy,
            Compact,
            Intermediate,
            Standard,
            Premium,
            Luxury,
            Electric,
        ],
        Region::Latam => &[Economy, Compact, Intermediate, Standard],
        Region::Asia => &[Economy, Compact, Intermediate, Standard, Premium],
        Region::MiddleEast => &[Economy, Intermediate, Standard, Fullsize, Premium, Luxury],
        Region::Oceania => &[Economy, Compact, Intermediate, Standard, Fullsize],
        Region::Africa => &[Economy, Compact, Intermediate, Fullsize],
        Region::Global => &[Economy, Compact, Intermediate, Standard],
    }
}

pub fn fuel_types_for(region: Region) -> &'static [FuelType] {
    use FuelType::*;

    match region {
        Region::Brazil => &[Flex, Diesel],
        Region::Usa => &[Petrol, Hybrid, Electric],
        Region::Canada => &[Petrol, Hybrid],
        Region::Europe => &[Diesel, Petrol, Hybrid, Electric],
        Region::Latam => &[Petrol],
        Region::Asia => &[Hybrid, Petrol],
        Region::MiddleEast => &[Petrol],
        Region::Oceania => &[Petrol, Hybrid],
        Region::Africa => &[Petrol, Diesel],
        Region::Global => &[Petrol],
    }
}

pub fn transmissions_for(region: Region) -> &'static [Transmission] {
    use Transmission::*;

    match region {
        Region::Usa | Region::Canada => &[Automatic, AutomaticAwd],
        Region::Europe => &[Manual, Automatic],
        Region::Brazil | Region::Latam | Region::Africa => &[Manual, Automatic],
        Region::Asia | Region::Oceania | Region::Global => &[Automatic, Manual],
        Region::MiddleEast => &[Automatic],
    }
}

pub fn mileage_unit_for(region: Region) -> MileageUnit {
    match region {
        Region::Usa => MileageUnit::Miles,
        _ => MileageUnit::Km,
    }
}

pub fn driving_side_for(region: Region) -> DrivingSide {
    match region {
        Region::Oceania | Region::Africa => DrivingSide::Left,
        Region::Brazil
        | Region::Usa
        | Region::Canada
        | Region::Europe
        | Region::Latam
        | Region::Asia
        | Region::MiddleEast
        | Region::Global => DrivingSide::Right,
    }
}

pub fn currency_for(region: Region) -> &'static str {
    match region {
        Region::Brazil => "BRL",
        Region::Canada => "CAD",
        Region::Europe => "EUR",
        Region::Oceania => "AUD",
        Region::Usa
        | Region::Latam
        | Region::Asia
        | Region::MiddleEast
        | Region::Africa
        | Region::Global => "USD",
    }
}

/// Sales tax folded into quoted totals.
pub fn tax_rate_for(region: Region) -> f64 {
    match region {
        Region::Brazil => 0.12,
        Region::Usa => 0.10,
        Region::Canada => 0.13,
        Region::Europe => 0.20,
        Region::Latam => 0.16,
        Region::Asia => 0.10,
        Region::MiddleEast => 0.05,
        Region::Oceania => 0.10,
        Region::Africa => 0.15,
        Region::Global => 0.10,
    }
}

/// Snapshot of every rule that applies to one market.
#[derive(Debug, Clone, Copy)]
pub struct RegionalRules {
    pub region: Region,
    pub providers: &'static [RentalBrand],
    pub categories: &'static [Category],
    pub fuel_types: &'static [FuelType],
    pub transmissions: &'static [Transmission],
    pub fleet: &'static [FleetModel],
    pub mileage_unit: MileageUnit,
    pub driving_side: DrivingSide,
    pub currency: &'static str,
    pub tax_rate: f64,
}

impl RegionalRules {
    pub fn for_region(region: Region) -> Self {
        Self {
            region,
            providers: providers_for(region),
            categories: categories_for(region),
            fuel_types: fuel_types_for(region),
            transmissions: transmissions_for(region),
            fleet: fleet_for(region),
            mileage_unit: mileage_unit_for(region),
            driving_side: driving_side_for(region),
            currency: currency_for(region),
            tax_rate: tax_rate_for(region),
        }
    }

    /// Fuels assignable to combustion and hybrid categories.
    pub fn conventional_fuels(&self) -> Vec<FuelType> {
        self.fuel_types
            .iter()
            .copied()
            .filter(|fuel| *fuel != FuelType::Electric)
            .collect()
    }

    /// Transmission fitted to battery-electric cars, which have no manual option.
    pub fn electric_transmission(&self) -> Transmission {
        self.transmissions
            .iter()
            .copied()
            .find(|transmission| transmission.is_automatic())
            .unwrap_or(Transmission::Automatic)
    }
}
