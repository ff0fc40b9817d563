use super::acriss::BodyType::{
    Convertible, Coupe, Crossover, FourDoor, PassengerVan, Pickup, Suv, TwoDoor, Wagon,
};
use super::acriss::Category::{
    Compact, Economy, Electric, Fullsize, Intermediate, Luxury, Premium, Standard,
};
use super::acriss::{BodyType, Category, FuelType};
use super::region::Region;

/// A representative model a market's rental desks put on the lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetModel {
    pub name: &'static str,
    pub category: Category,
    pub body: BodyType,
    pub seats: u8,
    pub doors: u8,
    pub bags: u8,
    pub air_conditioning: bool,
    /// Set for models sold with a single powertrain; `None` takes any combustion fuel.
    pub fixed_fuel: Option<FuelType>,
}

impl FleetModel {
    pub fn runs_on(&self, fuel: FuelType) -> bool {
        match self.fixed_fuel {
            Some(fixed) => fixed == fuel,
            None => !matches!(fuel, FuelType::Hybrid | FuelType::Electric),
        }
    }
}

const fn model(
    name: &'static str,
    category: Category,
    body: BodyType,
    seats: u8,
    doors: u8,
    bags: u8,
) -> FleetModel {
    FleetModel {
        name,
        category,
        body,
        seats,
        doors,
        bags,
        air_conditioning: true,
        fixed_fuel: None,
    }
}

const fn without_air(mut fleet_model: FleetModel) -> FleetModel {
    fleet_model.air_conditioning = false;
    fleet_model
}

const fn hybrid(mut fleet_model: FleetModel) -> FleetModel {
    fleet_model.fixed_fuel = Some(FuelType::Hybrid);
    fleet_model
}

const fn battery(mut fleet_model: FleetModel) -> FleetModel {
    fleet_model.fixed_fuel = Some(FuelType::Electric);
    fleet_model
}

const BRAZIL_FLEET: &[FleetModel] = &[
    model("Fiat Mobi", Economy, TwoDoor, 4, 4, 1),
    model("Renault Kwid", Economy, TwoDoor, 4, 4, 1),
    model("Chevrolet Onix", Compact, FourDoor, 5, 4, 2),
    model("Hyundai HB20", Compact, FourDoor, 5, 4, 2),
    model("Volkswagen Virtus", Intermediate, FourDoor, 5, 4, 3),
    model("Fiat Cronos", Intermediate, FourDoor, 5, 4, 3),
    model("Toyota Corolla", Standard, FourDoor, 5, 4, 3),
    model("Jeep Compass", Standard, Suv, 5, 4, 3),
    model("Toyota Hilux", Fullsize, Pickup, 5, 4, 4),
    model("Chevrolet Spin", Fullsize, PassengerVan, 7, 4, 3),
];

const USA_FLEET: &[FleetModel] = &[
    model("Mitsubishi Mirage", Economy, TwoDoor, 5, 4, 1),
    model("Kia Rio", Economy, FourDoor, 5, 4, 2),
    model("Nissan Versa", Compact, FourDoor, 5, 4, 2),
    model("Toyota Corolla", Intermediate, FourDoor, 5, 4, 2),
    model("Volkswagen Jetta", Intermediate, FourDoor, 5, 4, 2),
    hybrid(model("Toyota Prius", Intermediate, FourDoor, 5, 4, 2)),
    model("Toyota Camry", Standard, FourDoor, 5, 4, 3),
    hybrid(model("Toyota RAV4 Hybrid", Standard, Suv, 5, 4, 3)),
    model("Chevrolet Tahoe", Fullsize, Suv, 7, 4, 4),
    model("Chrysler Pacifica", Fullsize, PassengerVan, 7, 4, 4),
    model("Cadillac CT5", Premium, FourDoor, 5, 4, 3),
    model("Ford Mustang Convertible", Premium, Convertible, 4, 2, 2),
    model("BMW 7 Series", Luxury, FourDoor, 5, 4, 3),
    model("Cadillac Escalade", Luxury, Suv, 7, 4, 4),
    battery(model("Tesla Model 3", Electric, FourDoor, 5, 4, 2)),
    battery(model("Tesla Model Y", Electric, Crossover, 5, 4, 3)),
];

const CANADA_FLEET: &[FleetModel] = &[
    model("Chevrolet Spark", Economy, TwoDoor, 4, 4, 1),
    model("Hyundai Elantra", Compact, FourDoor, 5, 4, 2),
    model("Toyota Corolla", Intermediate, FourDoor, 5, 4, 2),
    model("Subaru Forester", Standard, Suv, 5, 4, 3),
    hybrid(model("Toyota RAV4 Hybrid", Standard, Suv, 5, 4, 3)),
    model("Ford Explorer", Fullsize, Suv, 7, 4, 4),
    model("Ram 1500", Fullsize, Pickup, 5, 4, 4),
    model("Audi Q5", Premium, Suv, 5, 4, 3),
];

const EUROPE_FLEET: &[FleetModel] = &[
    model("Fiat 500", Economy, TwoDoor, 4, 3, 1),
    model("Toyota Aygo X", Economy, TwoDoor, 4, 5, 1),
    model("Volkswagen Polo", Compact, FourDoor, 5, 5, 2),
    model("Peugeot 208", Compact, FourDoor, 5, 5, 2),
    hybrid(model("Toyota Yaris Hybrid", Compact, FourDoor, 5, 5, 2)),
    model("Volkswagen Golf", Intermediate, FourDoor, 5, 5, 2),
    model("Skoda Octavia Estate", Intermediate, Wagon, 5, 5, 4),
    model("Peugeot 3008", Standard, Suv, 5, 5, 3),
    model("Ford Galaxy", Standard, PassengerVan, 7, 5, 4),
    model("BMW 3 Series", Premium, FourDoor, 5, 4, 3),
    model("Audi A4 Avant", Premium, Wagon, 5, 5, 4),
    model("Mercedes-Benz E-Class", Luxury, FourDoor, 5, 4, 3),
    model("BMW 4 Series Convertible", Luxury, Convertible, 4, 2, 2),
    battery(model("Tesla Model 3", Electric, FourDoor, 5, 4, 2)),
    battery(model("Volkswagen ID.4", Electric, Crossover, 5, 5, 3)),
    battery(model("Polestar 2", Electric, FourDoor, 5, 5, 2)),
];

const LATAM_FLEET: &[FleetModel] = &[
    without_air(model("Nissan March", Economy, TwoDoor, 5, 4, 1)),
    model("Chevrolet Aveo", Economy, FourDoor, 5, 4, 2),
    model("Kia Rio", Compact, FourDoor, 5, 4, 2),
    model("Nissan Versa", Compact, FourDoor, 5, 4, 2),
    model("Volkswagen Virtus", Intermediate, FourDoor, 5, 4, 3),
    model("Nissan Kicks", Standard, Crossover, 5, 4, 3),
    model("Toyota Fortuner", Standard, Suv, 7, 4, 3),
];

const ASIA_FLEET: &[FleetModel] = &[
    model("Toyota Yaris", Economy, TwoDoor, 5, 4, 1),
    model("Suzuki Swift", Economy, TwoDoor, 5, 4, 1),
    model("Honda City", Compact, FourDoor, 5, 4, 2),
    model("Toyota Corolla Cross", Intermediate, Crossover, 5, 4, 3),
    hybrid(model("Toyota Prius", Intermediate, FourDoor, 5, 4, 2)),
    model("Toyota Alphard", Standard, PassengerVan, 7, 4, 3),
    model("Honda CR-V", Standard, Suv, 5, 4, 3),
    model("Lexus ES", Premium, FourDoor, 5, 4, 3),
];

const MIDDLE_EAST_FLEET: &[FleetModel] = &[
    model("Nissan Sunny", Economy, FourDoor, 5, 4, 2),
    model("Toyota Corolla", Intermediate, FourDoor, 5, 4, 2),
    model("Toyota Camry", Standard, FourDoor, 5, 4, 3),
    model("Nissan Patrol", Fullsize, Suv, 7, 4, 4),
    model("Toyota Land Cruiser", Fullsize, Suv, 7, 4, 4),
    model("Lexus LX", Premium, Suv, 7, 4, 4),
    model("Mercedes-Benz S-Class", Luxury, FourDoor, 5, 4, 3),
    model("Range Rover Vogue", Luxury, Suv, 5, 4, 4),
    model("Porsche 911", Luxury, Coupe, 4, 2, 1),
];

const OCEANIA_FLEET: &[FleetModel] = &[
    model("Kia Picanto", Economy, TwoDoor, 4, 4, 1),
    model("Toyota Corolla Hatch", Compact, FourDoor, 5, 5, 2),
    model("Mazda 3", Intermediate, FourDoor, 5, 4, 2),
    hybrid(model("Toyota Camry Hybrid", Intermediate, FourDoor, 5, 4, 3)),
    model("Toyota RAV4", Standard, Suv, 5, 4, 3),
    model("Toyota Land Cruiser Prado", Fullsize, Suv, 7, 4, 4),
    model("Ford Ranger", Fullsize, Pickup, 5, 4, 4),
];

const AFRICA_FLEET: &[FleetModel] = &[
    without_air(model("Suzuki Celerio", Economy, TwoDoor, 4, 4, 1)),
    model("Volkswagen Polo Vivo", Economy, TwoDoor, 5, 4, 1),
    model("Toyota Corolla Quest", Compact, FourDoor, 5, 4, 2),
    model("Toyota Corolla Cross", Intermediate, Crossover, 5, 4, 3),
    model("Toyota Hilux Double Cab", Fullsize, Pickup, 5, 4, 4),
    model("Toyota Land Cruiser 4x4", Fullsize, Suv, 7, 4, 4),
];

const GLOBAL_FLEET: &[FleetModel] = &[
    model("Toyota Yaris", Economy, TwoDoor, 5, 4, 1),
    model("Volkswagen Polo", Compact, FourDoor, 5, 4, 2),
    model("Toyota Corolla", Intermediate, FourDoor, 5, 4, 2),
    model("Hyundai Tucson", Standard, Suv, 5, 4, 3),
];

/// Every model a market offers, across all of its permitted categories.
pub fn fleet_for(region: Region) -> &'static [FleetModel] {
    match region {
        Region::Brazil => BRAZIL_FLEET,
        Region::Usa => USA_FLEET,
        Region::Canada => CANADA_FLEET,
        Region::Europe => EUROPE_FLEET,
        Region::Latam => LATAM_FLEET,
        Region::Asia => ASIA_FLEET,
        Region::MiddleEast => MIDDLE_EAST_FLEET,
        Region::Oceania => OCEANIA_FLEET,
        Region::Africa => AFRICA_FLEET,
        Region::Global => GLOBAL_FLEET,
    }
}

pub fn models_for(
    region: Region,
    category: Category,
) -> impl Iterator<Item = &'static FleetModel> {
    fleet_for(region)
        .iter()
        .filter(move |fleet_model| fleet_model.category == category)
}
