//! Synthetic inventory generation.
//!
//! Every offer in a batch is derived from a random stream seeded by a digest of the
//! normalized request, so the same search always yields the same offers. Slots rotate
//! through the market's categories, fuels and transmissions, which guarantees each of
//! them shows up at least once per batch.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::InventoryConfig;

use super::acriss::{synthesize_code, Category, FuelType, Transmission};
use super::domain::{
    InsurancePolicy, MileagePolicy, Provider, RentalOffer, SearchMeta, SearchRequest,
    SearchResult, Vehicle,
};
use super::fleet::{models_for, FleetModel};
use super::location::{classify, LocationInfo};
use super::pricing::{quote, MAX_VARIATION, MIN_VARIATION};
use super::region::Region;
use super::rules::{MileageUnit, RegionalRules};

pub const MIN_BATCH: usize = 6;
pub const MAX_BATCH: usize = 12;
/// Hard ceiling on configured batch bounds.
pub const BATCH_CEILING: usize = 50;

const LIMITED_MILEAGE_PROBABILITY: f64 = 0.2;
const OPTIONAL_INSURANCE_PROBABILITY: f64 = 0.3;
const RATING_RANGE: (f64, f64) = (3.8, 4.9);
const REVIEW_COUNT_RANGE: (u32, u32) = (24, 1800);

const EXTRA_FEATURES: &[&str] = &[
    "Bluetooth",
    "GPS Navigation",
    "USB Charging",
    "Backup Camera",
    "Cruise Control",
    "Apple CarPlay / Android Auto",
];

/// Produces deterministic, region-consistent rental offers for a search.
#[derive(Debug, Clone, Copy)]
pub struct InventoryGenerator {
    min_batch: usize,
    max_batch: usize,
}

impl Default for InventoryGenerator {
    fn default() -> Self {
        Self {
            min_batch: MIN_BATCH,
            max_batch: MAX_BATCH,
        }
    }
}

/// Per-slot choices fixed before any model or price is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlotPlan {
    category: Category,
    fuel: FuelType,
    transmission: Transmission,
}

impl InventoryGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &InventoryConfig) -> Self {
        let min_batch = config.min_offers.clamp(1, BATCH_CEILING);
        Self {
            min_batch,
            max_batch: config.max_offers.clamp(min_batch, BATCH_CEILING),
        }
    }

    pub fn generate(&self, request: &SearchRequest) -> SearchResult {
        let pickup = classify(&request.pickup_location);
        let dropoff = classify(request.dropoff_code());
        let pickup_at = request.pickup_at();
        let dropoff_at = request.dropoff_at();
        let region = pickup.region;
        let rules = RegionalRules::for_region(region);

        let seed = request_seed(&pickup, &dropoff, request);
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = self.plan_slots(&rules, &mut rng);

        let mut offers = Vec::with_capacity(plan.len());
        for (slot, slot_plan) in plan.into_iter().enumerate() {
            let models = candidate_models(region, slot_plan);
            let (Some(fleet_model), Some(brand)) =
                (models.choose(&mut rng), rules.providers.choose(&mut rng))
            else {
                debug!(
                    %region,
                    category = ?slot_plan.category,
                    "no fleet model or provider for slot"
                );
                continue;
            };

            let acriss_code = synthesize_code(
                slot_plan.category,
                fleet_model.body,
                slot_plan.transmission,
                slot_plan.fuel,
                fleet_model.air_conditioning,
            );
            let variation = rng.gen_range(MIN_VARIATION..=MAX_VARIATION);
            let price = quote(slot_plan.category, region, pickup_at, dropoff_at, variation);
            let mileage = mileage_policy(rules.mileage_unit, &mut rng);
            let insurance = insurance_policy(slot_plan.category, &mut rng);
            let features =
                feature_list(slot_plan, fleet_model.air_conditioning, &mileage, &mut rng);
            let rating = round1(rng.gen_range(RATING_RANGE.0..=RATING_RANGE.1));
            let review_count = rng.gen_range(REVIEW_COUNT_RANGE.0..=REVIEW_COUNT_RANGE.1);

            offers.push(RentalOffer {
                id: format!("car-{seed:016x}-{:02}", slot + 1),
                vehicle: Vehicle {
                    name: fleet_model.name.to_string(),
                    category: slot_plan.category,
                    body_type: fleet_model.body,
                    transmission: slot_plan.transmission,
                    air_conditioning: fleet_model.air_conditioning,
                    seats: fleet_model.seats,
                    doors: fleet_model.doors,
                    bags: fleet_model.bags,
                    fuel_type: slot_plan.fuel,
                    acriss_code,
                },
                provider: Provider::from(brand),
                price,
                pickup_location: pickup.clone(),
                dropoff_location: dropoff.clone(),
                pickup_date_time: pickup_at,
                dropoff_date_time: dropoff_at,
                mileage,
                insurance,
                features,
                rating: Some(rating),
                review_count: Some(review_count),
            });
        }

        debug!(
            %region,
            pickup = %pickup.code,
            offers = offers.len(),
            "generated synthetic rental inventory"
        );

        SearchResult {
            meta: SearchMeta {
                count: offers.len(),
                is_synthetic_data: true,
                region,
                note: format!(
                    "Synthetic inventory for {}. Prices are illustrative and cannot be booked.",
                    region.label()
                ),
            },
            offers,
        }
    }

    fn plan_slots(&self, rules: &RegionalRules, rng: &mut StdRng) -> Vec<SlotPlan> {
        let categories = rules.categories;
        let fuels = rules.conventional_fuels();
        let transmissions = rules.transmissions;
        if categories.is_empty() || fuels.is_empty() || transmissions.is_empty() {
            return Vec::new();
        }

        let category_offset = rng.gen_range(0..categories.len());
        let fuel_offset = rng.gen_range(0..fuels.len());
        let transmission_offset = rng.gen_range(0..transmissions.len());
        let drawn = rng.gen_range(self.min_batch..=self.max_batch);

        let category_at = |slot: usize| categories[(category_offset + slot) % categories.len()];
        let conventional_slots = |batch: usize| {
            (0..batch)
                .filter(|slot| category_at(*slot) != Category::Electric)
                .count()
        };

        let needed = if categories.contains(&Category::Electric) && categories.len() == 1 {
            0
        } else {
            fuels.len().max(transmissions.len())
        };
        let mut batch = drawn.max(categories.len());
        while conventional_slots(batch) < needed {
            batch += 1;
        }

        let mut conventional = 0;
        (0..batch)
            .map(|slot| {
                let category = category_at(slot);
                if category == Category::Electric {
                    return SlotPlan {
                        category,
                        fuel: FuelType::Electric,
                        transmission: rules.electric_transmission(),
                    };
                }
                let plan = SlotPlan {
                    category,
                    fuel: fuels[(fuel_offset + conventional) % fuels.len()],
                    transmission: transmissions
                        [(transmission_offset + conventional) % transmissions.len()],
                };
                conventional += 1;
                plan
            })
            .collect()
    }
}

/// Models of the slot's category, narrowed to those sold with the slot's fuel. Falls back to
/// models with no fixed powertrain, then to the whole category.
fn candidate_models(region: Region, plan: SlotPlan) -> Vec<&'static FleetModel> {
    let models: Vec<_> = models_for(region, plan.category).collect();
    let matching: Vec<_> = models
        .iter()
        .copied()
        .filter(|fleet_model| fleet_model.runs_on(plan.fuel))
        .collect();
    if !matching.is_empty() {
        return matching;
    }
    let adaptable: Vec<_> = models
        .iter()
        .copied()
        .filter(|fleet_model| fleet_model.fixed_fuel.is_none())
        .collect();
    if adaptable.is_empty() {
        models
    } else {
        adaptable
    }
}

fn request_seed(pickup: &LocationInfo, dropoff: &LocationInfo, request: &SearchRequest) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(pickup.code.as_bytes());
    hasher.update(b"|");
    hasher.update(dropoff.code.as_bytes());
    hasher.update(b"|");
    hasher.update(request.pickup_at().to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(request.dropoff_at().to_string().as_bytes());
    let digest = hasher.finalize();

    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(seed)
}

fn mileage_policy(unit: MileageUnit, rng: &mut StdRng) -> MileagePolicy {
    if rng.gen_bool(LIMITED_MILEAGE_PROBABILITY) {
        let limit = match unit {
            MileageUnit::Miles => 200,
            MileageUnit::Km => 300,
        };
        MileagePolicy {
            unlimited: false,
            limit: Some(limit),
            unit,
        }
    } else {
        MileagePolicy {
            unlimited: true,
            limit: None,
            unit,
        }
    }
}

fn insurance_policy(category: Category, rng: &mut StdRng) -> InsurancePolicy {
    if category.requires_insurance() {
        InsurancePolicy {
            included: true,
            coverage: Some("Full Coverage".to_string()),
        }
    } else if rng.gen_bool(OPTIONAL_INSURANCE_PROBABILITY) {
        InsurancePolicy {
            included: true,
            coverage: Some("Collision Damage Waiver".to_string()),
        }
    } else {
        InsurancePolicy {
            included: false,
            coverage: None,
        }
    }
}

fn feature_list(
    plan: SlotPlan,
    air_conditioning: bool,
    mileage: &MileagePolicy,
    rng: &mut StdRng,
) -> Vec<String> {
    let mut features = vec![plan.transmission.label().to_string()];
    if air_conditioning {
        features.push("Air Conditioning".to_string());
    }
    features.push(plan.fuel.label().to_string());
    if mileage.unlimited {
        features.push("Unlimited Mileage".to_string());
    }
    let extras = rng.gen_range(1..=2);
    features.extend(
        EXTRA_FEATURES
            .choose_multiple(rng, extras)
            .map(|feature| feature.to_string()),
    );
    features
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
