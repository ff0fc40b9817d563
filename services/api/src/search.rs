use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use rental_inventory::config::AppConfig;
use rental_inventory::error::AppError;
use rental_inventory::inventory::{
    classify, InventoryGenerator, RegionalRules, SearchRequest, SearchResponse,
};

use crate::infra::{parse_cli_date, parse_cli_time};

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Pickup location code (IATA or city code)
    #[arg(long)]
    pub(crate) pickup: String,
    /// Dropoff location code; defaults to the pickup location
    #[arg(long)]
    pub(crate) dropoff: Option<String>,
    /// Pickup date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_cli_date)]
    pub(crate) pickup_date: NaiveDate,
    /// Dropoff date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_cli_date)]
    pub(crate) dropoff_date: NaiveDate,
    /// Pickup time (HH:MM, defaults to 10:00)
    #[arg(long, value_parser = parse_cli_time)]
    pub(crate) pickup_time: Option<NaiveTime>,
    /// Dropoff time (HH:MM, defaults to 10:00)
    #[arg(long, value_parser = parse_cli_time)]
    pub(crate) dropoff_time: Option<NaiveTime>,
    /// Print the JSON response envelope instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// One or more location codes to classify
    #[arg(required = true)]
    pub(crate) codes: Vec<String>,
}

impl SearchArgs {
    fn to_request(&self) -> SearchRequest {
        SearchRequest {
            pickup_location: self.pickup.clone(),
            dropoff_location: self.dropoff.clone(),
            pickup_date: self.pickup_date,
            dropoff_date: self.dropoff_date,
            pickup_time: self.pickup_time,
            dropoff_time: self.dropoff_time,
        }
    }
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let generator = InventoryGenerator::from_config(&config.inventory);
    let response = SearchResponse::from_result(generator.generate(&args.to_request()));

    if args.json {
        let rendered = serde_json::to_string_pretty(&response).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_offer_table(&response));
    }

    Ok(())
}

pub(crate) fn render_offer_table(response: &SearchResponse) -> String {
    let mut out = format!(
        "{} offers | region {} | {}\n",
        response.meta.count, response.meta.region, response.meta.note
    );
    out.push_str(&format!(
        "{:<10} {:<28} {:<13} {:<6} {:<10} {:>10} {:>10} {:>5}\n",
        "PROVIDER", "VEHICLE", "CATEGORY", "ACRISS", "MILEAGE", "PER DAY", "TOTAL", "DAYS"
    ));

    for offer in &response.data {
        let mileage = match offer.mileage.limit {
            Some(limit) => format!("{limit} {}/d", offer.mileage.unit.as_str()),
            None => "unlimited".to_string(),
        };
        out.push_str(&format!(
            "{:<10} {:<28} {:<13} {:<6} {:<10} {:>10.2} {:>10.2} {:>5}\n",
            offer.provider.name,
            offer.vehicle.name,
            offer.vehicle.category.label(),
            offer.vehicle.acriss_code.as_str(),
            mileage,
            offer.price.per_day,
            offer.price.total,
            offer.price.billable_days,
        ));
    }

    if let Some(first) = response.data.first() {
        out.push_str(&format!("Prices in {}\n", first.price.currency));
    }
    out
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    for code in &args.codes {
        println!("{}", describe_location(code));
    }
    Ok(())
}

pub(crate) fn describe_location(code: &str) -> String {
    let location = classify(code);
    let rules = RegionalRules::for_region(location.region);
    let country = location.country.as_deref().unwrap_or("unknown country");
    format!(
        "{:<6} {:<12} {} ({}, {}) | {} | {} | {:?}-hand traffic",
        location.code,
        location.region.as_str(),
        location.display_name,
        location.city,
        country,
        location.location_type.label(),
        rules.currency,
        rules.driving_side,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pickup: &str) -> SearchArgs {
        SearchArgs {
            pickup: pickup.to_string(),
            dropoff: None,
            pickup_date: NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid"),
            dropoff_date: NaiveDate::from_ymd_opt(2025, 1, 20).expect("valid"),
            pickup_time: None,
            dropoff_time: None,
            json: false,
        }
    }

    #[test]
    fn offer_table_lists_every_offer() {
        let result = InventoryGenerator::new().generate(&args("BSB").to_request());
        let response = SearchResponse::from_result(result);
        let table = render_offer_table(&response);
        assert_eq!(table.lines().count(), response.data.len() + 3);
        assert!(table.contains("region brazil"));
        assert!(table.contains("Prices in BRL"));
    }

    #[test]
    fn location_description_names_the_market() {
        let line = describe_location("yvr");
        assert!(line.starts_with("YVR"));
        assert!(line.contains("canada"));
        assert!(line.contains("CAD"));

        let unknown = describe_location("QQQ");
        assert!(unknown.contains("global"));
        assert!(unknown.contains("unknown country"));
    }
}
