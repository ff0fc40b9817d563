mod cli;
mod infra;
mod routes;
mod search;
mod server;

use rental_inventory::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
