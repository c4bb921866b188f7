mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use sc_buddy::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
