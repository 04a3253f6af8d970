mod cli;
mod evaluate;
mod infra;
mod routes;
mod server;

use club_awards::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
