use chrono::{Duration, Utc};
use timesolv_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    // Credentials come from TIMESOLV_* variables or a .env file
    let config = Config::from_env()?;

    info!("Creating client and exchanging authorization code...");
    let client = Client::new(config).await?;
    info!("✓ Client created and authenticated");

    let users = client.get_firm_users().await?;
    info!("Firm users: {}", users.len());

    let end = Utc::now().date_naive();
    let start = end - Duration::days(30);
    let timecards = client.get_timecards(start, end).await?;
    info!("Timecards from {} to {}: {}", start, end, timecards.len());

    let task_codes = client.get_task_codes().await?;
    info!("Task codes: {}", task_codes.len());

    let abbreviations = client.get_abbreviations().await?;
    info!("Abbreviations: {}", abbreviations.len());

    let clients = client.get_clients().await?;
    info!("Clients: {}", clients.len());

    if let Some(first) = users.first() {
        info!("First firm user: {:#?}", first);
    }

    Ok(())
}

