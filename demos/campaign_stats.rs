use std::io;
use std::time::Duration;

use atompark_email::{AtomparkClient, Credentials, Page};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let public_key = std::env::var("ATOMPARK_PUBLIC_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ATOMPARK_PUBLIC_KEY environment variable is required",
        )
    })?;
    let private_key = std::env::var("ATOMPARK_PRIVATE_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ATOMPARK_PRIVATE_KEY environment variable is required",
        )
    })?;
    let campaign_id = std::env::var("ATOMPARK_CAMPAIGN_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "ATOMPARK_CAMPAIGN_ID environment variable is required",
            )
        })?
        .parse::<u64>()?;

    let client = AtomparkClient::builder(Credentials::new(public_key, private_key)?)
        .timeout(Duration::from_secs(60))
        .build()?;

    let stats = client.get_campaign_stats(campaign_id).await?;
    println!("stats: {stats:#}");

    let delivery = client
        .get_campaign_delivery_stats(campaign_id, Page::new(0, 20))
        .await?;
    println!("first 20 deliveries: {delivery:#}");

    Ok(())
}
