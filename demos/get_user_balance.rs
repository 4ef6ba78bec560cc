use std::io;

use atompark_email::{AtomparkClient, Credentials, TransportMode};

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
    let currency = std::env::var("ATOMPARK_CURRENCY").unwrap_or_else(|_| "usd".to_owned());

    // GET mode, for networks that only let plain fetches through.
    let client = AtomparkClient::builder(Credentials::new(public_key, private_key)?)
        .transport_mode(TransportMode::Get)
        .build()?;
    let response = client.get_user_balance(&currency).await?;

    println!("balance ({currency}): {response:#}");

    Ok(())
}
