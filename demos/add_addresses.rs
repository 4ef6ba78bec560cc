use std::io;

use atompark_email::{AddAddresses, AtomparkClient, RecipientVariables};

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
    let book_id = std::env::var("ATOMPARK_BOOK_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "ATOMPARK_BOOK_ID environment variable is required",
            )
        })?
        .parse::<u64>()?;
    let email = std::env::var("ATOMPARK_EMAIL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ATOMPARK_EMAIL environment variable is required",
        )
    })?;
    let labels = std::env::var("ATOMPARK_LABELS").unwrap_or_default();

    let client = AtomparkClient::new(public_key, private_key)?;
    let request = AddAddresses::new(book_id, [email])?
        .with_labels(labels)
        .with_variables(vec![RecipientVariables::new().set("source", "demo")]);
    let response = client.add_addresses(request).await?;

    println!("{response:#}");

    Ok(())
}
