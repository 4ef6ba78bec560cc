use std::io;

use atompark_email::AtomparkClient;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let public_key = required_env("ATOMPARK_PUBLIC_KEY")?;
    let private_key = required_env("ATOMPARK_PRIVATE_KEY")?;
    let name = std::env::var("ATOMPARK_BOOK_NAME").unwrap_or_else(|_| "Demo list".to_owned());

    let client = AtomparkClient::new(public_key, private_key)?;
    let response = client.add_address_book(name).await?;

    println!("{response:#}");

    Ok(())
}
