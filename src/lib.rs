//! Typed Rust client for the Atompark email-marketing HTTP API (v3.0).
//!
//! The crate is split into a domain layer of validated types, a transport
//! layer for the wire format (parameter encoding, MD5 request checksum, JSON
//! decoding), and a small client layer that ties them together. Responses are
//! returned as untyped [`serde_json::Value`]s.
//!
//! ```rust,no_run
//! use atompark_email::{AddAddresses, AtomparkClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), atompark_email::AtomparkError> {
//!     let client = AtomparkClient::new("public-key", "private-key")?;
//!     let book = client.add_address_book("Newsletter").await?;
//!     println!("{book}");
//!
//!     let request = AddAddresses::new(42_u64, ["reader@example.com"])?.with_labels("new, vip");
//!     let _resp = client.add_addresses(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{AtomparkClient, AtomparkClientBuilder, AtomparkError, Credentials, TransportMode};
pub use domain::{
    AddAddresses, CreateCampaign, Currency, EmailStatus, IdList, LabelList, Page, ParamValue,
    Params, RecipientVariables, ValidationError,
};
pub use transport::API_VERSION;
