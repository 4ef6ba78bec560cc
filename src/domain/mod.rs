//! Domain layer: strong types with validation and invariants (no I/O).

mod params;
mod request;
mod validation;
mod value;

pub use params::{ParamValue, Params};
pub use request::{AddAddresses, CreateCampaign};
pub use validation::ValidationError;
pub use value::{
    ActivationCode, AddressBookId, AddressBookName, CampaignBody, CampaignId, Currency,
    Description, EmailAddress, EmailStatus, IdList, LabelList, LabelName, Page, PrivateKey,
    PublicKey, RecipientVariables, SenderEmail, SenderName, Subject,
};
