use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Atompark public API key (`key`).
///
/// Invariant: non-empty after trimming.
pub struct PublicKey(String);

impl PublicKey {
    /// Form field name used by Atompark (`key`).
    pub const FIELD: &'static str = "key";

    /// Create a validated [`PublicKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Atompark private API key.
///
/// Never sent over the wire; it only salts the request signature.
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct PrivateKey(String);

impl PrivateKey {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "private_key";

    /// Create a validated [`PrivateKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(***)")
    }
}

fn positive_id(field: &'static str, value: u64) -> Result<u64, ValidationError> {
    if value == 0 {
        return Err(ValidationError::ZeroId { field });
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Address book id (`id`).
///
/// Invariant: greater than zero.
pub struct AddressBookId(u64);

impl AddressBookId {
    /// Form field name used by Atompark (`id`).
    pub const FIELD: &'static str = "id";

    /// Create a validated [`AddressBookId`].
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        positive_id(Self::FIELD, value).map(Self)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Campaign id (`id`).
///
/// Invariant: greater than zero.
pub struct CampaignId(u64);

impl CampaignId {
    /// Form field name used by Atompark (`id`).
    pub const FIELD: &'static str = "id";

    /// Create a validated [`CampaignId`].
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        positive_id(Self::FIELD, value).map(Self)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Address book name (`name`).
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct AddressBookName(String);

impl AddressBookName {
    /// Form field name used by Atompark (`name`).
    pub const FIELD: &'static str = "name";

    /// Create a validated [`AddressBookName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the name as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient email address (`email`).
///
/// Invariant: non-empty after trimming. No syntax check is made; the service
/// is the authority on what it accepts.
pub struct EmailAddress(String);

impl EmailAddress {
    /// Form field name used by Atompark (`email`).
    pub const FIELD: &'static str = "email";

    /// Create a validated [`EmailAddress`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender mailbox (`sender_email`).
///
/// Invariant: non-empty after trimming.
pub struct SenderEmail(String);

impl SenderEmail {
    /// Form field name used by Atompark (`sender_email`).
    pub const FIELD: &'static str = "sender_email";

    /// Create a validated [`SenderEmail`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender email.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender display name (`sender_name`).
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct SenderName(String);

impl SenderName {
    /// Form field name used by Atompark (`sender_name`).
    pub const FIELD: &'static str = "sender_name";

    /// Create a validated [`SenderName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the name as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender activation code (`code`) mailed by the service.
///
/// Invariant: non-empty after trimming.
pub struct ActivationCode(String);

impl ActivationCode {
    /// Form field name used by Atompark (`code`).
    pub const FIELD: &'static str = "code";

    /// Create a validated [`ActivationCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Free-text description attached when activating recipients (`description`).
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct Description(String);

impl Description {
    /// Form field name used by Atompark (`description`).
    pub const FIELD: &'static str = "description";

    /// Create a validated [`Description`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the description as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Label name (`label_name`).
///
/// Invariant: non-empty after trimming.
pub struct LabelName(String);

impl LabelName {
    /// Form field name used by Atompark (`label_name`).
    pub const FIELD: &'static str = "label_name";

    /// Create a validated [`LabelName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated label name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Campaign subject line (`subject`).
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct Subject(String);

impl Subject {
    /// Form field name used by Atompark (`subject`).
    pub const FIELD: &'static str = "subject";

    /// Create a validated [`Subject`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the subject as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Campaign body (`body`), usually HTML.
///
/// Invariant: non-empty after trimming. Stored unencoded; the transport layer
/// base64-encodes it on the way out.
pub struct CampaignBody(String);

impl CampaignBody {
    /// Form field name used by Atompark (`body`).
    pub const FIELD: &'static str = "body";

    /// Create a validated [`CampaignBody`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the raw body.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
/// Currency accepted by `getUserBalance`.
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Rur,
    Rub,
    Uah,
}

impl Currency {
    /// Form field name used by Atompark (`currency`).
    pub const FIELD: &'static str = "currency";

    pub const ALL: [Currency; 6] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Rur,
        Self::Rub,
        Self::Uah,
    ];

    /// Wire code (`USD`, `EUR`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Rur => "RUR",
            Self::Rub => "RUB",
            Self::Uah => "UAH",
        }
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    /// Case-insensitive; surrounding whitespace is not stripped.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let upper = value.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|currency| currency.as_str() == upper)
            .ok_or_else(|| ValidationError::UnsupportedCurrency {
                input: value.to_owned(),
            })
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Window for paged listings (`start`, `offset`).
///
/// Both values are passed through unchecked; `None` lets the service pick.
pub struct Page {
    #[serde(default)]
    pub start: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

impl Page {
    pub const START_FIELD: &'static str = "start";
    pub const OFFSET_FIELD: &'static str = "offset";

    pub fn new(start: u32, offset: u32) -> Self {
        Self {
            start: Some(start),
            offset: Some(offset),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// One or more address book ids (`id_list[]`).
///
/// A single id converts into a one-element list.
pub struct IdList(Vec<u64>);

impl IdList {
    /// Form field name used by Atompark (`id_list`).
    pub const FIELD: &'static str = "id_list";

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<u64> for IdList {
    fn from(value: u64) -> Self {
        Self(vec![value])
    }
}

impl From<AddressBookId> for IdList {
    fn from(value: AddressBookId) -> Self {
        Self(vec![value.value()])
    }
}

impl From<Vec<u64>> for IdList {
    fn from(value: Vec<u64>) -> Self {
        Self(value)
    }
}

impl From<&[u64]> for IdList {
    fn from(value: &[u64]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<[u64; N]> for IdList {
    fn from(value: [u64; N]) -> Self {
        Self(value.to_vec())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Labels given either as a list or as a comma-separated string.
///
/// A string is split on `,`, each part trimmed, and empty parts dropped, so
/// `"1, 2,3"` and `vec!["1", "2", "3"]` are equivalent. Numeric label ids
/// convert to their decimal form.
pub struct LabelList(Vec<String>);

impl LabelList {
    /// Form field name used by Atompark (`labels`).
    pub const FIELD: &'static str = "labels";

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-joined form, as `createCampaign` expects it.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }

    fn split(value: &str) -> Self {
        Self(
            value
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }
}

impl From<&str> for LabelList {
    fn from(value: &str) -> Self {
        Self::split(value)
    }
}

impl From<String> for LabelList {
    fn from(value: String) -> Self {
        Self::split(&value)
    }
}

impl From<Vec<String>> for LabelList {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl From<Vec<&str>> for LabelList {
    fn from(value: Vec<&str>) -> Self {
        Self(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for LabelList {
    fn from(value: &[&str]) -> Self {
        Self(value.iter().map(|label| (*label).to_owned()).collect())
    }
}

impl From<u64> for LabelList {
    fn from(value: u64) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<Vec<u64>> for LabelList {
    fn from(value: Vec<u64>) -> Self {
        Self(value.iter().map(u64::to_string).collect())
    }
}

impl From<&[u64]> for LabelList {
    fn from(value: &[u64]) -> Self {
        Self(value.iter().map(u64::to_string).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Template variables for one recipient, sent as one `v[]` entry.
///
/// Insertion order is kept on the wire and in the signature.
pub struct RecipientVariables(Vec<(String, String)>);

impl RecipientVariables {
    /// Form field name used by Atompark (`v`).
    pub const FIELD: &'static str = "v";

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a variable; a repeated name replaces the earlier value in place.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
        self
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Recipient status code for `changeEmailStatus`; the service defines the values.
pub struct EmailStatus(u32);

impl EmailStatus {
    /// Form field name used by Atompark (`status`).
    pub const FIELD: &'static str = "status";

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}
