use md5::{Digest, Md5};

use crate::domain::{ParamValue, Params, PrivateKey, PublicKey};

pub const API_VERSION: &str = "3.0";
pub const VERSION_FIELD: &str = "version";
pub const ACTION_FIELD: &str = "action";
pub const SUM_FIELD: &str = "sum";

/// Parameters with `version`, `key` and `action` filled in, plus their checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedParams {
    pub params: Params,
    pub sum: String,
}

impl SignedParams {
    /// The `key` value that was signed.
    pub fn key(&self) -> String {
        self.params
            .get(PublicKey::FIELD)
            .and_then(ParamValue::as_scalar)
            .unwrap_or_default()
    }
}

/// Compute the request checksum over a copy of `params`.
///
/// `version` and `key` keep a caller-supplied non-blank value (trimmed);
/// `action` is always overwritten. Values are concatenated in ascending key
/// order, the private key is appended, and the result is MD5-hashed.
pub fn sign(
    action: &str,
    params: &Params,
    public_key: &PublicKey,
    private_key: &PrivateKey,
) -> SignedParams {
    let mut signed = params.clone();
    let version = override_or(params, VERSION_FIELD, API_VERSION);
    let key = override_or(params, PublicKey::FIELD, public_key.as_str());
    signed.insert(VERSION_FIELD, version);
    signed.insert(PublicKey::FIELD, key);
    signed.insert(ACTION_FIELD, action);

    let mut payload = String::new();
    for (_, value) in &signed {
        push_signing_form(value, &mut payload);
    }
    payload.push_str(private_key.as_str());

    SignedParams {
        params: signed,
        sum: hex::encode(Md5::digest(payload.as_bytes())),
    }
}

fn override_or(params: &Params, field: &str, default: &str) -> String {
    params
        .get(field)
        .filter(|value| !value.is_blank())
        .and_then(ParamValue::as_scalar)
        .map(|value| value.trim().to_owned())
        .unwrap_or_else(|| default.to_owned())
}

fn push_signing_form(value: &ParamValue, out: &mut String) {
    match value {
        ParamValue::Null => {}
        ParamValue::Text(text) => out.push_str(text),
        ParamValue::Int(number) => out.push_str(&number.to_string()),
        ParamValue::List(items) => {
            for item in items {
                push_signing_form(item, out);
            }
        }
        ParamValue::Map(entries) => {
            for (_, item) in entries {
                push_signing_form(item, out);
            }
        }
    }
}
