use url::form_urlencoded::Serializer;

use super::signature::{SUM_FIELD, SignedParams};
use crate::domain::{ParamValue, PublicKey};

/// Encode a signed request as `key=<key>&sum=<sum>&<params>`.
///
/// The same string is used as the POST body and as the GET query. Params
/// follow in ascending key order; `key` is not repeated. Lists become
/// `name[]=v` (or `name[i][k]=v` for lists of maps), maps become `name[k]=v`,
/// and nulls are left out.
pub fn encode_signed_query(signed: &SignedParams) -> String {
    let mut serializer = Serializer::new(String::new());
    serializer.append_pair(PublicKey::FIELD, &signed.key());
    serializer.append_pair(SUM_FIELD, &signed.sum);

    for (name, value) in &signed.params {
        if name == PublicKey::FIELD {
            continue;
        }
        append_value(&mut serializer, name, value);
    }

    serializer.finish()
}

fn append_value(serializer: &mut Serializer<'_, String>, name: &str, value: &ParamValue) {
    match value {
        ParamValue::Null => {}
        ParamValue::Text(text) => {
            serializer.append_pair(name, text);
        }
        ParamValue::Int(number) => {
            serializer.append_pair(name, &number.to_string());
        }
        ParamValue::List(items) => {
            for (index, item) in items.iter().enumerate() {
                let item_name = match item {
                    ParamValue::List(_) | ParamValue::Map(_) => format!("{name}[{index}]"),
                    _ => format!("{name}[]"),
                };
                append_value(serializer, &item_name, item);
            }
        }
        ParamValue::Map(entries) => {
            for (key, item) in entries {
                append_value(serializer, &format!("{name}[{key}]"), item);
            }
        }
    }
}
