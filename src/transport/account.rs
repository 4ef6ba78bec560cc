use crate::domain::{Currency, LabelName, Params};

pub fn encode_get_user_balance_params(currency: Currency) -> Params {
    Params::new().with(Currency::FIELD, currency.as_str())
}

pub fn encode_get_labels_params() -> Params {
    Params::new()
}

pub fn encode_label_params(name: &LabelName) -> Params {
    Params::new().with(LabelName::FIELD, name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_get_user_balance_params_uses_uppercase_code() {
        let currency = "eur".parse::<Currency>().unwrap();
        assert_eq!(
            encode_get_user_balance_params(currency),
            Params::new().with("currency", "EUR")
        );
    }

    #[test]
    fn encode_get_labels_params_is_empty() {
        assert!(encode_get_labels_params().is_empty());
    }

    #[test]
    fn encode_label_params_sets_label_name() {
        assert_eq!(
            encode_label_params(&LabelName::new(" vip ").unwrap()),
            Params::new().with("label_name", "vip")
        );
    }
}
