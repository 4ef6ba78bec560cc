use super::paging::push_page;
use crate::domain::{ActivationCode, Page, Params, SenderEmail, SenderName};

pub fn encode_get_senders_params(page: Page) -> Params {
    let mut params = Params::new();
    push_page(&mut params, page);
    params
}

pub fn encode_add_sender_params(name: &SenderName, email: &SenderEmail) -> Params {
    Params::new()
        .with(SenderName::FIELD, name.as_str())
        .with(SenderEmail::FIELD, email.as_str())
}

pub fn encode_sender_email_params(email: &SenderEmail) -> Params {
    Params::new().with(SenderEmail::FIELD, email.as_str())
}

pub fn encode_activate_sender_params(email: &SenderEmail, code: &ActivationCode) -> Params {
    Params::new()
        .with(SenderEmail::FIELD, email.as_str())
        .with(ActivationCode::FIELD, code.as_str())
}
