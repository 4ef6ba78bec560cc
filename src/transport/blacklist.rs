use super::paging::push_page;
use crate::domain::{EmailAddress, Page, Params};

pub const COMMENT_FIELD: &str = "comment";

pub fn encode_get_blacklist_params(page: Page) -> Params {
    let mut params = Params::new();
    push_page(&mut params, page);
    params
}

/// A missing comment is sent as an empty string.
pub fn encode_add_to_blacklist_params(email: &EmailAddress, comment: Option<&str>) -> Params {
    Params::new()
        .with(EmailAddress::FIELD, email.as_str())
        .with(COMMENT_FIELD, comment.unwrap_or_default())
}

pub fn encode_del_from_blacklist_params(email: &EmailAddress) -> Params {
    Params::new().with(EmailAddress::FIELD, email.as_str())
}
