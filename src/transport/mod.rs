//! Transport layer: wire-format details (parameter encoding, signing, decoding).

mod account;
mod address_book;
mod blacklist;
mod campaign;
mod decode;
mod paging;
mod query;
mod sender;
mod signature;

pub use account::{encode_get_labels_params, encode_get_user_balance_params, encode_label_params};
pub use address_book::{
    encode_activate_emails_params, encode_add_address_book_params, encode_add_addresses_params,
    encode_change_email_status_params, encode_del_address_book_params, encode_del_email_params,
    encode_get_address_book_params,
};
pub use blacklist::{
    encode_add_to_blacklist_params, encode_del_from_blacklist_params, encode_get_blacklist_params,
};
pub use campaign::{
    encode_create_campaign_params, encode_get_campaign_delivery_stats_params,
    encode_get_campaign_stats_params, encode_get_campaigns_params,
};
pub use decode::decode_json_response;
pub use query::encode_signed_query;
pub use sender::{
    encode_activate_sender_params, encode_add_sender_params, encode_get_senders_params,
    encode_sender_email_params,
};
pub use signature::{API_VERSION, SUM_FIELD, sign};
