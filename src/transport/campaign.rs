use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::paging::push_page;
use crate::domain::{
    CampaignBody, CampaignId, CreateCampaign, LabelList, Page, Params, SenderEmail, SenderName,
    Subject,
};

/// The service expects `body` base64-encoded and `labels` comma-joined.
pub fn encode_create_campaign_params(request: &CreateCampaign) -> Params {
    Params::new()
        .with(CreateCampaign::NAME_FIELD, request.name())
        .with(SenderName::FIELD, request.sender_name().as_str())
        .with(SenderEmail::FIELD, request.sender_email().as_str())
        .with(Subject::FIELD, request.subject().as_str())
        .with(
            CampaignBody::FIELD,
            STANDARD.encode(request.body().as_str()),
        )
        .with(CreateCampaign::LIST_ID_FIELD, request.list_id().value())
        .with(LabelList::FIELD, request.labels().joined())
}

pub fn encode_get_campaigns_params(page: Page) -> Params {
    let mut params = Params::new();
    push_page(&mut params, page);
    params
}

pub fn encode_get_campaign_stats_params(id: CampaignId) -> Params {
    Params::new().with(CampaignId::FIELD, id.value())
}

pub fn encode_get_campaign_delivery_stats_params(id: CampaignId, page: Page) -> Params {
    let mut params = Params::new().with(CampaignId::FIELD, id.value());
    push_page(&mut params, page);
    params
}
