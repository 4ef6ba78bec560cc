use crate::domain::{Page, Params};

pub fn push_page(params: &mut Params, page: Page) {
    params.insert(Page::START_FIELD, page.start);
    params.insert(Page::OFFSET_FIELD, page.offset);
}
