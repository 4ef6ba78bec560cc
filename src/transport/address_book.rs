use crate::domain::{
    AddAddresses, AddressBookId, AddressBookName, Description, EmailAddress, EmailStatus, IdList,
    LabelList, ParamValue, Params, RecipientVariables,
};

pub fn encode_add_address_book_params(name: &AddressBookName) -> Params {
    Params::new().with(AddressBookName::FIELD, name.as_str())
}

pub fn encode_del_address_book_params(id: AddressBookId) -> Params {
    Params::new().with(AddressBookId::FIELD, id.value())
}

/// `None` asks for every address book.
pub fn encode_get_address_book_params(id: Option<AddressBookId>) -> Params {
    Params::new().with(AddressBookId::FIELD, id.map(AddressBookId::value))
}

pub fn encode_add_addresses_params(request: &AddAddresses) -> Params {
    let mut params = Params::new()
        .with(
            IdList::FIELD,
            request
                .id_list()
                .iter()
                .map(|id| id.value())
                .collect::<Vec<_>>(),
        )
        .with(
            EmailAddress::FIELD,
            request
                .emails()
                .iter()
                .map(EmailAddress::as_str)
                .collect::<Vec<_>>(),
        );

    if !request.labels().is_empty() {
        params.insert(
            LabelList::FIELD,
            request
                .labels()
                .as_slice()
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>(),
        );
    }

    let variables = request
        .variables()
        .iter()
        .filter(|vars| !vars.is_empty())
        .map(variables_param)
        .collect::<Vec<_>>();
    if !variables.is_empty() {
        params.insert(RecipientVariables::FIELD, ParamValue::List(variables));
    }

    params
}

fn variables_param(vars: &RecipientVariables) -> ParamValue {
    ParamValue::Map(
        vars.entries()
            .iter()
            .map(|(name, value)| (name.clone(), ParamValue::from(value.as_str())))
            .collect(),
    )
}

pub fn encode_activate_emails_params(id: AddressBookId, description: &Description) -> Params {
    Params::new()
        .with(AddressBookId::FIELD, id.value())
        .with(Description::FIELD, description.as_str())
}

pub fn encode_change_email_status_params(
    id: AddressBookId,
    email: &EmailAddress,
    status: EmailStatus,
) -> Params {
    Params::new()
        .with(AddressBookId::FIELD, id.value())
        .with(EmailAddress::FIELD, email.as_str())
        .with(EmailStatus::FIELD, status.value())
}

pub fn encode_del_email_params(id: AddressBookId, email: &EmailAddress) -> Params {
    Params::new()
        .with(AddressBookId::FIELD, id.value())
        .with(EmailAddress::FIELD, email.as_str())
}
