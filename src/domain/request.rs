use crate::domain::validation::ValidationError;
use crate::domain::value::{
    AddressBookId, CampaignBody, EmailAddress, IdList, LabelList, RecipientVariables, SenderEmail,
    SenderName, Subject,
};

/// `addAddresses`: put recipients into one or more address books.
#[derive(Debug, Clone)]
pub struct AddAddresses {
    id_list: Vec<AddressBookId>,
    emails: Vec<EmailAddress>,
    labels: LabelList,
    variables: Vec<RecipientVariables>,
}

impl AddAddresses {
    /// Validate that there is at least one positive address book id and one email.
    pub fn new<E>(
        id_list: impl Into<IdList>,
        emails: impl IntoIterator<Item = E>,
    ) -> Result<Self, ValidationError>
    where
        E: Into<String>,
    {
        let id_list = id_list.into();
        if id_list.is_empty() {
            return Err(ValidationError::Empty {
                field: IdList::FIELD,
            });
        }
        let id_list = id_list
            .as_slice()
            .iter()
            .map(|id| {
                AddressBookId::new(*id).map_err(|_| ValidationError::ZeroId {
                    field: IdList::FIELD,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let emails = emails
            .into_iter()
            .map(EmailAddress::new)
            .collect::<Result<Vec<_>, _>>()?;
        if emails.is_empty() {
            return Err(ValidationError::Empty {
                field: EmailAddress::FIELD,
            });
        }

        Ok(Self {
            id_list,
            emails,
            labels: LabelList::default(),
            variables: Vec::new(),
        })
    }

    /// Attach labels, as a list or a comma-separated string.
    pub fn with_labels(mut self, labels: impl Into<LabelList>) -> Self {
        self.labels = labels.into();
        self
    }

    /// Attach per-recipient template variables, one entry per `v[]` slot.
    pub fn with_variables(mut self, variables: Vec<RecipientVariables>) -> Self {
        self.variables = variables;
        self
    }

    pub fn id_list(&self) -> &[AddressBookId] {
        &self.id_list
    }

    pub fn emails(&self) -> &[EmailAddress] {
        &self.emails
    }

    pub fn labels(&self) -> &LabelList {
        &self.labels
    }

    pub fn variables(&self) -> &[RecipientVariables] {
        &self.variables
    }
}

/// `createCampaign`: schedule a mailing to an address book.
#[derive(Debug, Clone)]
pub struct CreateCampaign {
    sender_name: SenderName,
    sender_email: SenderEmail,
    subject: Subject,
    body: CampaignBody,
    list_id: AddressBookId,
    name: String,
    labels: LabelList,
}

impl CreateCampaign {
    pub const LIST_ID_FIELD: &'static str = "list_id";
    pub const NAME_FIELD: &'static str = "name";

    pub fn new(
        sender_name: impl Into<String>,
        sender_email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        list_id: u64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            sender_name: SenderName::new(sender_name)?,
            sender_email: SenderEmail::new(sender_email)?,
            subject: Subject::new(subject)?,
            body: CampaignBody::new(body)?,
            list_id: AddressBookId::new(list_id).map_err(|_| ValidationError::ZeroId {
                field: Self::LIST_ID_FIELD,
            })?,
            name: String::new(),
            labels: LabelList::default(),
        })
    }

    /// Campaign name shown in the service UI. Empty by default.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_labels(mut self, labels: impl Into<LabelList>) -> Self {
        self.labels = labels.into();
        self
    }

    pub fn sender_name(&self) -> &SenderName {
        &self.sender_name
    }

    pub fn sender_email(&self) -> &SenderEmail {
        &self.sender_email
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn body(&self) -> &CampaignBody {
        &self.body
    }

    pub fn list_id(&self) -> AddressBookId {
        self.list_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &LabelList {
        &self.labels
    }
}
