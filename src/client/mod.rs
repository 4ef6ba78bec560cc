//! Client layer: validates arguments, signs and sends requests, decodes replies.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    ActivationCode, AddAddresses, AddressBookId, AddressBookName, CampaignId, CreateCampaign,
    Currency, Description, EmailAddress, EmailStatus, LabelName, Page, Params, PrivateKey,
    PublicKey, SenderEmail, SenderName, ValidationError,
};
use crate::transport;

const DEFAULT_BASE_URL: &str = "http://atompark.com/api/email/3.0/";
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How signed requests travel to the service.
pub enum TransportMode {
    /// Form-encoded POST body (`key=..&sum=..&...`).
    #[default]
    Post,
    /// The same string appended to the URL as a GET query.
    Get,
}

#[derive(Debug, Clone)]
/// Atompark API key pair.
///
/// The public key travels with every request; the private key only salts the
/// request checksum.
pub struct Credentials {
    public_key: PublicKey,
    private_key: PrivateKey,
}

impl Credentials {
    /// Validate that both keys are non-empty.
    pub fn new(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            public_key: PublicKey::new(public_key)?,
            private_key: PrivateKey::new(private_key)?,
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`AtomparkClient`].
///
/// HTTP status codes are not inspected: whatever body comes back is decoded.
/// A body that is not JSON decodes to `Value::Null` rather than an error.
pub enum AtomparkError {
    /// HTTP client / transport failure (DNS, TLS, connect timeout, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The HTTP client could not be constructed; no request was attempted.
    #[error("HTTP transport unavailable: {0}")]
    TransportUnavailable(#[source] Box<dyn StdError + Send + Sync>),

    /// An argument was rejected before any network I/O.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`AtomparkClient`].
///
/// Use this to change the endpoint, the transport mode, timeouts or the user-agent.
pub struct AtomparkClientBuilder {
    credentials: Credentials,
    base_url: String,
    transport_mode: TransportMode,
    connect_timeout: Duration,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl AtomparkClientBuilder {
    /// Create a builder with the default endpoint, POST mode and a 30s connect timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            transport_mode: TransportMode::default(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL; the action name is appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn transport_mode(mut self, mode: TransportMode) -> Self {
        self.transport_mode = mode;
        self
    }

    /// Override the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`AtomparkClient`].
    pub fn build(self) -> Result<AtomparkClient, AtomparkError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.connect_timeout);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| AtomparkError::TransportUnavailable(Box::new(err)))?;

        Ok(AtomparkClient {
            credentials: self.credentials,
            base_url: self.base_url,
            transport_mode: self.transport_mode,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Atompark email API client.
///
/// Every method validates its arguments, signs the request, sends it to
/// `<base_url><action>` and returns the decoded JSON reply as-is. The client
/// keeps no state between calls.
pub struct AtomparkClient {
    credentials: Credentials,
    base_url: String,
    transport_mode: TransportMode,
    http: Arc<dyn HttpTransport>,
}

impl AtomparkClient {
    /// Create a client with default settings.
    ///
    /// For more customization, use [`AtomparkClient::builder`].
    pub fn new(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Result<Self, AtomparkError> {
        Self::builder(Credentials::new(public_key, private_key)?).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> AtomparkClientBuilder {
        AtomparkClientBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn transport_mode(&self) -> TransportMode {
        self.transport_mode
    }

    /// Run any action with caller-built parameters.
    ///
    /// `version` and `key` may be overridden through `params`; `action` always
    /// comes from the first argument. The action name must be ASCII letters and
    /// digits, since it is also the last URL path segment. `sum` is reserved
    /// for the request checksum.
    pub async fn call(&self, action: &str, params: Params) -> Result<Value, AtomparkError> {
        let action = action.trim();
        if action.is_empty() {
            return Err(ValidationError::Empty { field: "action" }.into());
        }
        if !action.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidAction {
                input: action.to_owned(),
            }
            .into());
        }
        if params.get(transport::SUM_FIELD).is_some() {
            return Err(ValidationError::ReservedField {
                field: transport::SUM_FIELD,
            }
            .into());
        }
        self.dispatch(action, params).await
    }

    async fn dispatch(&self, action: &str, params: Params) -> Result<Value, AtomparkError> {
        let signed = transport::sign(
            action,
            &params,
            self.credentials.public_key(),
            self.credentials.private_key(),
        );
        let query = transport::encode_signed_query(&signed);
        let url = format!("{}{}", self.base_url, action);

        tracing::debug!(action, mode = ?self.transport_mode, "sending request");
        let response = match self.transport_mode {
            TransportMode::Post => self.http.post_form(&url, query).await,
            TransportMode::Get => {
                let url = format!("{url}?{query}");
                self.http.get(&url).await
            }
        }
        .map_err(AtomparkError::Transport)?;
        tracing::debug!(action, status = response.status, "response received");

        Ok(transport::decode_json_response(action, &response.body))
    }

    // Address books

    /// Create an address book (`addAddressBook`).
    pub async fn add_address_book(&self, name: impl Into<String>) -> Result<Value, AtomparkError> {
        let name = AddressBookName::new(name)?;
        self.dispatch(
            "addAddressBook",
            transport::encode_add_address_book_params(&name),
        )
        .await
    }

    /// Remove an address book (`delAddressBook`).
    pub async fn del_address_book(&self, id: u64) -> Result<Value, AtomparkError> {
        let id = AddressBookId::new(id)?;
        self.dispatch("delAddressBook", transport::encode_del_address_book_params(id))
            .await
    }

    /// Fetch one address book, or all of them when `id` is `None` (`getAddressBook`).
    pub async fn get_address_book(&self, id: Option<u64>) -> Result<Value, AtomparkError> {
        let id = id.map(AddressBookId::new).transpose()?;
        self.dispatch("getAddressBook", transport::encode_get_address_book_params(id))
            .await
    }

    // Recipients

    /// Add recipients to one or more address books (`addAddresses`).
    pub async fn add_addresses(&self, request: AddAddresses) -> Result<Value, AtomparkError> {
        self.dispatch(
            "addAddresses",
            transport::encode_add_addresses_params(&request),
        )
        .await
    }

    /// Activate the recipients of an address book (`activateEmails`).
    pub async fn activate_emails(
        &self,
        address_book_id: u64,
        description: impl Into<String>,
    ) -> Result<Value, AtomparkError> {
        let id = AddressBookId::new(address_book_id)?;
        let description = Description::new(description)?;
        self.dispatch(
            "activateEmails",
            transport::encode_activate_emails_params(id, &description),
        )
        .await
    }

    /// Change a recipient's status (`changeEmailStatus`).
    pub async fn change_email_status(
        &self,
        address_book_id: u64,
        email: impl Into<String>,
        status: EmailStatus,
    ) -> Result<Value, AtomparkError> {
        let id = AddressBookId::new(address_book_id)?;
        let email = EmailAddress::new(email)?;
        self.dispatch(
            "changeEmailStatus",
            transport::encode_change_email_status_params(id, &email, status),
        )
        .await
    }

    /// Remove a recipient from an address book (`delEmail`).
    pub async fn del_email(
        &self,
        address_book_id: u64,
        email: impl Into<String>,
    ) -> Result<Value, AtomparkError> {
        let id = AddressBookId::new(address_book_id)?;
        let email = EmailAddress::new(email)?;
        self.dispatch("delEmail", transport::encode_del_email_params(id, &email))
            .await
    }

    // Campaigns

    /// Create a campaign (`createCampaign`).
    pub async fn create_campaign(&self, request: CreateCampaign) -> Result<Value, AtomparkError> {
        self.dispatch(
            "createCampaign",
            transport::encode_create_campaign_params(&request),
        )
        .await
    }

    /// List campaigns (`getCampaign`).
    pub async fn get_campaigns(&self, page: Page) -> Result<Value, AtomparkError> {
        self.dispatch("getCampaign", transport::encode_get_campaigns_params(page))
            .await
    }

    /// Aggregate statistics for a campaign (`getCampaignStats`).
    pub async fn get_campaign_stats(&self, campaign_id: u64) -> Result<Value, AtomparkError> {
        let id = CampaignId::new(campaign_id)?;
        self.dispatch(
            "getCampaignStats",
            transport::encode_get_campaign_stats_params(id),
        )
        .await
    }

    /// Per-recipient delivery statistics for a campaign (`getCampaignDeliveryStats`).
    pub async fn get_campaign_delivery_stats(
        &self,
        campaign_id: u64,
        page: Page,
    ) -> Result<Value, AtomparkError> {
        let id = CampaignId::new(campaign_id)?;
        self.dispatch(
            "getCampaignDeliveryStats",
            transport::encode_get_campaign_delivery_stats_params(id, page),
        )
        .await
    }

    // Senders

    /// List senders (`getSender`).
    pub async fn get_senders(&self, page: Page) -> Result<Value, AtomparkError> {
        self.dispatch("getSender", transport::encode_get_senders_params(page))
            .await
    }

    /// Register a sender (`addSender`).
    pub async fn add_sender(
        &self,
        sender_name: impl Into<String>,
        sender_email: impl Into<String>,
    ) -> Result<Value, AtomparkError> {
        let name = SenderName::new(sender_name)?;
        let email = SenderEmail::new(sender_email)?;
        self.dispatch(
            "addSender",
            transport::encode_add_sender_params(&name, &email),
        )
        .await
    }

    /// Ask the service to mail an activation code to the sender (`getSenderActivateCode`).
    pub async fn get_sender_activate_code(
        &self,
        sender_email: impl Into<String>,
    ) -> Result<Value, AtomparkError> {
        let email = SenderEmail::new(sender_email)?;
        self.dispatch(
            "getSenderActivateCode",
            transport::encode_sender_email_params(&email),
        )
        .await
    }

    /// Activate a sender with the mailed code (`activateSender`).
    pub async fn activate_sender(
        &self,
        sender_email: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<Value, AtomparkError> {
        let email = SenderEmail::new(sender_email)?;
        let code = ActivationCode::new(code)?;
        self.dispatch(
            "activateSender",
            transport::encode_activate_sender_params(&email, &code),
        )
        .await
    }

    /// Remove a sender (`delSender`).
    pub async fn del_sender(&self, sender_email: impl Into<String>) -> Result<Value, AtomparkError> {
        let email = SenderEmail::new(sender_email)?;
        self.dispatch("delSender", transport::encode_sender_email_params(&email))
            .await
    }

    // Account

    /// Account balance in `currency` (`getUserBalance`).
    ///
    /// Accepts `USD`, `EUR`, `GBP`, `RUR`, `RUB` or `UAH` in any letter case.
    pub async fn get_user_balance(
        &self,
        currency: impl AsRef<str>,
    ) -> Result<Value, AtomparkError> {
        let currency = currency.as_ref().parse::<Currency>()?;
        self.dispatch(
            "getUserBalance",
            transport::encode_get_user_balance_params(currency),
        )
        .await
    }

    // Labels

    /// List labels (`getLabels`).
    pub async fn get_labels(&self) -> Result<Value, AtomparkError> {
        self.dispatch("getLabels", transport::encode_get_labels_params())
            .await
    }

    /// Create a label (`addLabels`).
    pub async fn add_label(&self, label_name: impl Into<String>) -> Result<Value, AtomparkError> {
        let name = LabelName::new(label_name)?;
        self.dispatch("addLabels", transport::encode_label_params(&name))
            .await
    }

    /// Remove a label (`delLabels`).
    pub async fn del_label(&self, label_name: impl Into<String>) -> Result<Value, AtomparkError> {
        let name = LabelName::new(label_name)?;
        self.dispatch("delLabels", transport::encode_label_params(&name))
            .await
    }

    // Blacklist

    /// List blacklisted addresses (`getBlackList`).
    pub async fn get_blacklist(&self, page: Page) -> Result<Value, AtomparkError> {
        self.dispatch("getBlackList", transport::encode_get_blacklist_params(page))
            .await
    }

    /// Blacklist an address (`addBlackList`).
    pub async fn add_to_blacklist(
        &self,
        email: impl Into<String>,
        comment: Option<&str>,
    ) -> Result<Value, AtomparkError> {
        let email = EmailAddress::new(email)?;
        self.dispatch(
            "addBlackList",
            transport::encode_add_to_blacklist_params(&email, comment),
        )
        .await
    }

    /// Take an address off the blacklist (`delBlackList`).
    pub async fn del_from_blacklist(
        &self,
        email: impl Into<String>,
    ) -> Result<Value, AtomparkError> {
        let email = EmailAddress::new(email)?;
        self.dispatch(
            "delBlackList",
            transport::encode_del_from_blacklist_params(&email),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use md5::{Digest, Md5};
    use serde_json::json;

    use crate::domain::{ParamValue, RecipientVariables};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum RecordedRequest {
        Post { url: String, body: String },
        Get { url: String },
    }

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<RecordedRequest>,
        response_status: u16,
        response_body: String,
        fail: bool,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                    fail: false,
                })),
            }
        }

        fn failing() -> Self {
            let transport = Self::new(200, "");
            transport.state.lock().unwrap().fail = true;
            transport
        }

        fn requests(&self) -> Vec<RecordedRequest> {
            self.state.lock().unwrap().requests.clone()
        }

        fn last_post_body(&self) -> String {
            match self.requests().pop() {
                Some(RecordedRequest::Post { body, .. }) => body,
                other => panic!("expected a POST request, got {other:?}"),
            }
        }

        fn respond(
            &self,
            request: RecordedRequest,
        ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request);
            if state.fail {
                return Err(Box::new(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )));
            }
            Ok(HttpResponse {
                status: state.response_status,
                body: state.response_body.clone(),
            })
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_form<'a>(
            &'a self,
            url: &'a str,
            body: String,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                self.respond(RecordedRequest::Post {
                    url: url.to_owned(),
                    body,
                })
            })
        }

        fn get<'a>(
            &'a self,
            url: &'a str,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                self.respond(RecordedRequest::Get {
                    url: url.to_owned(),
                })
            })
        }
    }

    fn make_client(transport: FakeTransport) -> AtomparkClient {
        make_client_with_mode(transport, TransportMode::Post)
    }

    fn make_client_with_mode(transport: FakeTransport, mode: TransportMode) -> AtomparkClient {
        AtomparkClient {
            credentials: Credentials::new("pub123", "priv456").unwrap(),
            base_url: "https://example.invalid/api/email/3.0/".to_owned(),
            transport_mode: mode,
            http: Arc::new(transport),
        }
    }

    fn ok_transport() -> FakeTransport {
        FakeTransport::new(200, r#"{"result": true}"#)
    }

    fn md5_hex(input: &str) -> String {
        hex::encode(Md5::digest(input.as_bytes()))
    }

    fn body_param<'a>(body: &'a str, name: &str) -> Option<&'a str> {
        body.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then_some(value)
        })
    }

    #[tokio::test]
    async fn add_address_book_sends_signed_post_body() {
        let transport = FakeTransport::new(200, r#"{"result": {"id": 42}}"#);
        let client = make_client(transport.clone());

        let response = client.add_address_book("My List").await.unwrap();
        assert_eq!(response, json!({"result": {"id": 42}}));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let RecordedRequest::Post { url, body } = &requests[0] else {
            panic!("expected POST, got {:?}", requests[0]);
        };
        assert_eq!(url, "https://example.invalid/api/email/3.0/addAddressBook");
        assert!(body.starts_with("key=pub123&sum="), "{body}");
        assert_eq!(body_param(body, "name"), Some("My+List"));
        assert_eq!(body_param(body, "version"), Some("3.0"));
        assert_eq!(body_param(body, "action"), Some("addAddressBook"));

        let sum = body_param(body, "sum").unwrap();
        assert_eq!(sum.len(), 32);
        assert!(sum.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(sum, md5_hex("addAddressBookpub123My List3.0priv456"));
    }

    #[tokio::test]
    async fn get_mode_puts_signed_query_in_url() {
        let transport = ok_transport();
        let client = make_client_with_mode(transport.clone(), TransportMode::Get);

        client.get_labels().await.unwrap();

        let requests = transport.requests();
        let [RecordedRequest::Get { url }] = requests.as_slice() else {
            panic!("expected one GET, got {requests:?}");
        };
        let sum = md5_hex("getLabelspub1233.0priv456");
        assert_eq!(
            url,
            &format!(
                "https://example.invalid/api/email/3.0/getLabels?key=pub123&sum={sum}&action=getLabels&version=3.0"
            )
        );
    }

    #[tokio::test]
    async fn non_json_body_decodes_to_null() {
        let transport = FakeTransport::new(200, "<html>oops</html>");
        let client = make_client(transport);

        let response = client.get_labels().await.unwrap();
        assert_eq!(response, Value::Null);
    }

    #[tokio::test]
    async fn http_error_status_still_decodes_body() {
        let transport = FakeTransport::new(500, r#"{"error": "internal"}"#);
        let client = make_client(transport);

        let response = client.get_labels().await.unwrap();
        assert_eq!(response, json!({"error": "internal"}));
    }

    #[tokio::test]
    async fn transport_failure_is_surfaced() {
        let transport = FakeTransport::failing();
        let client = make_client(transport.clone());

        let err = client.get_labels().await.unwrap_err();
        assert!(matches!(err, AtomparkError::Transport(_)));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn validation_failures_never_reach_the_transport() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        let errors = vec![
            client.add_address_book("  ").await.unwrap_err(),
            client.del_address_book(0).await.unwrap_err(),
            client.get_address_book(Some(0)).await.unwrap_err(),
            client.activate_emails(1, "").await.unwrap_err(),
            client.activate_emails(0, "desc").await.unwrap_err(),
            client
                .change_email_status(1, "", EmailStatus::default())
                .await
                .unwrap_err(),
            client.del_email(1, " ").await.unwrap_err(),
            client.get_campaign_stats(0).await.unwrap_err(),
            client
                .get_campaign_delivery_stats(0, Page::default())
                .await
                .unwrap_err(),
            client.add_sender("", "shop@example.com").await.unwrap_err(),
            client.add_sender("Shop", "").await.unwrap_err(),
            client.get_sender_activate_code("").await.unwrap_err(),
            client.activate_sender("shop@example.com", "").await.unwrap_err(),
            client.del_sender("").await.unwrap_err(),
            client.get_user_balance("XXX").await.unwrap_err(),
            client.add_label("").await.unwrap_err(),
            client.del_label(" ").await.unwrap_err(),
            client.add_to_blacklist("", None).await.unwrap_err(),
            client.del_from_blacklist("").await.unwrap_err(),
            client.call(" ", Params::new()).await.unwrap_err(),
        ];

        for err in errors {
            assert!(
                matches!(err, AtomparkError::Validation(_)),
                "unexpected error: {err:?}"
            );
        }
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn get_user_balance_normalizes_currency_case() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        client.get_user_balance("usd").await.unwrap();
        assert_eq!(body_param(&transport.last_post_body(), "currency"), Some("USD"));

        client.get_user_balance(Currency::Uah).await.unwrap();
        assert_eq!(body_param(&transport.last_post_body(), "currency"), Some("UAH"));
    }

    #[tokio::test]
    async fn get_user_balance_rejects_unknown_currency() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        let err = client.get_user_balance("XXX").await.unwrap_err();
        assert!(matches!(
            err,
            AtomparkError::Validation(ValidationError::UnsupportedCurrency { .. })
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn scalar_id_and_single_element_list_send_identical_bodies() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        client
            .add_addresses(AddAddresses::new(5_u64, ["a@example.com"]).unwrap())
            .await
            .unwrap();
        client
            .add_addresses(AddAddresses::new(vec![5_u64], ["a@example.com"]).unwrap())
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }

    #[tokio::test]
    async fn comma_string_labels_and_list_labels_send_identical_bodies() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        let base = AddAddresses::new([1_u64, 2], ["a@example.com"]).unwrap();
        client
            .add_addresses(base.clone().with_labels("vip, new"))
            .await
            .unwrap();
        client
            .add_addresses(base.with_labels(vec!["vip", "new"]))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0], requests[1]);
    }

    #[tokio::test]
    async fn numeric_label_ids_send_the_same_body_as_strings() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        let base = AddAddresses::new(1_u64, ["a@example.com"]).unwrap();
        client
            .add_addresses(base.clone().with_labels(vec![10_u64, 11]))
            .await
            .unwrap();
        client
            .add_addresses(base.clone().with_labels("10, 11"))
            .await
            .unwrap();
        client.add_addresses(base.clone().with_labels(5_u64)).await.unwrap();
        client.add_addresses(base.with_labels("5")).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0], requests[1]);
        assert_eq!(requests[2], requests[3]);
    }

    #[tokio::test]
    async fn add_addresses_sends_array_fields_in_caller_order() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        let request = AddAddresses::new([9_u64, 3], ["b@example.com", "a@example.com"])
            .unwrap()
            .with_variables(vec![RecipientVariables::new().set("name", "Bea")]);
        client.add_addresses(request).await.unwrap();

        let body = transport.last_post_body();
        assert!(
            body.contains("email%5B%5D=b%40example.com&email%5B%5D=a%40example.com"),
            "{body}"
        );
        assert!(body.contains("id_list%5B%5D=9&id_list%5B%5D=3"), "{body}");
        assert!(body.contains("v%5B0%5D%5Bname%5D=Bea"), "{body}");

        // action, email[], id_list[], key, v[], version
        let expected =
            md5_hex("addAddressesb@example.coma@example.com93pub123Bea3.0priv456");
        assert_eq!(body_param(&body, "sum"), Some(expected.as_str()));
    }

    #[tokio::test]
    async fn create_campaign_sends_base64_body() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        let request = CreateCampaign::new("Shop", "shop@example.com", "Hi", "<h1>Hi</h1>", 3)
            .unwrap()
            .with_labels("1, 2");
        client.create_campaign(request).await.unwrap();

        let body = transport.last_post_body();
        assert_eq!(body_param(&body, "body"), Some("PGgxPkhpPC9oMT4%3D"));
        assert_eq!(body_param(&body, "labels"), Some("1%2C2"));
        assert_eq!(body_param(&body, "list_id"), Some("3"));
    }

    #[tokio::test]
    async fn paged_listings_omit_unset_bounds() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        client.get_campaigns(Page::default()).await.unwrap();
        let body = transport.last_post_body();
        assert_eq!(body_param(&body, "start"), None);
        assert_eq!(body_param(&body, "offset"), None);

        client
            .get_blacklist(Page {
                start: Some(0),
                offset: Some(25),
            })
            .await
            .unwrap();
        let body = transport.last_post_body();
        assert_eq!(body_param(&body, "start"), Some("0"));
        assert_eq!(body_param(&body, "offset"), Some("25"));
    }

    #[tokio::test]
    async fn call_honours_version_override() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        let params = Params::new()
            .with("version", " 3.1 ")
            .with("id", ParamValue::Int(8));
        client.call("getAddressBook", params).await.unwrap();

        let body = transport.last_post_body();
        assert_eq!(body_param(&body, "version"), Some("3.1"));
        assert_eq!(
            body_param(&body, "sum"),
            Some(md5_hex("getAddressBook8pub1233.1priv456").as_str())
        );
    }

    #[tokio::test]
    async fn endpoint_methods_use_expected_action_names() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        client.del_address_book(1).await.unwrap();
        client.get_address_book(None).await.unwrap();
        client.activate_emails(1, "ok").await.unwrap();
        client
            .change_email_status(1, "a@example.com", EmailStatus::new(2))
            .await
            .unwrap();
        client.del_email(1, "a@example.com").await.unwrap();
        client.get_campaign_stats(4).await.unwrap();
        client
            .get_campaign_delivery_stats(4, Page::default())
            .await
            .unwrap();
        client.get_senders(Page::default()).await.unwrap();
        client.add_sender("Shop", "shop@example.com").await.unwrap();
        client
            .get_sender_activate_code("shop@example.com")
            .await
            .unwrap();
        client
            .activate_sender("shop@example.com", "1234")
            .await
            .unwrap();
        client.del_sender("shop@example.com").await.unwrap();
        client.add_label("vip").await.unwrap();
        client.del_label("vip").await.unwrap();
        client
            .add_to_blacklist("spam@example.com", Some("complaint"))
            .await
            .unwrap();
        client.del_from_blacklist("spam@example.com").await.unwrap();

        let actions = transport
            .requests()
            .into_iter()
            .map(|request| match request {
                RecordedRequest::Post { url, .. } | RecordedRequest::Get { url } => url
                    .rsplit('/')
                    .next()
                    .unwrap_or_default()
                    .to_owned(),
            })
            .collect::<Vec<_>>();
        assert_eq!(
            actions,
            [
                "delAddressBook",
                "getAddressBook",
                "activateEmails",
                "changeEmailStatus",
                "delEmail",
                "getCampaignStats",
                "getCampaignDeliveryStats",
                "getSender",
                "addSender",
                "getSenderActivateCode",
                "activateSender",
                "delSender",
                "addLabels",
                "delLabels",
                "addBlackList",
                "delBlackList",
            ]
        );
    }

    #[tokio::test]
    async fn call_rejects_caller_supplied_sum() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        let err = client
            .call("getLabels", Params::new().with("sum", "deadbeef"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AtomparkError::Validation(ValidationError::ReservedField { field: "sum" })
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn call_rejects_action_names_that_would_escape_the_path() {
        let transport = ok_transport();
        let client = make_client(transport.clone());

        for action in ["getLabels?x=1", "../getLabels", "get Labels", "getLabels#x"] {
            let err = client.call(action, Params::new()).await.unwrap_err();
            assert!(
                matches!(
                    err,
                    AtomparkError::Validation(ValidationError::InvalidAction { .. })
                ),
                "{action}: {err:?}"
            );
        }
        assert!(transport.requests().is_empty());

        client.call(" getLabels ", Params::new()).await.unwrap();
        let requests = transport.requests();
        let [RecordedRequest::Post { url, body }] = requests.as_slice() else {
            panic!("expected one POST, got {requests:?}");
        };
        assert_eq!(url, "https://example.invalid/api/email/3.0/getLabels");
        assert_eq!(body.matches("sum=").count(), 1);
    }

    #[test]
    fn builder_defaults_to_thirty_second_connect_timeout() {
        let credentials = Credentials::new("pub123", "priv456").unwrap();
        let builder = AtomparkClient::builder(credentials);
        assert_eq!(builder.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(builder.connect_timeout, Duration::from_secs(30));
        assert_eq!(builder.timeout, None);

        let builder = builder.connect_timeout(Duration::from_secs(5));
        assert_eq!(builder.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn credentials_reject_empty_keys() {
        assert!(matches!(
            Credentials::new("", "priv"),
            Err(ValidationError::Empty { field: "key" })
        ));
        assert!(matches!(
            Credentials::new("pub", "  "),
            Err(ValidationError::Empty {
                field: "private_key"
            })
        ));
        assert!(matches!(
            AtomparkClient::new("", "priv"),
            Err(AtomparkError::Validation(_))
        ));
    }

    #[test]
    fn builder_applies_overrides() {
        let credentials = Credentials::new("pub123", "priv456").unwrap();
        let client = AtomparkClient::builder(credentials)
            .base_url("https://example.invalid/api")
            .transport_mode(TransportMode::Get)
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(60))
            .user_agent("atompark-email-tests")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "https://example.invalid/api/");
        assert_eq!(client.transport_mode(), TransportMode::Get);
        assert_eq!(client.credentials().public_key().as_str(), "pub123");
    }

    #[test]
    fn default_client_posts_to_atompark() {
        let client = AtomparkClient::new("pub123", "priv456").unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.transport_mode(), TransportMode::Post);
    }

    #[test]
    fn transport_mode_deserializes_from_lowercase() {
        let mode: TransportMode = serde_json::from_str(r#""get""#).unwrap();
        assert_eq!(mode, TransportMode::Get);
    }
}
