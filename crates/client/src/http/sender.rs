//! Core HTTP sender struct and constructors

use {
    crate::{config::SenderConfig, Message, MessageSenderResult},
    anyhow::Context,
    reqwest::{header::CONTENT_TYPE, Client, Request},
    sendgrid_json::stringify,
    tracing::{debug, instrument},
};

/// Sends messages through the v3 `mail/send` endpoint, authenticating with
/// an API key as bearer token.
#[derive(Clone, Debug)]
pub struct HttpV3MessageSender {
    pub(crate) config: SenderConfig,
    pub(crate) http: Client,
}

impl HttpV3MessageSender {
    /// Creates a sender for the public endpoint.
    ///
    /// # Example
    /// ```rust
    /// use sendgrid_client::HttpV3MessageSender;
    ///
    /// let sender = HttpV3MessageSender::new("<YOUR_API_KEY_HERE>").unwrap();
    /// assert_eq!(sender.config().endpoint.as_str(), "https://api.sendgrid.com/v3/mail/send");
    /// ```
    pub fn new(api_key: impl Into<String>) -> anyhow::Result<Self> {
        Self::from_config(SenderConfig::new(api_key))
    }

    pub fn from_config(config: SenderConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self { config, http })
    }

    /// Creates a sender from `SENDGRID_*` environment variables, see
    /// [`crate::config`].
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_config(SenderConfig::from_env()?)
    }

    pub fn config(&self) -> &SenderConfig {
        &self.config
    }

    /// The JSON text sent for `message`.
    pub fn request_body(&self, message: &Message) -> String {
        stringify(&message.to_payload(), self.config.minified)
    }

    /// Prepares the POST request for `message` without sending it.
    pub fn build_request(&self, message: &Message) -> anyhow::Result<Request> {
        self.http
            .post(self.config.endpoint.clone())
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(self.request_body(message))
            .build()
            .context(format!(
                "failed to build request for {}",
                &self.config.endpoint
            ))
    }

    /// Sends `message` and reports how the API answered.
    ///
    /// Transport failures are errors; rejections by the API are returned as a
    /// [`MessageSenderResult`] that is not successful.
    #[instrument(
        name = "sendgrid.message.send",
        skip(self, message),
        fields(
            endpoint = %self.config.endpoint,
            to = message.to().len()
        ),
        err
    )]
    pub async fn send(&self, message: &Message) -> anyhow::Result<MessageSenderResult> {
        let request = self.build_request(message)?;
        debug!("📡 sending message to {}", request.url());

        let res = self
            .http
            .execute(request)
            .await
            .context(format!("failed to send request to {}", &self.config.endpoint))?;

        debug!("📨 received response with status {}", res.status());
        self.parse_response(res).await
    }
}
