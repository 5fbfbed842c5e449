//! Response parsing utilities for the HTTP sender

use {
    crate::MessageSenderResult,
    anyhow::Context,
    reqwest::Response,
    tap::TapFallible,
    tracing::{instrument, trace, warn},
};

/// Header carrying the id the API assigned to an accepted message.
pub const MESSAGE_ID_HEADER: &str = "X-Message-Id";

impl super::sender::HttpV3MessageSender {
    #[instrument(
        name = "sendgrid.response.parse",
        skip(self, res),
        fields(status = res.status().as_u16()),
        err
    )]
    pub(crate) async fn parse_response(&self, res: Response) -> anyhow::Result<MessageSenderResult> {
        let status = res.status().as_u16();

        // read the header before the body consumes the response
        let message_id = res
            .headers()
            .get(MESSAGE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|s| s.to_string());

        trace!("{} header: {:?}", MESSAGE_ID_HEADER, message_id);

        let body = res
            .text()
            .await
            .context("failed to read response text")
            .tap_err(|e| tracing::error!("failed to read response body: {:?}", e))?;

        let result = MessageSenderResult::from_parts(status, message_id, &body);
        if !result.is_success() {
            warn!("message rejected: {}", result);
        }
        Ok(result)
    }
}
