use {
    crate::{Message, MessageBody, MessageEndPoint, MessageError},
    tracing::trace,
};

/// Fluent construction of a [`Message`].
///
/// ```rust
/// use sendgrid_client::{MessageBody, MessageBuilder, MessageEndPoint};
///
/// let message = MessageBuilder::default()
///     .set_from("you@domain.ext")
///     .add_to("alice@another.domain.ext")
///     .add_ccs([MessageEndPoint::new("bob", "bob@domain.ext"), "charly@domain.ext".into()])
///     .set_subject("congrats!")
///     .add_body(MessageBody::html("congrats for sending email in HTML!"))
///     .build()
///     .unwrap();
///
/// assert_eq!(message.cc().as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    from: Option<MessageEndPoint>,
    to: Vec<MessageEndPoint>,
    cc: Vec<MessageEndPoint>,
    bcc: Vec<MessageEndPoint>,
    subject: Option<String>,
    bodies: Vec<MessageBody>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_from(mut self, from: impl Into<MessageEndPoint>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn add_to(mut self, to: impl Into<MessageEndPoint>) -> Self {
        self.to.push(to.into());
        self
    }

    pub fn add_tos<I>(mut self, to: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MessageEndPoint>,
    {
        self.to.extend(to.into_iter().map(Into::into));
        self
    }

    pub fn add_cc(mut self, cc: impl Into<MessageEndPoint>) -> Self {
        self.cc.push(cc.into());
        self
    }

    pub fn add_ccs<I>(mut self, cc: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MessageEndPoint>,
    {
        self.cc.extend(cc.into_iter().map(Into::into));
        self
    }

    pub fn add_bcc(mut self, bcc: impl Into<MessageEndPoint>) -> Self {
        self.bcc.push(bcc.into());
        self
    }

    pub fn add_bccs<I>(mut self, bcc: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MessageEndPoint>,
    {
        self.bcc.extend(bcc.into_iter().map(Into::into));
        self
    }

    pub fn set_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Replaces every body with a single plain text one.
    pub fn set_body(mut self, text: impl Into<String>) -> Self {
        self.bodies = vec![MessageBody::text(text)];
        self
    }

    pub fn add_body(mut self, body: impl Into<MessageBody>) -> Self {
        self.bodies.push(body.into());
        self
    }

    pub fn build(self) -> Result<Message, MessageError> {
        trace!(
            to = self.to.len(),
            cc = self.cc.len(),
            bcc = self.bcc.len(),
            bodies = self.bodies.len(),
            "building message"
        );

        let from = self.from.ok_or(MessageError::InvalidFrom)?;
        Message::new(
            from,
            self.to,
            Some(self.cc),
            Some(self.bcc),
            self.subject,
            self.bodies,
        )
    }
}
