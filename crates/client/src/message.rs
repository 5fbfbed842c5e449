use {
    crate::{MessageBody, MessageEndPoint, MessageError},
    derive_getters::Getters,
};

/// An immutable, validated email message.
///
/// Built through [`Message::new`] or [`crate::MessageBuilder`]; both refuse a
/// message without a valid sender or without main recipients.
#[derive(Getters, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// sender information
    from: MessageEndPoint,
    /// main recipients, never empty
    to: Vec<MessageEndPoint>,
    /// carbon copy recipients, `None` rather than empty
    cc: Option<Vec<MessageEndPoint>>,
    /// blind carbon copy recipients, `None` rather than empty
    bcc: Option<Vec<MessageEndPoint>>,
    /// `None` when blank
    subject: Option<String>,
    /// non-blank bodies in the order they were given
    bodies: Vec<MessageBody>,
}

impl Message {
    /// Validates and normalizes the parts of a message.
    ///
    /// Empty cc/bcc lists become `None`, a blank subject becomes `None` and
    /// blank bodies are dropped.
    pub fn new(
        from: MessageEndPoint,
        to: Vec<MessageEndPoint>,
        cc: Option<Vec<MessageEndPoint>>,
        bcc: Option<Vec<MessageEndPoint>>,
        subject: Option<String>,
        bodies: Vec<MessageBody>,
    ) -> Result<Self, MessageError> {
        if !from.is_valid() {
            return Err(MessageError::InvalidFrom);
        }
        if to.is_empty() {
            return Err(MessageError::MissingTo);
        }

        let cc = cc.filter(|list| !list.is_empty());
        let bcc = bcc.filter(|list| !list.is_empty());

        if let Some(invalid) = to
            .iter()
            .chain(cc.iter().flatten())
            .chain(bcc.iter().flatten())
            .find(|endpoint| !endpoint.is_valid())
        {
            return Err(MessageError::InvalidRecipient(invalid.email().clone()));
        }

        let subject = subject.filter(|s| !s.trim().is_empty());
        let bodies = bodies.into_iter().filter(|b| !b.is_blank()).collect();

        Ok(Self {
            from,
            to,
            cc,
            bcc,
            subject,
            bodies,
        })
    }

    /// Valid when the sender is valid and there is at least one main recipient.
    pub fn is_valid(&self) -> bool {
        self.from.is_valid() && !self.to.is_empty()
    }
}
