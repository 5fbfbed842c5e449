//! v3 `mail/send` request body.

use {
    crate::{Message, MessageEndPoint},
    sendgrid_json::Value,
};

fn endpoints(list: &[MessageEndPoint]) -> Value {
    list.iter().map(MessageEndPoint::to_value).collect()
}

impl Message {
    /// The request payload for this message.
    ///
    /// Keys are emitted in a fixed order: `personalizations`, `from`,
    /// `subject`, `content`. Missing cc, bcc, subject or bodies are left out.
    pub fn to_payload(&self) -> Value {
        let mut personalization = Value::object();
        personalization.insert("to", endpoints(self.to()));
        if let Some(cc) = self.cc() {
            personalization.insert("cc", endpoints(cc));
        }
        if let Some(bcc) = self.bcc() {
            personalization.insert("bcc", endpoints(bcc));
        }

        let mut payload = Value::object();
        payload.insert("personalizations", vec![personalization]);
        payload.insert("from", self.from().to_value());
        if let Some(subject) = self.subject() {
            payload.insert("subject", subject.as_str());
        }
        if !self.bodies().is_empty() {
            let content: Value = self.bodies().iter().map(|b| b.to_value()).collect();
            payload.insert("content", content);
        }
        payload
    }
}
