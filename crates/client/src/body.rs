use derive_getters::Getters;
use sendgrid_json::Value;

/// MIME type of a message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageBodyContentType {
    #[default]
    Text,
    Html,
}

impl MessageBodyContentType {
    pub fn mime_type(&self) -> &'static str {
        match self {
            MessageBodyContentType::Text => "text/plain",
            MessageBodyContentType::Html => "text/html",
        }
    }
}

#[derive(Getters, Debug, Clone, PartialEq, Eq)]
pub struct MessageBody {
    content_type: MessageBodyContentType,
    content: String,
}

impl MessageBody {
    pub fn new(content_type: MessageBodyContentType, content: impl Into<String>) -> Self {
        Self {
            content_type,
            content: content.into(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(MessageBodyContentType::Text, content)
    }

    pub fn html(content: impl Into<String>) -> Self {
        Self::new(MessageBodyContentType::Html, content)
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// `{"type": <mime>, "value": <content>}`
    pub fn to_value(&self) -> Value {
        let mut value = Value::object();
        value.insert("type", self.content_type.mime_type());
        value.insert("value", self.content.as_str());
        value
    }
}

impl From<&str> for MessageBody {
    fn from(content: &str) -> Self {
        Self::text(content)
    }
}

impl From<String> for MessageBody {
    fn from(content: String) -> Self {
        Self::text(content)
    }
}
