use derive_getters::Getters;
use sendgrid_json::Value;
use std::fmt::{Display, Formatter};

/// A sender or recipient: an address with an optional display name.
#[derive(Getters, Debug, Clone, PartialEq, Eq)]
pub struct MessageEndPoint {
    /// display name shown by mail clients
    name: Option<String>,
    /// the email address
    email: String,
}

impl MessageEndPoint {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: if name.trim().is_empty() { None } else { Some(name) },
            email: email.into(),
        }
    }

    /// An endpoint without a display name.
    pub fn from_email(email: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
        }
    }

    /// Valid when the address is not blank and contains an `@`.
    pub fn is_valid(&self) -> bool {
        let email = self.email.trim();
        !email.is_empty() && email.contains('@')
    }

    /// `{"email": ..., "name": ...}`, leaving out a missing name.
    pub fn to_value(&self) -> Value {
        let mut value = Value::object();
        value.insert("email", self.email.as_str());
        if let Some(name) = &self.name {
            value.insert("name", name.as_str());
        }
        value
    }
}

impl From<&str> for MessageEndPoint {
    fn from(email: &str) -> Self {
        Self::from_email(email)
    }
}

impl From<String> for MessageEndPoint {
    fn from(email: String) -> Self {
        Self::from_email(email)
    }
}

impl Display for MessageEndPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.email),
            None => f.write_str(&self.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        assert!(MessageEndPoint::from("you@domain.ext").is_valid());
        assert!(!MessageEndPoint::from("").is_valid());
        assert!(!MessageEndPoint::from("   ").is_valid());
        assert!(!MessageEndPoint::from("not-an-address").is_valid());
    }

    #[test]
    fn test_blank_name_is_dropped() {
        let endpoint = MessageEndPoint::new(" ", "bob@domain.ext");
        assert_eq!(endpoint.name(), &None);
        assert_eq!(endpoint.to_string(), "bob@domain.ext");
    }

    #[test]
    fn test_to_value() {
        let named = MessageEndPoint::new("bob", "bob@domain.ext");
        assert_eq!(
            named.to_value().to_string(),
            r#"{"email":"bob@domain.ext","name":"bob"}"#
        );
        assert_eq!(named.to_string(), "bob <bob@domain.ext>");

        let bare = MessageEndPoint::from("charly@domain.ext");
        assert_eq!(bare.to_value().to_string(), r#"{"email":"charly@domain.ext"}"#);
    }
}
