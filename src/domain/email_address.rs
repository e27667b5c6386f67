/// An address as typed by the caller, trimmed. The format itself is not
/// checked: the mail API is the one rejecting undeliverable addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<EmailAddress, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("Missing required fields".into())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
