use crate::domain::EmailAddress;

#[derive(Debug, Clone)]
pub struct EmailSubject(String);

impl EmailSubject {
    pub fn parse(s: String) -> Result<EmailSubject, String> {
        if s.trim().is_empty() {
            Err("Missing required fields".into())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for EmailSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Caller supplied HTML fragment. Kept verbatim, never rendered or escaped.
#[derive(Debug, Clone)]
pub struct EmailBody(String);

impl EmailBody {
    pub fn parse(s: String) -> Result<EmailBody, String> {
        if s.trim().is_empty() {
            Err("Missing required fields".into())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for EmailBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct NewEmail {
    pub recipient: EmailAddress,
    pub subject: EmailSubject,
    pub body: EmailBody,
}
