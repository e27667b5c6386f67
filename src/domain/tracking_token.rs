use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

const TOKEN_LENGTH: usize = 25;

/// Per-send identifier embedded in the pixel and click URLs, so a tracking hit
/// can be tied to the exact record it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingToken(String);

impl TrackingToken {
    pub fn generate() -> Self {
        let mut rng = thread_rng();
        let token = std::iter::repeat_with(|| rng.sample(Alphanumeric))
            .map(char::from)
            .take(TOKEN_LENGTH)
            .collect();
        Self(token)
    }

    pub fn parse(s: String) -> Result<TrackingToken, String> {
        let well_formed =
            s.chars().count() == TOKEN_LENGTH && s.chars().all(|c| c.is_ascii_alphanumeric());
        if well_formed {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid tracking token", s))
        }
    }
}

impl AsRef<str> for TrackingToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackingToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
