//! Authenticated session as seen by the form. Owned by whoever logs the user
//! in; the form only reads it.

use super::error::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionIdentity {
    user_id: Option<String>,
    token: Option<String>,
}

/// User id and bearer token, both present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub user_id: &'a str,
    pub token: &'a str,
}

impl SessionIdentity {
    pub fn new(user_id: Option<String>, token: Option<String>) -> Self {
        Self {
            user_id: user_id.filter(|value| !value.is_empty()),
            token: token.filter(|value| !value.is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn credentials(&self) -> Option<Credentials<'_>> {
        match (self.user_id(), self.token()) {
            (Some(user_id), Some(token)) => Some(Credentials { user_id, token }),
            _ => None,
        }
    }
}

/// Parse a user id the way the session provider hands it out: leading
/// whitespace and an optional sign, then the leading run of base-10 digits.
/// Anything after the digits is ignored.
pub fn parse_user_id(raw: &str) -> Result<i64, DomainError> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(DomainError::validation(format!(
            "user id `{raw}` is not a base-10 integer"
        )));
    }

    let magnitude: i64 = rest[..digits]
        .parse()
        .map_err(|_| DomainError::validation(format!("user id `{raw}` is out of range")))?;

    Ok(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_count_as_missing() {
        let session = SessionIdentity::new(Some(String::new()), Some("tok".into()));
        assert_eq!(session.user_id(), None);
        assert!(session.credentials().is_none());
    }

    #[test]
    fn credentials_require_both_parts() {
        let session = SessionIdentity::new(Some("12".into()), None);
        assert!(session.credentials().is_none());

        let session = SessionIdentity::new(Some("12".into()), Some("tok".into()));
        let creds = session.credentials().expect("credentials");
        assert_eq!(creds.user_id, "12");
        assert_eq!(creds.token, "tok");
    }

    #[test]
    fn parse_user_id_accepts_plain_integers() {
        assert_eq!(parse_user_id("42"), Ok(42));
        assert_eq!(parse_user_id("  -7"), Ok(-7));
        assert_eq!(parse_user_id("+15"), Ok(15));
    }

    #[test]
    fn parse_user_id_stops_at_first_non_digit() {
        assert_eq!(parse_user_id("12abc"), Ok(12));
        assert_eq!(parse_user_id("3.9"), Ok(3));
    }

    #[test]
    fn parse_user_id_rejects_missing_digits() {
        assert!(matches!(
            parse_user_id("abc"),
            Err(DomainError::Validation { .. })
        ));
        assert!(parse_user_id("-").is_err());
        assert!(parse_user_id("").is_err());
    }

    #[test]
    fn parse_user_id_rejects_overflow() {
        assert!(parse_user_id("99999999999999999999").is_err());
    }
}
