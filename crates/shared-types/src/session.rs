use serde::{Deserialize, Serialize};

/// The signed-in user as far as this application knows them.
///
/// Backed by two browser storage keys written by the login flow: an
/// authentication marker (presence/absence only) and the email shown in the
/// header. There is no token, no expiry, and no server-side identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_roundtrips_through_json() {
        let session = Session::new("pat@example.org");
        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, parsed);
    }
}
