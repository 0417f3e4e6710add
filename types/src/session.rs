use eyre::WrapErr;
use jiff::Timestamp;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Result;

/// A session issued by the hosted backend, as the browser client stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(with = "token")]
    pub access_token: SecretString,
    #[serde(with = "token")]
    pub refresh_token: SecretString,
    #[serde(with = "unix_seconds")]
    pub expires_at: Timestamp,
    pub user: SessionUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Timestamp::now())
    }
}

/// Tokens are stored as plain strings and only exposed again on the way out.
mod token {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(token: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
        token.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SecretString, D::Error> {
        String::deserialize(deserializer).map(SecretString::from)
    }
}

mod unix_seconds {
    use jiff::Timestamp;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(ts.as_second())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = i64::deserialize(deserializer)?;
        Timestamp::from_second(seconds).map_err(D::Error::custom)
    }
}

pub fn encode_session(session: &Session) -> Result<String> {
    Ok(serde_json::to_string(session).wrap_err("failed to serialize session")?)
}

pub fn decode_session(encoded: &str) -> Result<Session> {
    Ok(serde_json::from_str(encoded).wrap_err("failed to parse session JSON")?)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
