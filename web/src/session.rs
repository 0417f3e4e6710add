use dioxus::document::eval;
use nav::SessionProvider;
use types::{Result, Session, decode_session, err};

/// Reads the session the backend client keeps in browser local storage.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    key: String,
}

impl BrowserSession {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionProvider for BrowserSession {
    async fn current_session(&self) -> Result<Option<Session>> {
        let key = serde_json::to_string(&self.key).map_err(|e| err!("invalid session key: {}", e))?;
        let js = format!("dioxus.send(window.localStorage.getItem({}))", key);

        let stored = eval(&js)
            .recv::<Option<String>>()
            .await
            .map_err(|e| err!("failed to read stored session: {}", e))?;

        stored.as_deref().map(decode_session).transpose()
    }
}
