use thiserror::Error;

pub const NETWORK_FALLBACK_MESSAGE: &str = "Network request failed";

/// Everything that can go wrong between a widget and the analytics API.
///
/// Every variant ends up as local display state except `Aborted`, which marks
/// a request the widget cancelled itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Transport(String),

    #[error("Request aborted")]
    Aborted,

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, FetchError::Aborted)
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => FetchError::Aborted,
            gloo_net::Error::JsError(js) => FetchError::Transport(transport_message(js.message)),
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Transport(transport_message(other.to_string())),
        }
    }
}

fn transport_message(message: String) -> String {
    if message.trim().is_empty() {
        NETWORK_FALLBACK_MESSAGE.to_string()
    } else {
        message
    }
}
