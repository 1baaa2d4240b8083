//! Client configuration.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::api::Transport;

/// Default endpoint of the JioSaavn web API.
pub const DEFAULT_BASE_URL: &str = "https://www.jiosaavn.com/api.php";

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Browser user agent sent by the default transport.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Options accepted by [`crate::SaavnApi::with_options`].
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use rsaavn::{ClientOptions, SaavnApi};
///
/// let options = ClientOptions::default()
///     .base_url("https://saavn.example.com/api.php")
///     .timeout(Duration::from_secs(5));
/// let api = SaavnApi::with_options(options).unwrap();
/// ```
#[derive(Clone)]
pub struct ClientOptions {
    pub base_url: String,
    /// Deadline for each request; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    /// Replaces the default reqwest transport.
    pub transport: Option<Arc<dyn Transport>>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            transport: None,
        }
    }
}

impl ClientOptions {
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}
