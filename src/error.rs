//! Error types for the JioSaavn client.
//!
//! Every failure is funneled into [`SaavnError`], which carries one of the six
//! [`ErrorKind`]s. Public client operations never return the error directly;
//! they hand back an [`ApiResult`] instead.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Free-form debugging context attached to an error (endpoint, entity id, ...).
pub type Context = BTreeMap<String, String>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The closed set of error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The transport failed (connection, timeout, ...).
    Network,
    /// Upstream returned a failure envelope or an unusable payload.
    Api,
    /// Caller-supplied input is malformed.
    Validation,
    /// A normalized entity failed the validity check.
    NotFound,
    /// The operation is intentionally disabled.
    DeprecatedMethod,
    /// Anything else.
    Unknown,
}

impl ErrorKind {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Network => "NETWORK",
            ErrorKind::Api => "API",
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::DeprecatedMethod => "DEPRECATED_METHOD",
            ErrorKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Structured error for all client operations.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SaavnError {
    message: String,
    kind: ErrorKind,
    #[source]
    cause: Option<BoxError>,
    status: Option<u16>,
    context: Context,
}

impl SaavnError {
    /// Create a new error of the given kind.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            message: message.into(),
            kind,
            cause: None,
            status: None,
            context: Context::new(),
        }
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorKind::Api, message)
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Error for an operation that has been switched off.
    pub fn deprecated(method: &str) -> Self {
        Self::new(
            ErrorKind::DeprecatedMethod,
            format!("{} is no longer supported by the upstream service", method),
        )
        .with_context("method", method)
    }

    /// Attach a context entry, replacing any previous value for the key.
    pub fn with_context<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attach an HTTP status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the underlying cause.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Machine-readable code of the kind.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Wrap an arbitrary failure into a structured error of `kind`.
    ///
    /// An existing [`SaavnError`] is re-tagged and its context merged (new
    /// keys win). Anything else gets its message extracted and becomes the
    /// cause of a fresh error.
    pub fn wrap(thrown: impl Into<Thrown>, kind: ErrorKind, context: Context) -> Self {
        match thrown.into() {
            Thrown::Saavn(mut err) => {
                err.kind = kind;
                err.context.extend(context);
                err
            }
            Thrown::Error(cause) => Self {
                message: cause.to_string(),
                kind,
                cause: Some(cause),
                status: None,
                context,
            },
            Thrown::Message(message) => Self {
                message,
                kind,
                cause: None,
                status: None,
                context,
            },
            Thrown::Value(value) => Self {
                message: message_from_value(&value),
                kind,
                cause: None,
                status: None,
                context,
            },
        }
    }

    /// Pick a kind for an arbitrary failure without an explicit hint.
    pub fn classify(thrown: impl Into<Thrown>) -> Self {
        match thrown.into() {
            Thrown::Saavn(err) => err,
            Thrown::Error(cause) => {
                let cause = match cause.downcast::<reqwest::Error>() {
                    Ok(err) => return SaavnError::from(*err),
                    Err(other) => other,
                };
                let kind = if cause.is::<serde_json::Error>() {
                    ErrorKind::Api
                } else if cause.is::<std::io::Error>() {
                    ErrorKind::Network
                } else {
                    ErrorKind::Unknown
                };
                Self::wrap(Thrown::Error(cause), kind, Context::new())
            }
            other => Self::wrap(other, ErrorKind::Unknown, Context::new()),
        }
    }

    /// Flatten into a serializable record for log sinks.
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord::from_error(self)
    }
}

impl From<reqwest::Error> for SaavnError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_decode() {
            ErrorKind::Api
        } else {
            ErrorKind::Network
        };
        let status = err.status().map(|s| s.as_u16());
        let mut wrapped = Self::new(kind, err.to_string()).with_cause(err);
        wrapped.status = status;
        wrapped
    }
}

impl From<serde_json::Error> for SaavnError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Api, format!("Invalid JSON payload: {}", err)).with_cause(err)
    }
}

/// Anything that can be raised inside an operation.
#[derive(Debug)]
pub enum Thrown {
    /// Already structured.
    Saavn(SaavnError),
    /// Any other error value.
    Error(BoxError),
    /// A bare message.
    Message(String),
    /// An arbitrary JSON value (e.g. an upstream error object).
    Value(Value),
}

impl From<SaavnError> for Thrown {
    fn from(err: SaavnError) -> Self {
        Thrown::Saavn(err)
    }
}

impl From<BoxError> for Thrown {
    fn from(err: BoxError) -> Self {
        match err.downcast::<SaavnError>() {
            Ok(saavn) => Thrown::Saavn(*saavn),
            Err(other) => Thrown::Error(other),
        }
    }
}

impl From<reqwest::Error> for Thrown {
    fn from(err: reqwest::Error) -> Self {
        Thrown::Error(Box::new(err))
    }
}

impl From<serde_json::Error> for Thrown {
    fn from(err: serde_json::Error) -> Self {
        Thrown::Error(Box::new(err))
    }
}

impl From<std::io::Error> for Thrown {
    fn from(err: std::io::Error) -> Self {
        Thrown::Error(Box::new(err))
    }
}

impl From<String> for Thrown {
    fn from(message: String) -> Self {
        Thrown::Message(message)
    }
}

impl From<&str> for Thrown {
    fn from(message: &str) -> Self {
        Thrown::Message(message.to_string())
    }
}

impl From<Value> for Thrown {
    fn from(value: Value) -> Self {
        Thrown::Value(value)
    }
}

fn message_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "Unknown error".to_string(),
        Value::Object(map) => ["message", "msg", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(|m| m.as_str()))
            .map(|m| m.to_string())
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}

macro_rules! legacy_codes {
    ($($variant:ident => $name:literal => $kind:ident),+ $(,)?) => {
        /// Error codes of the older, wider taxonomy.
        ///
        /// Kept only so that codes persisted or logged by older consumers can
        /// be mapped onto [`ErrorKind`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum LegacyCode {
            $($variant),+
        }

        impl LegacyCode {
            pub const ALL: &'static [LegacyCode] = &[$(LegacyCode::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(LegacyCode::$variant => $name),+
                }
            }

            /// The canonical kind this code maps to.
            pub fn kind(&self) -> ErrorKind {
                match self {
                    $(LegacyCode::$variant => ErrorKind::$kind),+
                }
            }
        }

        impl FromStr for LegacyCode {
            type Err = SaavnError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($name => Ok(LegacyCode::$variant),)+
                    other => Err(SaavnError::validation(format!("Unknown legacy error code: {}", other))),
                }
            }
        }
    };
}

legacy_codes! {
    NetworkError => "NETWORK_ERROR" => Network,
    Timeout => "TIMEOUT" => Network,
    ConnectionRefused => "CONNECTION_REFUSED" => Network,
    RequestFailed => "REQUEST_FAILED" => Network,
    IoError => "IO_ERROR" => Network,
    ApiError => "API_ERROR" => Api,
    InvalidResponse => "INVALID_RESPONSE" => Api,
    ParseError => "PARSE_ERROR" => Api,
    NoData => "NO_DATA" => Api,
    UpstreamFailure => "UPSTREAM_FAILURE" => Api,
    QuotaExceeded => "QUOTA_EXCEEDED" => Api,
    BadCredentials => "BAD_CREDENTIALS" => Api,
    NoRightOnMedia => "NO_RIGHT_ON_MEDIA" => Api,
    InvalidLink => "INVALID_LINK" => Validation,
    InvalidId => "INVALID_ID" => Validation,
    InvalidQuery => "INVALID_QUERY" => Validation,
    InvalidPage => "INVALID_PAGE" => Validation,
    InvalidLimit => "INVALID_LIMIT" => Validation,
    MissingParameter => "MISSING_PARAMETER" => Validation,
    SongNotFound => "SONG_NOT_FOUND" => NotFound,
    AlbumNotFound => "ALBUM_NOT_FOUND" => NotFound,
    ArtistNotFound => "ARTIST_NOT_FOUND" => NotFound,
    PlaylistNotFound => "PLAYLIST_NOT_FOUND" => NotFound,
    StationNotFound => "STATION_NOT_FOUND" => NotFound,
    DeprecatedMethod => "DEPRECATED_METHOD" => DeprecatedMethod,
    CryptoError => "CRYPTO_ERROR" => Unknown,
    UnknownError => "UNKNOWN_ERROR" => Unknown,
}

/// Serializable snapshot of any error, for observability sinks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    pub name: String,
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub context: Context,
    /// Messages of the source chain, outermost first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl ErrorRecord {
    /// Build a record from any error, structured or not.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        match err.downcast_ref::<SaavnError>() {
            Some(saavn) => Self {
                name: "SaavnError".to_string(),
                message: saavn.message.clone(),
                code: saavn.code().to_string(),
                status: saavn.status,
                context: saavn.context.clone(),
                causes,
            },
            None => Self {
                name: "Error".to_string(),
                message: err.to_string(),
                code: ErrorKind::Unknown.code().to_string(),
                status: None,
                context: Context::new(),
                causes,
            },
        }
    }

    /// Build a record from a raw thrown value.
    pub fn from_thrown(thrown: &Thrown) -> Self {
        match thrown {
            Thrown::Saavn(err) => Self::from_error(err),
            Thrown::Error(err) => Self::from_error(err.as_ref()),
            Thrown::Message(message) => Self::unstructured(message.clone()),
            Thrown::Value(value) => Self::unstructured(message_from_value(value)),
        }
    }

    fn unstructured(message: String) -> Self {
        Self {
            name: "Unknown".to_string(),
            message,
            code: ErrorKind::Unknown.code().to_string(),
            status: None,
            context: Context::new(),
            causes: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Outcome of every public client operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success { data: T },
    Failure { message: String, code: ErrorKind },
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    /// Borrow the payload of a successful result.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Success { data } => Some(data),
            ApiResult::Failure { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResult::Success { data } => Some(data),
            ApiResult::Failure { .. } => None,
        }
    }

    /// Error code of a failed result.
    pub fn code(&self) -> Option<ErrorKind> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure { code, .. } => Some(*code),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        match self {
            ApiResult::Success { data } => ApiResult::Success { data: f(data) },
            ApiResult::Failure { message, code } => ApiResult::Failure { message, code },
        }
    }
}

impl<T> From<Result<T>> for ApiResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => ApiResult::Success { data },
            Err(err) => ApiResult::Failure {
                message: err.message,
                code: err.kind,
            },
        }
    }
}

impl<T: Serialize> Serialize for ApiResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ApiResult::Success { data } => {
                let mut state = serializer.serialize_struct("ApiResult", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            ApiResult::Failure { message, code } => {
                let mut state = serializer.serialize_struct("ApiResult", 3)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("message", message)?;
                state.serialize_field("code", code)?;
                state.end()
            }
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, SaavnError>;
