use std::path::PathBuf;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the application
#[derive(Debug)]
pub enum Error {
    IoError(std::io::Error),
    ParseError { file: PathBuf, message: String },
    /// An expected symbol or schema name is absent from the SDK source
    NotFound(String),
    /// A method's return type is not a recognized asynchronous-result wrapper
    InvalidReturnType { method: String, detail: String },
    /// The table-of-contents document has no section with the expected header
    SectionNotFound(String),
    /// Non-success response from the documentation host, with the body attached
    RemoteApi { status: u16, body: String },
    /// Required external configuration is missing
    Configuration(String),
    SerializationError(String),
    /// Transport-level HTTP failure (connection, TLS, timeout)
    Http(reqwest::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::IoError(e) => write!(f, "IO error: {}", e),
            Error::ParseError { file, message } => {
                write!(f, "parse error {}: {}", file.display(), message)
            }
            Error::NotFound(what) => write!(f, "not found: {}", what),
            Error::InvalidReturnType { method, detail } => {
                write!(f, "invalid return type on `{}`: {}", method, detail)
            }
            Error::SectionNotFound(header) => {
                write!(f, "section `{}` not found in table of contents", header)
            }
            Error::RemoteApi { status, body } => {
                write!(f, "documentation host returned {}: {}", status, body)
            }
            Error::Configuration(msg) => write!(f, "configuration error: {}", msg),
            Error::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            Error::Http(e) => write!(f, "HTTP error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(e) => Some(e),
            Error::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::SerializationError(format!("YAML serialization error: {}", err))
    }
}

impl From<syn::Error> for Error {
    fn from(err: syn::Error) -> Self {
        Error::ParseError {
            file: PathBuf::from("<unknown>"),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
