use std::fmt::{self, Display};

use crate::http_client::{error::Error as HttpClientError, response::Response};

#[derive(Debug, thiserror::Error)]
pub enum FailureCause {
    #[error("Unexpected HTTP status")]
    Status,

    #[error(transparent)]
    Transport(#[from] HttpClientError),

    #[error("Malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Request body could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// `status`, `status_text` and `body` are only filled in when the server
/// actually answered; a transport fault leaves them empty.
#[derive(Debug)]
pub struct Failure {
    pub status: Option<u16>,
    pub status_text: Option<String>,
    pub body: String,
    pub cause: FailureCause,
}

impl Failure {
    pub(crate) fn from_response(response: &Response) -> Self {
        Self {
            status: Some(response.status),
            status_text: response.status_text(),
            body: response.body_text(),
            cause: FailureCause::Status,
        }
    }

    pub(crate) fn decode(response: &Response, err: serde_json::Error) -> Self {
        Self {
            cause: FailureCause::Decode(err),
            ..Self::from_response(response)
        }
    }

    pub(crate) fn transport(err: HttpClientError) -> Self {
        Self::without_response(FailureCause::Transport(err))
    }

    pub(crate) fn encode(err: serde_json::Error) -> Self {
        Self::without_response(FailureCause::Encode(err))
    }

    fn without_response(cause: FailureCause) -> Self {
        Self {
            status: None,
            status_text: None,
            body: String::new(),
            cause,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(&self.cause, FailureCause::Transport(err) if err.is_timeout())
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.body.is_empty() && matches!(self.cause, FailureCause::Status) {
            return write!(f, "{}", self.body);
        }
        match (&self.cause, &self.status_text, self.status) {
            (FailureCause::Status, Some(text), _) => write!(f, "{}", text),
            (FailureCause::Status, None, Some(status)) => write!(f, "HTTP {}", status),
            (cause, _, _) => write!(f, "{}", cause),
        }
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.cause {
            FailureCause::Status => None,
            _ => Some(&self.cause),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MovieRestClientError {
    #[error(transparent)]
    NotFound(Failure),

    #[error(transparent)]
    NotCreated(Failure),
}

impl MovieRestClientError {
    pub fn failure(&self) -> &Failure {
        match self {
            MovieRestClientError::NotFound(failure) | MovieRestClientError::NotCreated(failure) => {
                failure
            }
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.failure().status
    }

    pub fn body(&self) -> &str {
        &self.failure().body
    }

    pub fn is_timeout(&self) -> bool {
        self.failure().is_timeout()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum OperationShape {
    Read,
    Write,
}

impl OperationShape {
    pub(crate) fn fail(self, failure: Failure) -> MovieRestClientError {
        match self {
            OperationShape::Read => MovieRestClientError::NotFound(failure),
            OperationShape::Write => MovieRestClientError::NotCreated(failure),
        }
    }
}
