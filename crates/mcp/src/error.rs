use std::error;
use std::fmt::{self, Display};
use std::time::Duration;

use serde_json::Value;

/// Describes a failure while talking to the tool server.
#[derive(Debug)]
pub enum Error {
    /// The child process could not be spawned, the stream was closed
    /// before a response arrived, or the client is not in a state that
    /// can serve requests.
    Transport(String),
    /// The response line was not a well-formed protocol record.
    Parse(serde_json::Error),
    /// The response was well-formed but violated the protocol, such as
    /// carrying an id that does not match the request.
    Protocol(String),
    /// The server answered with an error payload.
    Remote(Value),
    /// The bounded wait of the blocking entry point elapsed.
    Timeout(Duration),
}

impl Error {
    /// Creates a transport error with the given message.
    #[inline]
    pub(crate) fn transport<S: Into<String>>(message: S) -> Self {
        Error::Transport(message.into())
    }

    /// Creates a protocol error with the given message.
    #[inline]
    pub(crate) fn protocol<S: Into<String>>(message: S) -> Self {
        Error::Protocol(message.into())
    }

    /// Creates the error for a stream that closed without a response.
    #[inline]
    pub(crate) fn no_response() -> Self {
        Error::Transport("no response from server".to_owned())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(message) => write!(f, "{message}"),
            Error::Parse(err) => {
                write!(f, "malformed response from server: {err}")
            }
            Error::Protocol(message) => write!(f, "{message}"),
            Error::Remote(payload) => write!(f, "server error: {payload}"),
            Error::Timeout(duration) => {
                write!(f, "timed out after {:?}", duration)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    #[inline]
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_response_message() {
        let err = Error::no_response();
        assert!(format!("{err}").contains("no response"));
    }
}
