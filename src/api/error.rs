use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Network-level failure (DNS, refused connection, timeout, TLS, or an
    /// unreadable body). The cause is carried on the source chain.
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a status outside 2xx; the response body is
    /// carried along as diagnostic text.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Base URL, endpoint and encoded parameters did not form a valid URL.
    #[error("invalid request URL")]
    Url(#[from] url::ParseError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
