/// The only error shape that leaves the API client
///
/// `status` is the HTTP status code, or `0` when the request never produced a
/// usable response (connection failure, unreadable or undecodable body).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    /// Status reserved for transport-level failures
    pub const NETWORK_STATUS: u16 = 0;

    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Non-success HTTP status. The response body is never inspected.
    pub fn http(status: u16) -> Self {
        Self::new(status, format!("HTTP error! status: {}", status))
    }

    pub fn network(cause: impl std::fmt::Display) -> Self {
        Self::new(Self::NETWORK_STATUS, format!("Network error: {}", cause))
    }

    pub fn is_network(&self) -> bool {
        self.status == Self::NETWORK_STATUS
    }
}
