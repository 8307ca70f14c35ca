use std::fmt;
use thiserror::Error;

/// Which upstream service an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    YouTube,
    Gemini,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::YouTube => write!(f, "YouTube"),
            Service::Gemini => write!(f, "Gemini"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Please enter your {0} API key first (settings bar at the top).")]
    MissingCredential(Service),
    #[error("{message}")]
    Upstream { service: Service, message: String },
    #[error("Network error while calling {service}: {message}")]
    Network { service: Service, message: String },
    #[error("Unexpected {service} response: {message}")]
    MalformedResponse { service: Service, message: String },
}

impl ApiError {
    pub fn malformed(service: Service, err: impl fmt::Display) -> Self {
        ApiError::MalformedResponse {
            service,
            message: err.to_string(),
        }
    }
}

/// Failure reported by an [`HttpTransport`](crate::http::HttpTransport) before
/// any status code was received.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("could not build request: {0}")]
    Request(String),
    #[error("request failed: {0}")]
    Network(String),
}

impl TransportError {
    pub fn into_api_error(self, service: Service) -> ApiError {
        ApiError::Network {
            service,
            message: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_names_the_service() {
        let msg = ApiError::MissingCredential(Service::Gemini).to_string();
        assert!(msg.contains("Gemini API key"));
    }

    #[test]
    fn upstream_error_displays_upstream_message_verbatim() {
        let err = ApiError::Upstream {
            service: Service::YouTube,
            message: "API key not valid. Please pass a valid API key.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API key not valid. Please pass a valid API key."
        );
    }
}
