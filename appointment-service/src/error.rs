use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Application-level errors for the appointment service.
///
/// Each variant maps to a GraphQL error carrying a `code` extension.
#[derive(Debug, Error)]
pub enum AppointmentServiceError {
    /// No appointment with the given id exists.
    #[error("Cita no encontrada")]
    NotFound { id: String },

    /// Unexpected internal failure.
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppointmentServiceError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn is_server_error(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

impl ErrorExtensions for AppointmentServiceError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();

        if self.is_server_error() {
            tracing::error!(error = %self, code, "Server error");
        } else {
            tracing::warn!(error = %self, code, "Client error");
        }

        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", code);
            if let Self::NotFound { id } = self {
                e.set("id", id.as_str());
            }
        })
    }
}
