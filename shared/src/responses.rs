use serde::Serialize;

/// Response for the `/headpat` health check endpoint.
#[derive(Debug, Serialize)]
pub struct HeadpatResponse {
    pub message: &'static str,
    pub service: &'static str,
}

impl HeadpatResponse {
    pub fn healthy(service: &'static str) -> Self {
        Self {
            message: "nyaa~! all systems operational, senpai! (=^-w-^=)",
            service,
        }
    }
}
