use reqwest::StatusCode;

/// Failures a run can end with besides transport and parse errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{service} returned HTTP {status}")]
    Status { service: String, status: StatusCode },

    #[error("No {record_type} record named {name:?} found for domain {domain}")]
    RecordNotFound {
        record_type: String,
        name: String,
        domain: String,
    },
}
