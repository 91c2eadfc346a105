//! Error types for the NBA roster collector

use thiserror::Error;


pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML decoding failed: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fetch task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}
