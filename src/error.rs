// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// The page could not be fetched. Callers must treat this as
/// "no data available", never as "zero activities".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// The notification could not be delivered. Absorbed by the pipeline:
/// logged, never allowed to fail the run.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("could not build email message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("email api request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("email api returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// A pipeline run failed hard. Soft conditions (stale selectors, corrupt
/// snapshot, notify failure) are not errors and never appear here.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not persist snapshot to {path}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
