//! Error types raised by folio-core.
//!
//! HTTP failures live in `folio-client`; configuration failures in
//! `folio-config`. A unified error is left to the binary, where `anyhow`
//! collects them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// An icon identifier outside the supported set.
    #[error("Unknown social icon: {0}")]
    UnknownIcon(String),

    /// A schema was requested for a type name that is not exported.
    #[error("Unknown schema type: {0} (expected one of: {expected})", expected = crate::schema::TYPE_NAMES.join(", "))]
    UnknownSchemaType(String),

    /// Schema or entity serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
