use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const DEFAULT_GRAPH_SIZE: i64 = 10;

#[cfg_attr(feature = "docs", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "docs", into_params(parameter_in = Query))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphQuery {
    /// Number of most recent entries to return, defaults to 10
    pub size: Option<i64>,
}

impl GraphQuery {
    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_GRAPH_SIZE)
    }
}

/// One charted sensor sample.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEntry {
    /// Temperature reading in Celsius
    pub temperature: f64,
    /// Whether motion was reported
    pub presence: bool,
    /// Server-side ingestion timestamp
    #[serde(with = "time::serde::rfc3339")]
    pub datetime: OffsetDateTime,
}
