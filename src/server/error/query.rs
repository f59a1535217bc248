use thiserror::Error;

use crate::server::query::params::FilterOp;

/// Errors raised while building or executing a list query.
#[derive(Error, Debug)]
pub enum QueryError {
    /// A filter value could not be converted to the type of its column.
    ///
    /// Results in a 400 Bad Request naming the field and operator.
    #[error("Invalid value '{value}' for filter {field} {op}")]
    InvalidValue {
        field: String,
        op: FilterOp,
        value: String,
    },

    /// The column exists but cannot be compared, such as a JSON geometry column.
    ///
    /// Results in a 400 Bad Request.
    #[error("Field '{0}' cannot be used as a filter")]
    UnsupportedField(String),

    /// Executing the built query failed.
    ///
    /// Results in a 500 Internal Server Error.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A fetched record could not be serialized to JSON.
    ///
    /// Results in a 500 Internal Server Error.
    #[error(transparent)]
    SerializeErr(#[from] serde_json::Error),
}
