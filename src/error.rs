use reqwest::StatusCode;
use serde_json::Value;

use crate::models::Operation;

#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),

    #[error("{op}: expected status code {expected}, but got {actual}: {body}")]
    UnexpectedStatus {
        op: Operation,
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },

    #[error("{op}: response does not contain an '{field}' field")]
    MissingField { op: Operation, field: &'static str },

    #[error("{op}: user {field} does not match, expected {expected} but got {actual}")]
    FieldMismatch {
        op: Operation,
        field: &'static str,
        expected: Value,
        actual: Value,
    },

    #[error("{op}: can't convert '{text}'")]
    JsonError {
        op: Operation,
        text: String,
        #[source]
        source: serde_json::Error,
    },
}
