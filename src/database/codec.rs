//! Conversion between caller values and BSON documents.
//!
//! Filters and payloads stay opaque: they only need to serialize to a
//! document. A value that serializes to null (`None`, `()`) is treated as
//! missing.

use mongodb::bson::{self, doc, Bson, Document};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{OperatorError, Result};

/// Encode a query filter, rejecting null and non-document values.
pub(crate) fn encode_filter<F>(filter: &F) -> Result<Document>
where
    F: Serialize + ?Sized,
{
    match bson::to_bson(filter).map_err(OperatorError::Encode)? {
        Bson::Null => Err(OperatorError::NilFilter),
        Bson::Document(doc) => Ok(doc),
        _ => Err(OperatorError::InvalidFilter),
    }
}

/// Encode a document body, rejecting null and non-document values.
pub(crate) fn encode_payload<P>(payload: &P) -> Result<Document>
where
    P: Serialize + ?Sized,
{
    match bson::to_bson(payload).map_err(OperatorError::Encode)? {
        Bson::Null => Err(OperatorError::NilPayload),
        Bson::Document(doc) => Ok(doc),
        _ => Err(OperatorError::InvalidPayload),
    }
}

/// Wrap a payload as a partial `$set` update.
pub(crate) fn set_update(payload: Document) -> Document {
    doc! { "$set": payload }
}

/// Materialize a driver document into the caller's shape.
pub(crate) fn decode<T: DeserializeOwned>(doc: Document) -> Result<T> {
    bson::from_document(doc).map_err(OperatorError::Decode)
}
