//! CRUD operations on the operator.
//!
//! Every call validates its arguments, resolves the collection name, runs
//! under the configured deadline and wraps driver failures in a kind specific
//! to the operation.

use futures::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::options as driver;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::codec::{decode, encode_filter, encode_payload, set_update};
use super::options::{
    CountOptions, DeleteOneOptions, FindOneOptions, FindOptions, InsertManyOptions, UpdateOptions,
};
use super::Operator;
use crate::error::{OperatorError, Result};

impl Operator {
    /// Count documents in `collection` matching `filter`.
    pub async fn count<F>(
        &self,
        collection: &str,
        filter: &F,
        opts: Option<CountOptions>,
    ) -> Result<u64>
    where
        F: Serialize + ?Sized,
    {
        let filter = encode_filter(filter)?;
        let coll = self.resolved_collection(collection)?;

        let count = self
            .bounded(
                coll.count_documents(filter)
                    .with_options(opts.map(driver::CountOptions::from)),
            )
            .await
            .map_err(OperatorError::Count)?;

        debug!("Counted {} documents in {}", count, coll.name());
        Ok(count)
    }

    /// Delete every document matching `filter`, returning how many went.
    pub async fn delete_many<F>(&self, collection: &str, filter: &F) -> Result<u64>
    where
        F: Serialize + ?Sized,
    {
        let filter = encode_filter(filter)?;
        let coll = self.resolved_collection(collection)?;

        let result = self
            .bounded(coll.delete_many(filter))
            .await
            .map_err(OperatorError::DeleteMany)?;

        debug!("Deleted {} documents from {}", result.deleted_count, coll.name());
        Ok(result.deleted_count)
    }

    /// Delete at most one document and decode it into `target`.
    ///
    /// Returns `false` and leaves `target` untouched when nothing matched.
    pub async fn delete_one<F, T>(
        &self,
        collection: &str,
        filter: &F,
        target: &mut T,
        opts: Option<DeleteOneOptions>,
    ) -> Result<bool>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let filter = encode_filter(filter)?;
        let coll = self.resolved_collection(collection)?;

        let deleted = self
            .bounded(
                coll.find_one_and_delete(filter)
                    .with_options(opts.map(driver::FindOneAndDeleteOptions::from)),
            )
            .await
            .map_err(OperatorError::DeleteOne)?;

        let Some(doc) = deleted else {
            debug!("No document matched delete in {}", coll.name());
            return Ok(false);
        };

        *target = decode(doc)?;
        debug!("Deleted one document from {}", coll.name());
        Ok(true)
    }

    /// Find the first document matching `filter` and decode it into `target`.
    ///
    /// Returns `false` and leaves `target` untouched when nothing matched.
    pub async fn find_one<F, T>(
        &self,
        collection: &str,
        filter: &F,
        target: &mut T,
        opts: Option<FindOneOptions>,
    ) -> Result<bool>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let filter = encode_filter(filter)?;
        let coll = self.resolved_collection(collection)?;

        let found = self
            .bounded(
                coll.find_one(filter)
                    .with_options(opts.map(driver::FindOneOptions::from)),
            )
            .await
            .map_err(OperatorError::FindOne)?;

        match found {
            Some(doc) => {
                *target = decode(doc)?;
                Ok(true)
            }
            None => {
                debug!("No document matched find in {}", coll.name());
                Ok(false)
            }
        }
    }

    /// Replace the contents of `target` with every document matching `filter`.
    ///
    /// `target` is only written once all documents have been decoded.
    pub async fn find_many<F, T>(
        &self,
        collection: &str,
        filter: &F,
        target: &mut Vec<T>,
        opts: Option<FindOptions>,
    ) -> Result<usize>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let filter = encode_filter(filter)?;
        let coll = self.resolved_collection(collection)?;

        let docs: Vec<Document> = self
            .bounded(async {
                let cursor = coll
                    .find(filter)
                    .with_options(opts.map(driver::FindOptions::from))
                    .await?;
                cursor.try_collect::<Vec<Document>>().await
            })
            .await
            .map_err(OperatorError::FindMany)?;

        let decoded = docs.into_iter().map(decode).collect::<Result<Vec<T>>>()?;

        debug!("Found {} documents in {}", decoded.len(), coll.name());
        *target = decoded;
        Ok(target.len())
    }

    /// Insert several documents, returning their ids in insertion order.
    ///
    /// An empty list fails with `EmptyPayload`; a null element fails with
    /// `NilPayload`.
    pub async fn insert_many<P>(
        &self,
        collection: &str,
        payload: &[P],
        opts: Option<InsertManyOptions>,
    ) -> Result<Vec<Bson>>
    where
        P: Serialize,
    {
        if payload.is_empty() {
            return Err(OperatorError::EmptyPayload);
        }

        let docs = payload
            .iter()
            .map(encode_payload)
            .collect::<Result<Vec<Document>>>()?;
        let coll = self.resolved_collection(collection)?;

        let result = self
            .bounded(
                coll.insert_many(docs)
                    .with_options(opts.map(driver::InsertManyOptions::from)),
            )
            .await
            .map_err(OperatorError::InsertMany)?;

        let mut ids: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        ids.sort_by_key(|(index, _)| *index);

        debug!("Inserted {} documents into {}", ids.len(), coll.name());
        Ok(ids.into_iter().map(|(_, id)| id).collect())
    }

    /// Insert a single document, returning its id.
    pub async fn insert_one<P>(&self, collection: &str, payload: &P) -> Result<Bson>
    where
        P: Serialize + ?Sized,
    {
        let doc = encode_payload(payload)?;
        let coll = self.resolved_collection(collection)?;

        let result = self
            .bounded(coll.insert_one(doc))
            .await
            .map_err(OperatorError::InsertOne)?;

        debug!("Inserted document {} into {}", result.inserted_id, coll.name());
        Ok(result.inserted_id)
    }

    /// Apply `payload` as a `$set` to every document matching `filter`.
    ///
    /// Returns the number of matched documents.
    pub async fn update_many<F, P>(
        &self,
        collection: &str,
        filter: &F,
        payload: &P,
        opts: Option<UpdateOptions>,
    ) -> Result<u64>
    where
        F: Serialize + ?Sized,
        P: Serialize + ?Sized,
    {
        let filter = encode_filter(filter)?;
        let update = set_update(encode_payload(payload)?);
        let coll = self.resolved_collection(collection)?;

        let result = self
            .bounded(
                coll.update_many(filter, update)
                    .with_options(opts.map(driver::UpdateOptions::from)),
            )
            .await
            .map_err(OperatorError::UpdateMany)?;

        debug!(
            "Updated {}/{} matched documents in {}",
            result.modified_count,
            result.matched_count,
            coll.name()
        );
        Ok(result.matched_count)
    }

    /// Apply `payload` as a `$set` to the first document matching `filter`.
    ///
    /// Returns `false` when nothing matched; that is not an error.
    pub async fn update_one<F, P>(
        &self,
        collection: &str,
        filter: &F,
        payload: &P,
        opts: Option<UpdateOptions>,
    ) -> Result<bool>
    where
        F: Serialize + ?Sized,
        P: Serialize + ?Sized,
    {
        let filter = encode_filter(filter)?;
        let update = set_update(encode_payload(payload)?);
        let coll = self.resolved_collection(collection)?;

        let result = self
            .bounded(
                coll.update_one(filter, update)
                    .with_options(opts.map(driver::UpdateOptions::from)),
            )
            .await
            .map_err(OperatorError::UpdateOne)?;

        let matched = result.matched_count > 0 || result.upserted_id.is_some();
        if !matched {
            debug!("No document matched update in {}", coll.name());
        }
        Ok(matched)
    }
}
