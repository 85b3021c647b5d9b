//! The `Controller` abstraction over document operations.
//!
//! Code that only needs CRUD access can be written against `Controller` and
//! driven by an `Operator` in production or a fake in tests.

#![allow(async_fn_in_trait)]

use mongodb::bson::Bson;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::options::{
    CountOptions, DeleteOneOptions, FindOneOptions, FindOptions, InsertManyOptions, UpdateOptions,
};
use super::Operator;
use crate::error::Result;

/// Document operations exposed by the operator.
///
/// An empty collection name selects the implementation's default collection.
pub trait Controller {
    async fn count<F>(&self, collection: &str, filter: &F, opts: Option<CountOptions>) -> Result<u64>
    where
        F: Serialize + ?Sized;

    async fn delete_many<F>(&self, collection: &str, filter: &F) -> Result<u64>
    where
        F: Serialize + ?Sized;

    /// Returns `false` and leaves `target` untouched when nothing matched.
    async fn delete_one<F, T>(
        &self,
        collection: &str,
        filter: &F,
        target: &mut T,
        opts: Option<DeleteOneOptions>,
    ) -> Result<bool>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned;

    async fn find_many<F, T>(
        &self,
        collection: &str,
        filter: &F,
        target: &mut Vec<T>,
        opts: Option<FindOptions>,
    ) -> Result<usize>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned;

    /// Returns `false` and leaves `target` untouched when nothing matched.
    async fn find_one<F, T>(
        &self,
        collection: &str,
        filter: &F,
        target: &mut T,
        opts: Option<FindOneOptions>,
    ) -> Result<bool>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned;

    async fn insert_many<P>(
        &self,
        collection: &str,
        payload: &[P],
        opts: Option<InsertManyOptions>,
    ) -> Result<Vec<Bson>>
    where
        P: Serialize;

    async fn insert_one<P>(&self, collection: &str, payload: &P) -> Result<Bson>
    where
        P: Serialize + ?Sized;

    async fn update_many<F, P>(
        &self,
        collection: &str,
        filter: &F,
        payload: &P,
        opts: Option<UpdateOptions>,
    ) -> Result<u64>
    where
        F: Serialize + ?Sized,
        P: Serialize + ?Sized;

    async fn update_one<F, P>(
        &self,
        collection: &str,
        filter: &F,
        payload: &P,
        opts: Option<UpdateOptions>,
    ) -> Result<bool>
    where
        F: Serialize + ?Sized,
        P: Serialize + ?Sized;

    async fn ping(&self) -> Result<()>;
}

impl Controller for Operator {
    async fn count<F>(&self, collection: &str, filter: &F, opts: Option<CountOptions>) -> Result<u64>
    where
        F: Serialize + ?Sized,
    {
        Operator::count(self, collection, filter, opts).await
    }

    async fn delete_many<F>(&self, collection: &str, filter: &F) -> Result<u64>
    where
        F: Serialize + ?Sized,
    {
        Operator::delete_many(self, collection, filter).await
    }

    async fn delete_one<F, T>(
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
        Operator::delete_one(self, collection, filter, target, opts).await
    }

    async fn find_many<F, T>(
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
        Operator::find_many(self, collection, filter, target, opts).await
    }

    async fn find_one<F, T>(
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
        Operator::find_one(self, collection, filter, target, opts).await
    }

    async fn insert_many<P>(
        &self,
        collection: &str,
        payload: &[P],
        opts: Option<InsertManyOptions>,
    ) -> Result<Vec<Bson>>
    where
        P: Serialize,
    {
        Operator::insert_many(self, collection, payload, opts).await
    }

    async fn insert_one<P>(&self, collection: &str, payload: &P) -> Result<Bson>
    where
        P: Serialize + ?Sized,
    {
        Operator::insert_one(self, collection, payload).await
    }

    async fn update_many<F, P>(
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
        Operator::update_many(self, collection, filter, payload, opts).await
    }

    async fn update_one<F, P>(
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
        Operator::update_one(self, collection, filter, payload, opts).await
    }

    async fn ping(&self) -> Result<()> {
        Operator::ping(self).await
    }
}
