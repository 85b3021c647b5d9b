//! mongo-operator - bounded CRUD over the MongoDB driver
//!
//! A thin layer that validates arguments, defaults collection names, bounds
//! every call with a timeout and normalizes driver errors.
//!
//! ## Architecture
//!
//! - `config` - Connection configuration and validation
//! - `database` - The `Operator`, its CRUD operations and the `Controller` trait
//! - `error` - Error taxonomy rooted at `OperatorError`
//!
//! ## Usage
//!
//! ```no_run
//! use mongo_operator::{Config, Operator};
//! use mongodb::bson::{doc, Document};
//!
//! # async fn run() -> mongo_operator::Result<()> {
//! let op = Operator::connect(Config {
//!     database: "app".to_string(),
//!     uri: "mongodb://localhost:27017".to_string(),
//!     default_collection: "users".to_string(),
//!     ..Default::default()
//! })
//! .await?;
//!
//! op.insert_one("", &doc! { "name": "alice" }).await?;
//!
//! let mut users: Vec<Document> = Vec::new();
//! op.find_many("", &doc! { "name": "alice" }, &mut users, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;

pub use config::Config;
pub use database::{
    Controller, CountOptions, DeleteOneOptions, FindOneOptions, FindOptions, InsertManyOptions,
    Operator, UpdateOptions,
};
pub use error::{DriverError, OperatorError, Result};
