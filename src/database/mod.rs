//! Database module exports.

mod codec;
mod controller;
mod mongo;
mod operations;
mod options;

pub use controller::Controller;
pub use mongo::Operator;
pub use options::{
    CountOptions, DeleteOneOptions, FindOneOptions, FindOptions, InsertManyOptions, UpdateOptions,
};
