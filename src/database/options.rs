//! Per-operation options.
//!
//! Each struct carries only the knobs the operator forwards to the driver.

use mongodb::bson::Document;
use mongodb::options;

/// Options for `Operator::count`.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl From<CountOptions> for options::CountOptions {
    fn from(opts: CountOptions) -> Self {
        let mut driver = Self::default();
        driver.skip = opts.skip;
        driver.limit = opts.limit;
        driver
    }
}

/// Options for `Operator::find_many`.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    pub sort: Option<Document>,
    pub projection: Option<Document>,
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

impl FindOptions {
    /// Sort matches by the given specification.
    #[must_use]
    pub fn sort(mut self, sort: Document) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Return at most `limit` matches.
    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }
}

impl From<FindOptions> for options::FindOptions {
    fn from(opts: FindOptions) -> Self {
        let mut driver = Self::default();
        driver.sort = opts.sort;
        driver.projection = opts.projection;
        driver.skip = opts.skip;
        driver.limit = opts.limit;
        driver
    }
}

/// Options for `Operator::find_one`.
#[derive(Debug, Clone, Default)]
pub struct FindOneOptions {
    pub sort: Option<Document>,
    pub projection: Option<Document>,
    pub skip: Option<u64>,
}

impl From<FindOneOptions> for options::FindOneOptions {
    fn from(opts: FindOneOptions) -> Self {
        let mut driver = Self::default();
        driver.sort = opts.sort;
        driver.projection = opts.projection;
        driver.skip = opts.skip;
        driver
    }
}

/// Options for `Operator::delete_one`.
///
/// `sort` picks which document is removed when several match.
#[derive(Debug, Clone, Default)]
pub struct DeleteOneOptions {
    pub sort: Option<Document>,
    pub projection: Option<Document>,
}

impl From<DeleteOneOptions> for options::FindOneAndDeleteOptions {
    fn from(opts: DeleteOneOptions) -> Self {
        let mut driver = Self::default();
        driver.sort = opts.sort;
        driver.projection = opts.projection;
        driver
    }
}

/// Options for `Operator::insert_many`.
#[derive(Debug, Clone, Default)]
pub struct InsertManyOptions {
    /// Stop at the first failed write (driver default) when `true`.
    pub ordered: Option<bool>,
}

impl From<InsertManyOptions> for options::InsertManyOptions {
    fn from(opts: InsertManyOptions) -> Self {
        let mut driver = Self::default();
        driver.ordered = opts.ordered;
        driver
    }
}

/// Options for `Operator::update_one` and `Operator::update_many`.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub upsert: Option<bool>,
}

impl From<UpdateOptions> for options::UpdateOptions {
    fn from(opts: UpdateOptions) -> Self {
        let mut driver = Self::default();
        driver.upsert = opts.upsert;
        driver
    }
}
