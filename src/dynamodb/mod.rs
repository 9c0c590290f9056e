//! # DynamoDB Module
//!
//! This module provides the store-facing half of the seeder.
//!
//! ## Components
//!
//! - `DynamoDb`: A client wrapper for describe, create and put operations.
//! - `TableStore`: The trait seeding code is written against.
//! - `Item`: A DynamoDB item assembled from JSON records.
//! - `encode`: The JSON to attribute value conversion.
//! - `Schema`: The key layout a table is created with.
//! - `Table`: A table name plus its schema.
//!
//! ## Usage
//!
//! Credentials come from the usual AWS provider chain. Against DynamoDB Local
//! any values work:
//!
//! - `AWS_ACCESS_KEY_ID`
//! - `AWS_SECRET_ACCESS_KEY`
//!
//! The region and endpoint are passed explicitly to [`DynamoDb::connect`].

mod client;
mod encode;
mod item;
mod schema;
mod store;
mod table;

pub use client::DynamoDb;
pub use encode::encode;
pub use item::Item;
pub use schema::Schema;
pub use store::TableStore;
pub use table::{Table, TableStatus};
