//! Domain models for the query library
//!
//! Defines the immutable entity structs the DataSource snapshot is built from.
//! Every type is a plain serde-derived record; nothing here is ever mutated
//! after the snapshot is loaded.

pub mod customer;
pub mod order;
pub mod product;
pub mod supplier;

pub use customer::Customer;
pub use order::Order;
pub use product::Product;
pub use supplier::Supplier;
