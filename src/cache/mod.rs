// Cache module for local filesystem caching.
// Stores fetched puzzle inputs so repeat runs avoid the network entirely.

pub mod store;

pub use store::InputStore;
