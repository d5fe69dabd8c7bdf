//! Collection utilities and data structures

/// A labelled collection that keeps text items in insertion order.
pub mod named_collector;

pub use named_collector::NamedCollector;
