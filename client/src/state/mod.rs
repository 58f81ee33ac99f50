//! Reactive state containers held in page-level signals.

pub mod search;
