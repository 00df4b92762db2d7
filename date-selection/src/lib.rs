#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod error;
pub mod observer;
pub mod selection;
pub mod shared;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::error::{Error, Result};
pub use crate::observer::{Change, ChangeKind, Observer, SubscriptionId};
pub use crate::selection::DateSelection;
pub use crate::shared::SelectionHandle;
pub use date_selection_set::UniqueSortedVec;
