use std::fmt;

use crate::observer::SubscriptionId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    /// The subscription was never registered on this selection or has
    /// already been removed.
    UnknownSubscription(SubscriptionId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSubscription(id) => write!(f, "unknown subscription {id}"),
        }
    }
}

impl std::error::Error for Error {}
