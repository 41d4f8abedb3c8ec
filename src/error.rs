//! Error types for the crate.
//!
//! Lookups and removals of absent keys are normal outcomes, reported with
//! `None`/`false` rather than errors. The only error type here covers the
//! one operation with a genuine failure condition: asking an exhausted
//! iterator for another element.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Returned by [`InOrderIter::try_next`](crate::iter::InOrderIter::try_next)
/// when every element has already been yielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustedIterator;

impl Display for ExhaustedIterator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No more elements in the tree!")
    }
}

impl Error for ExhaustedIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_condition() {
        assert_eq!(
            ExhaustedIterator.to_string(),
            "No more elements in the tree!"
        );
    }
}
