//! Errors raised while appending fragments to a selector.

use thiserror::Error;

use crate::category::Category;

/// A fragment was rejected by one of the builder's two rules.
///
/// Both kinds are caller errors: the chain that produced them is dropped and
/// the caller has to build the selector again in a valid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A second element, id or pseudo-element was appended to the same chain.
    #[error(
        "duplicate {category}: Element, id and pseudo-element should not occur more then one time inside the selector"
    )]
    DuplicateExclusive {
        /// The exclusive category that was repeated.
        category: Category,
    },

    /// A fragment was appended after a higher-ranked one.
    #[error(
        "{category} after {after}: Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The category being appended.
        category: Category,
        /// The highest category already in the chain.
        after: Category,
    },
}
