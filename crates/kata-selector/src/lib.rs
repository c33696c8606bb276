//! Fluent construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate builds selectors; it never parses them. It implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - element, id, class, attribute, pseudo-class and pseudo-element fragments
//!   - the fixed category order, with element, id and pseudo-element allowed once
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - joining two built selectors with an arbitrary combinator token
//!
//! # Entry points
//!
//! The free functions below each start a fresh [`SelectorBuilder`] and apply a
//! single operation, so a chain can begin without constructing a builder first:
//!
//! ```
//! # fn main() -> Result<(), kata_selector::SelectorError> {
//! let left = kata_selector::element("div")?.id("main")?;
//! let right = kata_selector::element("table")?.id("data")?;
//! assert_eq!(kata_selector::combine(left, "~", right).stringify(), "div#main ~ table#data");
//! # Ok(())
//! # }
//! ```

/// The fluent builder and its rendered fragments.
pub mod builder;
/// Fragment categories, ranks and rendering.
pub mod category;
/// Errors for rejected fragments.
pub mod error;

pub use builder::{Fragment, OrderPolicy, SelectorBuilder};
pub use category::Category;
pub use error::SelectorError;

/// Start a chain with a type selector.
///
/// # Errors
///
/// Never fails on a fresh chain; the `Result` keeps the signature uniform with
/// [`SelectorBuilder::element`].
pub fn element(name: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().element(name)
}

/// Start a chain with `#name`.
///
/// # Errors
///
/// Never fails on a fresh chain.
pub fn id(name: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().id(name)
}

/// Start a chain with `.name`.
///
/// # Errors
///
/// Never fails on a fresh chain.
pub fn class(name: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().class(name)
}

/// Start a chain with `[spec]`.
///
/// # Errors
///
/// Never fails on a fresh chain.
pub fn attr(spec: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().attr(spec)
}

/// Start a chain with `:name`.
///
/// # Errors
///
/// Never fails on a fresh chain.
pub fn pseudo_class(name: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_class(name)
}

/// Start a chain with `::name`.
///
/// # Errors
///
/// Never fails on a fresh chain.
pub fn pseudo_element(name: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_element(name)
}

/// Start a chain holding `left`, `combinator` and `right`.
#[must_use]
pub fn combine(left: SelectorBuilder, combinator: &str, right: SelectorBuilder) -> SelectorBuilder {
    SelectorBuilder::new().combine(left, combinator, right)
}
