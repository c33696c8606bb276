//! The fluent selector builder.

use std::fmt;

use crate::category::Category;
use crate::error::SelectorError;

/// How `pseudo_element` takes part in rank ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderPolicy {
    /// `pseudo_element` only checks for duplicates. It neither checks nor raises
    /// the running rank, so e.g. `::before` may be followed by `.class`.
    #[default]
    Lenient,
    /// `pseudo_element` is ranked like every other category and must come last.
    Strict,
}

/// One rendered piece of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A simple selector such as `#main` or `[href]`.
    Simple {
        /// What kind of simple selector this is.
        category: Category,
        /// The rendered text, punctuation included.
        piece: String,
    },
    /// A combinator token padded with one space on each side, e.g. `" > "`.
    Combinator(String),
}

impl Fragment {
    /// The rendered text of this fragment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Simple { piece, .. } => piece,
            Self::Combinator(token) => token,
        }
    }
}

/// Which exclusive categories have been used in the current chain, one bit per rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Exclusives(u8);

impl Exclusives {
    const fn contains(self, category: Category) -> bool {
        self.0 & (1 << category.rank()) != 0
    }

    const fn insert(&mut self, category: Category) {
        self.0 |= 1 << category.rank();
    }
}

/// Accumulates selector fragments and renders them to a string.
///
/// Every append consumes the builder and hands it back, so calls chain with `?`:
///
/// ```
/// # fn main() -> Result<(), kata_selector::SelectorError> {
/// let selector = kata_selector::id("main")?.class("container")?.class("editable")?.stringify();
/// assert_eq!(selector, "#main.container.editable");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Insertion order is render order.
    fragments: Vec<Fragment>,
    exclusives: Exclusives,
    /// Highest ranked category appended so far, `None` while empty.
    highest: Option<Category>,
    policy: OrderPolicy,
}

impl SelectorBuilder {
    /// An empty builder with the default (lenient) policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty builder that also ranks pseudo-elements.
    #[must_use]
    pub fn strict() -> Self {
        Self::with_policy(OrderPolicy::Strict)
    }

    /// An empty builder using `policy`.
    #[must_use]
    pub fn with_policy(policy: OrderPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The fragments appended so far, in render order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Whether nothing has been appended since creation or the last `stringify`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateExclusive`] if the chain already has an element,
    /// [`SelectorError::OutOfOrder`] if anything else was appended before it.
    pub fn element(self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::Element, name)
    }

    /// Append an id selector, `#name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateExclusive`] if the chain already has an id,
    /// [`SelectorError::OutOfOrder`] if a class or later category is present.
    pub fn id(self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::Id, name)
    }

    /// Append a class selector, `.name`. May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if an attribute or later category is present.
    pub fn class(self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::Class, name)
    }

    /// Append an attribute selector, `[spec]`. May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-class is present.
    pub fn attr(self, spec: &str) -> Result<Self, SelectorError> {
        self.append(Category::Attribute, spec)
    }

    /// Append a pseudo-class, `:name`. May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a ranked pseudo-element is present
    /// (only possible under [`OrderPolicy::Strict`]).
    pub fn pseudo_class(self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoClass, name)
    }

    /// Append a pseudo-element, `::name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateExclusive`] if the chain already has a
    /// pseudo-element. Ordering is only checked under [`OrderPolicy::Strict`].
    pub fn pseudo_element(self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoElement, name)
    }

    /// Append `left`, then `combinator` padded with spaces, then `right`.
    ///
    /// The combinator is used verbatim, whatever it is. Rank and uniqueness tracking of the
    /// receiver are left untouched, since `left` and `right` were checked
    /// when they were built.
    #[must_use]
    pub fn combine(mut self, left: Self, combinator: &str, right: Self) -> Self {
        self.fragments.extend(left.fragments);
        self.fragments
            .push(Fragment::Combinator(format!(" {combinator} ")));
        self.fragments.extend(right.fragments);
        self
    }

    /// Render the selector and reset the builder to empty.
    ///
    /// The policy survives the reset; everything else starts over.
    pub fn stringify(&mut self) -> String {
        let rendered = self.to_string();
        *self = Self::with_policy(self.policy);
        rendered
    }

    fn is_ranked(&self, category: Category) -> bool {
        category != Category::PseudoElement || self.policy == OrderPolicy::Strict
    }

    fn append(mut self, category: Category, value: &str) -> Result<Self, SelectorError> {
        let exclusive = category.is_exclusive();
        if exclusive && self.exclusives.contains(category) {
            return Err(SelectorError::DuplicateExclusive { category });
        }

        if self.is_ranked(category) {
            if let Some(after) = self.highest.filter(|&highest| highest > category) {
                return Err(SelectorError::OutOfOrder { category, after });
            }
            self.highest = Some(category);
        }

        if exclusive {
            self.exclusives.insert(category);
        }
        self.fragments.push(Fragment::Simple {
            category,
            piece: category.render(value),
        });
        Ok(self)
    }
}

/// Renders without resetting; see [`SelectorBuilder::stringify`] for the one-shot form.
impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments
            .iter()
            .try_for_each(|fragment| f.write_str(fragment.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_tracks_ranked_appends() {
        let builder = SelectorBuilder::new().element("a").unwrap().class("x").unwrap();
        assert_eq!(builder.highest, Some(Category::Class));
        assert!(builder.exclusives.contains(Category::Element));
        assert!(!builder.exclusives.contains(Category::Id));
    }

    #[test]
    fn test_lenient_pseudo_element_leaves_rank_alone() {
        let builder = SelectorBuilder::new()
            .class("x")
            .unwrap()
            .pseudo_element("before")
            .unwrap();
        assert_eq!(builder.highest, Some(Category::Class));
        assert!(builder.exclusives.contains(Category::PseudoElement));
    }

    #[test]
    fn test_strict_pseudo_element_raises_rank() {
        let builder = SelectorBuilder::strict().pseudo_element("before").unwrap();
        assert_eq!(builder.highest, Some(Category::PseudoElement));
    }

    #[test]
    fn test_stringify_resets_tracking_but_keeps_policy() {
        let mut builder = SelectorBuilder::strict().element("a").unwrap().id("x").unwrap();
        assert_eq!(builder.stringify(), "a#x");
        assert_eq!(builder, SelectorBuilder::strict());
    }

    #[test]
    fn test_non_exclusive_categories_leave_no_mark() {
        let builder = SelectorBuilder::new()
            .class("a")
            .unwrap()
            .attr("b")
            .unwrap()
            .pseudo_class("c")
            .unwrap();
        assert_eq!(builder.exclusives, Exclusives::default());
    }

    #[test]
    fn test_unknown_combinator_used_verbatim() {
        let left = SelectorBuilder::new().element("a").unwrap();
        let right = SelectorBuilder::new().element("b").unwrap();
        let mut combined = SelectorBuilder::new().combine(left, "||", right);
        assert_eq!(combined.stringify(), "a || b");
    }
}
