//! Fragment categories and their canonical rendering.

use strum_macros::{Display, EnumIter, EnumString};

/// The kind of simple selector a fragment holds.
///
/// Variants are declared in the order they must appear inside a compound
/// selector, so the derived `Ord` is the rank order:
/// element < id < class < attribute < pseudo-class < pseudo-element.
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// "If it contains a type selector or universal selector, that selector
/// must come first in the sequence."
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors), e.g. `div`
    Element,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors), e.g. `#main`
    Id,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html), e.g. `.container`
    Class,
    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors), e.g. `[href]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,
    /// [§ 3.6.1 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes), e.g. `:focus`
    PseudoClass,
    /// [§ 3.6.2 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements), e.g. `::before`
    PseudoElement,
}

impl Category {
    /// Position in the fixed ordering, `0` for element up to `5` for pseudo-element.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Element, id and pseudo-element may appear at most once per selector.
    #[must_use]
    pub const fn is_exclusive(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Render `value` with this category's punctuation.
    ///
    /// The value is used verbatim; nothing is escaped or validated.
    #[must_use]
    pub fn render(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_rank_follows_declaration_order() {
        let ranks: Vec<u8> = Category::iter().map(Category::rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
        assert!(Category::Element < Category::PseudoElement);
    }

    #[test]
    fn test_exclusive_categories() {
        let exclusive: Vec<Category> = Category::iter().filter(|c| c.is_exclusive()).collect();
        assert_eq!(
            exclusive,
            vec![Category::Element, Category::Id, Category::PseudoElement]
        );
    }

    #[test]
    fn test_render_punctuation() {
        assert_eq!(Category::Element.render("a"), "a");
        assert_eq!(Category::Id.render("main"), "#main");
        assert_eq!(Category::Class.render("nav"), ".nav");
        assert_eq!(Category::Attribute.render("href"), "[href]");
        assert_eq!(Category::PseudoClass.render("hover"), ":hover");
        assert_eq!(Category::PseudoElement.render("after"), "::after");
    }

    #[test]
    fn test_display_and_parse_names() {
        assert_eq!(Category::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(Category::Attribute.to_string(), "attribute");
        assert_eq!("attr".parse::<Category>(), Ok(Category::Attribute));
        assert_eq!("pseudo-element".parse::<Category>(), Ok(Category::PseudoElement));
        assert!("universal".parse::<Category>().is_err());
    }
}
