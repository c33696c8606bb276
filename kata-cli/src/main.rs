//! kata CLI
//!
//! Builds CSS selectors, computes rectangle areas and round-trips JSON from
//! the command line.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use kata_common::warning::warn_once;
use kata_data::{Rectangle, Shape, build_rectangle, deserialize, serialize};
use kata_selector::{Category, OrderPolicy, SelectorBuilder};
use owo_colors::OwoColorize;

/// kata — selector builder, rectangle factory and JSON helpers
#[derive(Parser, Debug)]
#[command(name = "kata")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Build a compound selector
    kata selector id=main class=container class=editable

    # Rank pseudo-elements like every other part; they must then come last
    kata selector --strict element=p pseudo-element=first-line

    # ...so this one is rejected (it is accepted without --strict)
    kata selector --strict pseudo-element=before class=x

    # Combine two selectors
    kata combine element=div,id=main '~' element=table,id=data

    # Commas inside a value stay in that value
    kata combine 'attr=data-x="a,b"' '>' class=y

    # Rectangle area
    kata rect 10 20

    # Decode a rectangle from JSON
    kata json '{"width": 3, "height": 7}'
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a selector from KIND=VALUE parts, applied in order
    Selector {
        /// Parts such as `element=a`, `attr=href`, `pseudo-class=focus`
        #[arg(value_name = "KIND=VALUE", required = true)]
        parts: Vec<String>,

        /// Check pseudo-element ordering too
        #[arg(long)]
        strict: bool,
    },
    /// Join two selectors with a combinator
    Combine {
        /// Comma-separated parts of the left selector; a comma only starts a
        /// new part when followed by `KIND=`
        left: String,
        /// Combinator token, e.g. `>`, `+`, `~`
        combinator: String,
        /// Comma-separated parts of the right selector
        right: String,

        /// Check pseudo-element ordering too
        #[arg(long)]
        strict: bool,
    },
    /// Print the area of a WIDTH x HEIGHT rectangle
    Rect {
        /// Horizontal extent
        #[arg(allow_negative_numbers = true)]
        width: f64,
        /// Vertical extent
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },
    /// Decode TEXT as a rectangle, print its area and re-encoded form
    Json {
        /// JSON object with `width` and `height`
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Selector { parts, strict } => {
            let mut selector = build(&parts, policy(strict))?;
            println!("{}", selector.stringify().green());
        }
        Command::Combine {
            left,
            combinator,
            right,
            strict,
        } => {
            let left = build(&split_parts(&left), policy(strict))?;
            let right = build(&split_parts(&right), policy(strict))?;
            if let Some(message) = combinator_warning(&combinator) {
                warn_once("Selector", &message);
            }
            let mut combined = kata_selector::combine(left, &combinator, right);
            println!("{}", combined.stringify().green());
        }
        Command::Rect { width, height } => {
            if let Some(message) = dimension_warning(width, height) {
                warn_once("Rectangle", &message);
            }
            println!("{}", build_rectangle(width, height).area());
        }
        Command::Json { text } => {
            let rect: Rectangle = deserialize(&text)
                .with_context(|| format!("failed to decode {}", Rectangle::shape_name()))?;
            if let Some(message) = dimension_warning(rect.width, rect.height) {
                warn_once("Rectangle", &message);
            }
            println!("area: {}", rect.area());
            println!("{}", serialize(&rect)?);
        }
    }

    Ok(())
}

const fn policy(strict: bool) -> OrderPolicy {
    if strict {
        OrderPolicy::Strict
    } else {
        OrderPolicy::Lenient
    }
}

/// Combinator tokens with a meaning in
/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
const KNOWN_COMBINATORS: [&str; 5] = ["", " ", ">", "+", "~"];

/// Anything else is still passed through to `combine`, just flagged.
fn combinator_warning(token: &str) -> Option<String> {
    (!KNOWN_COMBINATORS.contains(&token)).then(|| format!("unrecognized combinator '{token}'"))
}

fn dimension_warning(width: f64, height: f64) -> Option<String> {
    (width < 0.0 || height < 0.0).then(|| format!("negative dimension in {width} x {height}"))
}

/// Whether `piece` opens a new `KIND=VALUE` part.
fn starts_part(piece: &str) -> bool {
    piece
        .split_once('=')
        .is_some_and(|(kind, _)| kind.parse::<Category>().is_ok())
}

/// Split a comma-separated part list. A comma not followed by `KIND=` belongs
/// to the value before it, so `attr=data-x="a,b"` stays one part.
fn split_parts(list: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for piece in list.split(',') {
        if let Some(last) = parts.last_mut().filter(|_| !starts_part(piece)) {
            last.push(',');
            last.push_str(piece);
        } else if !piece.is_empty() {
            parts.push(piece.to_string());
        }
    }
    parts
}

/// Apply each `KIND=VALUE` part to a fresh builder, in order.
fn build(parts: &[String], policy: OrderPolicy) -> Result<SelectorBuilder> {
    parts
        .iter()
        .try_fold(SelectorBuilder::with_policy(policy), |builder, part| {
            let Some((kind, value)) = part.split_once('=') else {
                bail!("expected KIND=VALUE, got '{part}'");
            };
            let category: Category = kind
                .parse()
                .with_context(|| format!("unknown selector kind '{kind}'"))?;
            let builder = match category {
                Category::Element => builder.element(value),
                Category::Id => builder.id(value),
                Category::Class => builder.class(value),
                Category::Attribute => builder.attr(value),
                Category::PseudoClass => builder.pseudo_class(value),
                Category::PseudoElement => builder.pseudo_element(value),
            };
            builder.with_context(|| format!("cannot append '{part}'"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_build_applies_parts_in_order() {
        let mut selector = build(
            &parts(&["element=a", r#"attr=href$=".png""#, "pseudo-class=focus"]),
            OrderPolicy::Lenient,
        )
        .unwrap();
        assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
    }

    #[test]
    fn test_build_rejects_bad_parts() {
        assert!(build(&parts(&["element"]), OrderPolicy::Lenient).is_err());
        assert!(build(&parts(&["universal=*"]), OrderPolicy::Lenient).is_err());
        assert!(build(&parts(&["class=x", "id=y"]), OrderPolicy::Lenient).is_err());
    }

    #[test]
    fn test_strict_flag_ranks_pseudo_element() {
        let list = parts(&["pseudo-element=before", "class=x"]);
        assert!(build(&list, policy(false)).is_ok());
        assert!(build(&list, policy(true)).is_err());
    }

    #[test]
    fn test_strict_help_examples() {
        let accepted = ["kata", "selector", "--strict", "element=p", "pseudo-element=first-line"];
        let Command::Selector { parts, strict } = Cli::try_parse_from(accepted).unwrap().command
        else {
            panic!("expected the selector subcommand");
        };
        assert!(strict);
        assert_eq!(build(&parts, policy(strict)).unwrap().stringify(), "p::first-line");

        let rejected = ["kata", "selector", "--strict", "pseudo-element=before", "class=x"];
        let Command::Selector { parts, strict } = Cli::try_parse_from(rejected).unwrap().command
        else {
            panic!("expected the selector subcommand");
        };
        assert!(build(&parts, policy(strict)).is_err());
    }

    #[test]
    fn test_split_parts_on_kind_boundaries() {
        assert_eq!(split_parts("element=div,id=main"), parts(&["element=div", "id=main"]));
        assert!(split_parts("").is_empty());
    }

    #[test]
    fn test_split_parts_keeps_commas_in_values() {
        let list = split_parts(r#"class=y,attr=data-x="a,b",pseudo-class=hover"#);
        assert_eq!(
            list,
            parts(&["class=y", r#"attr=data-x="a,b""#, "pseudo-class=hover"])
        );

        let mut selector = build(&list, OrderPolicy::Lenient).unwrap();
        assert_eq!(selector.stringify(), r#".y[data-x="a,b"]:hover"#);
    }

    #[test]
    fn test_split_parts_unknown_kind_joins_previous() {
        // `universal=*` is not a kind, so it is treated as part of the value
        assert_eq!(
            split_parts("pseudo-class=is(a,universal=*)"),
            parts(&["pseudo-class=is(a,universal=*)"])
        );
    }

    #[test]
    fn test_combinator_warning_only_for_unknown_tokens() {
        for token in KNOWN_COMBINATORS {
            assert_eq!(combinator_warning(token), None);
        }
        assert_eq!(
            combinator_warning("||"),
            Some("unrecognized combinator '||'".to_string())
        );
    }

    #[test]
    fn test_dimension_warning_for_negative_input() {
        assert_eq!(dimension_warning(10.0, 20.0), None);
        assert_eq!(dimension_warning(0.0, 5.0), None);
        assert_eq!(
            dimension_warning(-2.0, 3.0),
            Some("negative dimension in -2 x 3".to_string())
        );
    }

    #[test]
    fn test_cli_parses_combine() {
        let cli = Cli::try_parse_from(["kata", "combine", "element=div", "~", "class=x"]).unwrap();
        assert!(matches!(cli.command, Command::Combine { ref combinator, .. } if combinator == "~"));
    }
}
