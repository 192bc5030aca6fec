//! Composing display strings from drawn words.
//!
//! Templates use `%a` for an adjective, `%n` for a noun, `%c` for a color
//! and `%%` for a literal percent sign. Each placeholder triggers its own
//! draw, so `%a %a` yields two independent adjectives.

use anyhow::{bail, Result};
use spicy_core::{ADJECTIVES, COLORS, NOUNS};

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Literal(String),
    Category(&'static str),
}

/// Split a template into literals and category placeholders.
pub fn parse_template(template: &str) -> Result<Vec<Piece>> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }

        let category = match chars.next() {
            Some('%') => {
                literal.push('%');
                continue;
            }
            Some('a') => ADJECTIVES,
            Some('n') => NOUNS,
            Some('c') => COLORS,
            Some(other) => bail!("unknown placeholder %{other} in template {template:?}"),
            None => bail!("template {template:?} ends with a lone %"),
        };

        if !literal.is_empty() {
            pieces.push(Piece::Literal(std::mem::take(&mut literal)));
        }
        pieces.push(Piece::Category(category));
    }

    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }

    Ok(pieces)
}

/// Render parsed pieces, drawing each placeholder through `draw`.
pub fn render<F>(pieces: &[Piece], mut draw: F) -> spicy_core::Result<String>
where
    F: FnMut(&str) -> spicy_core::Result<String>,
{
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Category(category) => out.push_str(&draw(category)?),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed() {
        let pieces = parse_template("the %a %n is 100%%").unwrap();
        assert_eq!(
            pieces,
            vec![
                Piece::Literal("the ".into()),
                Piece::Category(ADJECTIVES),
                Piece::Literal(" ".into()),
                Piece::Category(NOUNS),
                Piece::Literal(" is 100%".into()),
            ]
        );
    }

    #[test]
    fn test_parse_adjacent_placeholders() {
        let pieces = parse_template("%c%n").unwrap();
        assert_eq!(pieces, vec![Piece::Category(COLORS), Piece::Category(NOUNS)]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_template("%x").is_err());
        assert!(parse_template("trailing %").is_err());
    }

    #[test]
    fn test_render_draws_per_placeholder() {
        let pieces = parse_template("%a-%a-%n").unwrap();
        let mut calls = Vec::new();
        let out = render(&pieces, |category| {
            calls.push(category.to_string());
            Ok(format!("{}{}", &category[..1], calls.len()))
        })
        .unwrap();

        assert_eq!(out, "a1-a2-n3");
        assert_eq!(calls, vec!["adjectives", "adjectives", "nouns"]);
    }

    #[test]
    fn test_render_propagates_error() {
        let pieces = parse_template("%n").unwrap();
        let result = render(&pieces, |_| Err(spicy_core::Error::NoWordsInRange { lo: 3, hi: 3 }));
        assert!(result.is_err());
    }
}
