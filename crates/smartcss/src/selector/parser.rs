//! Selector tokenizing on top of the `cssparser` crate.
//!
//! The registry only consumes the shape produced here: a list of
//! comma-separated alternatives, each an ordered chain of [`RawSegment`]s.
//! Any other [`SelectorParser`] producing the same shape can be plugged into a
//! [`StyleContext`](crate::StyleContext).

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

use super::types::{Combinator, Pseudo, PseudoKind, RawSegment, RawSelector};
use crate::{Error, Result};

/// Parses a selector string into comma-separated groups of raw segments.
pub trait SelectorParser: Send + Sync {
    /// Parse `selector`. One [`RawSelector`] is returned per comma-separated
    /// alternative.
    fn parse(&self, selector: &str) -> Result<Vec<RawSelector>>;
}

/// The default selector parser.
///
/// Accepts class selectors, pseudo-classes, pseudo-elements, the four
/// combinators, and comma groups. Type, id, attribute and universal
/// selectors are rejected because generated class names are the only thing
/// the registry can scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssSelectorParser;

impl SelectorParser for CssSelectorParser {
    fn parse(&self, selector: &str) -> Result<Vec<RawSelector>> {
        parse_selector_groups(selector)
    }
}

/// Parse a selector string into its comma-separated groups.
///
/// # Example
///
/// ```
/// use smartcss::selector::{parse_selector_groups, Combinator};
///
/// let groups = parse_selector_groups(".a:hover > .b").unwrap();
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0][1].combinator, Some(Combinator::Child));
/// ```
pub fn parse_selector_groups(selector: &str) -> Result<Vec<RawSelector>> {
    let mut input = ParserInput::new(selector);
    let mut parser = Parser::new(&mut input);
    let mut groups = GroupBuilder::new(selector);

    loop {
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) => groups.whitespace(),

            Token::Delim('.') => {
                let class = match next_token(&mut parser, selector)? {
                    Token::Ident(name) => name.to_string(),
                    _ => return Err(Error::invalid_selector(selector, "Expected class name after '.'")),
                };
                groups.begin_simple();
                groups.current.class_list.push(class);
            }

            Token::Colon => {
                groups.begin_simple();
                let pseudo = parse_pseudo(&mut parser, selector)?;
                groups.current.pseudos.push(pseudo);
            }

            Token::Delim('>') => groups.combinator(Combinator::Child)?,
            Token::Delim('+') => groups.combinator(Combinator::AdjacentSibling)?,
            Token::Delim('~') => groups.combinator(Combinator::GeneralSibling)?,

            Token::Comma => groups.end_group()?,

            Token::Ident(name) => {
                return Err(Error::invalid_selector(
                    selector,
                    format!("Type selector '{}' is not supported, use a class", name),
                ));
            }

            Token::IDHash(id) | Token::Hash(id) => {
                return Err(Error::invalid_selector(
                    selector,
                    format!("Id selector '#{}' is not supported, use a class", id),
                ));
            }

            Token::Delim('*') => {
                return Err(Error::invalid_selector(selector, "Universal selector is not supported"));
            }

            Token::SquareBracketBlock => {
                return Err(Error::invalid_selector(selector, "Attribute selectors are not supported"));
            }

            other => {
                return Err(Error::invalid_selector(
                    selector,
                    format!("Unexpected token {:?}", other),
                ));
            }
        }
    }

    groups.finish()
}

fn next_token<'i>(parser: &mut Parser<'i, '_>, selector: &str) -> Result<Token<'i>> {
    parser
        .next_including_whitespace()
        .cloned()
        .map_err(|_| Error::invalid_selector(selector, "Unexpected end of selector"))
}

/// Parse what follows a ':' (a second ':' marks a pseudo-element).
fn parse_pseudo<'i>(parser: &mut Parser<'i, '_>, selector: &str) -> Result<Pseudo> {
    let mut kind = PseudoKind::Class;
    let mut token = next_token(parser, selector)?;
    if token == Token::Colon {
        kind = PseudoKind::Element;
        token = next_token(parser, selector)?;
    }

    match token {
        Token::Ident(name) => Ok(Pseudo {
            kind,
            name: name.to_string(),
            value: None,
        }),
        Token::Function(name) => {
            let value = parser
                .parse_nested_block(|p| Ok::<_, CssParseError<'i, ()>>(remaining_text(p)))
                .map_err(|_| {
                    Error::invalid_selector(selector, format!("Invalid argument for '{}'", name))
                })?;
            if value.is_empty() {
                return Err(Error::invalid_selector(
                    selector,
                    format!("Empty argument for '{}()'", name),
                ));
            }
            Ok(Pseudo {
                kind,
                name: name.to_string(),
                value: Some(value),
            })
        }
        _ => Err(Error::invalid_selector(
            selector,
            format!("Expected pseudo name after '{}'", kind.prefix()),
        )),
    }
}

/// Consume the rest of a nested block and return its source text.
fn remaining_text(parser: &mut Parser<'_, '_>) -> String {
    let start = parser.position();
    while parser.next_including_whitespace_and_comments().is_ok() {}
    parser.slice_from(start).trim().to_string()
}

/// Accumulates segments and groups while tokens stream in.
struct GroupBuilder<'a> {
    selector: &'a str,
    groups: Vec<RawSelector>,
    segments: RawSelector,
    current: RawSegment,
    pending: Option<Combinator>,
    saw_whitespace: bool,
}

impl<'a> GroupBuilder<'a> {
    fn new(selector: &'a str) -> Self {
        Self {
            selector,
            groups: vec![],
            segments: vec![],
            current: RawSegment::default(),
            pending: None,
            saw_whitespace: false,
        }
    }

    /// Called before a class or pseudo is added. Starts a new segment when a
    /// combinator (explicit or whitespace) separates it from the current one.
    fn begin_simple(&mut self) {
        if !self.current.is_empty() {
            let descendant = self.saw_whitespace.then_some(Combinator::Descendant);
            if let Some(combinator) = self.pending.take().or(descendant) {
                let finished = std::mem::take(&mut self.current);
                self.segments.push(finished);
                self.current.combinator = Some(combinator);
            }
        }
        self.saw_whitespace = false;
    }

    fn whitespace(&mut self) {
        if !self.current.is_empty() {
            self.saw_whitespace = true;
        }
    }

    fn combinator(&mut self, combinator: Combinator) -> Result<()> {
        if self.current.is_empty() {
            return Err(Error::invalid_selector(
                self.selector,
                format!("Combinator '{}' without a preceding segment", combinator.as_css()),
            ));
        }
        if self.pending.is_some() {
            return Err(Error::invalid_selector(self.selector, "Consecutive combinators"));
        }
        self.pending = Some(combinator);
        Ok(())
    }

    fn end_group(&mut self) -> Result<()> {
        if let Some(combinator) = self.pending {
            return Err(Error::invalid_selector(
                self.selector,
                format!("Dangling combinator '{}'", combinator.as_css()),
            ));
        }
        if self.current.is_empty() {
            return Err(Error::invalid_selector(self.selector, "Empty selector"));
        }
        self.segments.push(std::mem::take(&mut self.current));
        self.groups.push(std::mem::take(&mut self.segments));
        self.saw_whitespace = false;
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<RawSelector>> {
        self.end_group()?;
        Ok(self.groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(selector: &str) -> RawSelector {
        let mut groups = parse_selector_groups(selector).unwrap();
        assert_eq!(groups.len(), 1, "expected one group for {selector}");
        groups.remove(0)
    }

    #[test]
    fn parse_single_class() {
        let segments = single(".root");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].class_list, ["root"]);
        assert_eq!(segments[0].combinator, None);
        assert!(segments[0].pseudos.is_empty());
    }

    #[test]
    fn parse_pseudo_class_and_element() {
        let segments = single(".a:hover::first-line");
        assert_eq!(
            segments[0].pseudos,
            [Pseudo::class("hover"), Pseudo::element("first-line")]
        );
    }

    #[test]
    fn parse_functional_pseudo() {
        let segments = single(".a:nth-child( 2n + 1 )");
        assert_eq!(
            segments[0].pseudos,
            [Pseudo::class("nth-child").with_value("2n + 1")]
        );
    }

    #[test]
    fn parse_descendant_chain() {
        let segments = single(".a:hover .b");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].class_list, ["a"]);
        assert_eq!(segments[0].pseudos, [Pseudo::class("hover")]);
        assert_eq!(segments[1].class_list, ["b"]);
        assert_eq!(segments[1].combinator, Some(Combinator::Descendant));
    }

    #[test]
    fn parse_explicit_combinators() {
        let segments = single(".a > .b+.c ~ .d");
        let combinators: Vec<_> = segments.iter().map(|s| s.combinator).collect();
        assert_eq!(
            combinators,
            [
                None,
                Some(Combinator::Child),
                Some(Combinator::AdjacentSibling),
                Some(Combinator::GeneralSibling),
            ]
        );
    }

    #[test]
    fn parse_compound_stays_in_one_segment() {
        let segments = single(".a.b");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].class_list, ["a", "b"]);
    }

    #[test]
    fn parse_groups() {
        let groups = parse_selector_groups(".a, .b:hover").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1][0].class_list, ["b"]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let segments = single("  .a  ");
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn reject_unsupported_selectors() {
        for selector in ["div", "#main", "*", ".a[href]", "", ".a,", "> .a", ".a >", ".a > > .b", ". a"] {
            assert!(
                matches!(parse_selector_groups(selector), Err(Error::InvalidSelector { .. })),
                "{selector:?} should be rejected"
            );
        }
    }
}
