//! Media condition validation.
//!
//! Conditions are checked with the `cssparser` tokenizer before a rule is
//! accepted. Anything that could escape the `@media` prelude (blocks,
//! semicolons, stray closing brackets, nested at-rules) is rejected.

use cssparser::{ParseError as CssParseError, ParseErrorKind, Parser, ParserInput, Token};

use crate::{Error, Result};

/// Validate a media condition and return its normalized form.
///
/// A bare feature such as `min-width: 500px` is wrapped in parentheses;
/// every other condition is kept verbatim, trimmed. A bare feature combined
/// with further conditions (`min-width: 1px and (color)`) is rejected.
///
/// # Example
///
/// ```
/// use smartcss::media::normalize_media;
///
/// assert_eq!(normalize_media("min-width: 500px").unwrap(), "(min-width: 500px)");
/// assert_eq!(normalize_media(" screen and (orientation: landscape) ").unwrap(),
///            "screen and (orientation: landscape)");
/// assert!(normalize_media("(max-width: 1px)} body {").is_err());
/// ```
pub fn normalize_media(media: &str) -> Result<String> {
    let trimmed = media.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_media(media, "empty media condition"));
    }

    let mut input = ParserInput::new(trimmed);
    let mut parser = Parser::new(&mut input);
    check_tokens(&mut parser).map_err(|e| {
        let message = match e.kind {
            ParseErrorKind::Custom(message) => message.to_string(),
            ParseErrorKind::Basic(kind) => format!("{:?}", kind),
        };
        Error::invalid_media(media, message)
    })?;

    if !is_bare_feature(trimmed) {
        return Ok(trimmed.to_string());
    }
    if joins_conditions(trimmed) {
        return Err(Error::invalid_media(
            media,
            "a bare feature must be the whole condition, wrap it in parentheses",
        ));
    }
    Ok(format!("({})", trimmed))
}

fn check_tokens<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<(), CssParseError<'i, &'static str>> {
    loop {
        let token = match parser.next() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        let rejected = match token {
            Token::CurlyBracketBlock | Token::CloseCurlyBracket => "blocks are not allowed",
            Token::Semicolon => "';' is not allowed",
            Token::AtKeyword(_) => "at-rules are not allowed",
            Token::CloseParenthesis | Token::CloseSquareBracket => "unbalanced brackets",
            Token::BadString(_) | Token::BadUrl(_) => "malformed string or url",
            Token::ParenthesisBlock | Token::SquareBracketBlock | Token::Function(_) => {
                parser.parse_nested_block(|p| check_tokens(p))?;
                continue;
            }
            _ => continue,
        };
        return Err(parser.new_custom_error(rejected));
    }
    Ok(())
}

/// `min-width: 500px`: an identifier directly followed by a colon.
fn is_bare_feature(media: &str) -> bool {
    let mut input = ParserInput::new(media);
    let mut parser = Parser::new(&mut input);
    matches!(parser.next(), Ok(Token::Ident(_))) && matches!(parser.next(), Ok(Token::Colon))
}

/// Whether the value after a bare feature's colon continues into another
/// condition.
fn joins_conditions(media: &str) -> bool {
    let mut input = ParserInput::new(media);
    let mut parser = Parser::new(&mut input);
    // feature name and colon
    let _ = parser.next();
    let _ = parser.next();

    while let Ok(token) = parser.next() {
        match token {
            Token::Ident(word)
                if ["and", "or", "not", "only"]
                    .iter()
                    .any(|keyword| word.eq_ignore_ascii_case(keyword)) =>
            {
                return true;
            }
            Token::Comma | Token::ParenthesisBlock => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_bare_features() {
        assert_eq!(normalize_media("max-width: 500px").unwrap(), "(max-width: 500px)");
    }

    #[test]
    fn bare_feature_must_stand_alone() {
        for media in [
            "min-width: 500px and (orientation: landscape)",
            "min-width: 500px, print",
            "orientation: landscape or (color)",
        ] {
            assert!(
                matches!(normalize_media(media), Err(Error::InvalidMedia { .. })),
                "{media:?} should be rejected"
            );
        }
        assert_eq!(normalize_media("aspect-ratio: 16/9").unwrap(), "(aspect-ratio: 16/9)");
        assert_eq!(normalize_media("orientation: landscape").unwrap(), "(orientation: landscape)");
    }

    #[test]
    fn keeps_complete_queries() {
        for media in [
            "(max-width: 500px)",
            "(min-width: 700px) and (orientation: landscape)",
            "print",
            "screen and (min-resolution: 2dppx)",
            "not all and (monochrome)",
        ] {
            assert_eq!(normalize_media(media).unwrap(), media);
        }
    }

    #[test]
    fn rejects_malformed_conditions() {
        for media in ["", "   ", "(max-width: 1px)}", "a; b", "{}", "@import x", "width)"] {
            assert!(
                matches!(normalize_media(media), Err(Error::InvalidMedia { .. })),
                "{media:?} should be rejected"
            );
        }
    }
}
