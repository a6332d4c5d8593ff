//! Recursive-descent selector parser.
//!
//! Grammar:
//!
//! ```text
//! selector_group      := selector (',' selector)*
//! selector            := simple_sequence (combinator simple_sequence)*
//! combinator          := WS | '>' | '+' | '~'
//! simple_sequence     := ('*' | type_selector)? qualifier*
//! qualifier           := id_selector | class_selector | attribute_selector | pseudo_selector
//! type_selector       := identifier
//! id_selector         := '#' name
//! class_selector      := '.' identifier
//! attribute_selector  := '[' WS identifier WS (attr_op value)? WS ']'
//! attr_op             := '=' | '~=' | '^=' | '$=' | '*='
//! value               := quoted_string | identifier
//! pseudo_selector     := ':' identifier ( '(' selector_group ')' )?
//! ```
//!
//! Whitespace everywhere includes `/* ... */` comments. Parsing stops at the
//! first error; there is no recovery.

use bramble_common::warning::warn_once;
use bramble_dom::Tag;

use crate::error::{InvalidInputKind, SelectorError};
use crate::scanner::Scanner;
use crate::selector::{AttributeOp, AttributeSelector, BinaryOp, Selector};

/// Structural pseudo-classes that are recognized by name but not implemented.
const UNSUPPORTED_PSEUDO_CLASSES: &[&str] = &[
    "nth-child",
    "nth-last-child",
    "nth-of-type",
    "nth-last-of-type",
    "first-child",
    "last-child",
    "first-of-type",
    "last-of-type",
    "only-child",
    "only-of-type",
];

/// Parse selector text into a [`Selector`].
///
/// An empty (or all-whitespace) input parses to [`Selector::Universal`].
///
/// # Errors
///
/// Returns [`SelectorError`] on the first syntax error, on any backslash
/// escape, and on structural pseudo-classes such as `:first-child`.
pub fn parse_selector(input: &str) -> Result<Selector, SelectorError> {
    SelectorParser::new(input).parse()
}

/// Parser state: a cursor over one selector string.
#[derive(Debug, Clone)]
pub struct SelectorParser<'a> {
    scanner: Scanner<'a>,
}

impl<'a> SelectorParser<'a> {
    /// Create a parser over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            scanner: Scanner::new(input),
        }
    }

    /// Parse the whole input as a selector group.
    ///
    /// # Errors
    ///
    /// See [`parse_selector`]. Input left over after the group (such as an
    /// unbalanced `)`) is an error.
    pub fn parse(mut self) -> Result<Selector, SelectorError> {
        let selector = self.parse_selector_group()?;
        match self.scanner.peek() {
            None => Ok(selector),
            Some(c) => Err(self.invalid(InvalidInputKind::TrailingInput(c))),
        }
    }

    /// `selector_group := selector (',' selector)*`
    fn parse_selector_group(&mut self) -> Result<Selector, SelectorError> {
        let mut selector = self.parse_complex_selector()?;
        while self.scanner.eat(',') {
            let next = self.parse_complex_selector()?;
            selector = Selector::binary(BinaryOp::Union, selector, next);
        }
        Ok(selector)
    }

    /// `selector := simple_sequence (combinator simple_sequence)*`
    ///
    /// Whitespace is a tentative descendant combinator; an explicit `>`, `+`
    /// or `~` after it takes over. Whitespace before the end of input, a `,`
    /// or a `)` is dropped.
    fn parse_complex_selector(&mut self) -> Result<Selector, SelectorError> {
        let _ = self.scanner.skip_whitespace();
        let mut selector = self.parse_simple_sequence()?;

        loop {
            let saw_whitespace = self.scanner.skip_whitespace();

            let op = match self.scanner.peek() {
                None | Some(',' | ')') => return Ok(selector),
                Some(c @ ('>' | '+' | '~')) => {
                    let _ = self.scanner.advance();
                    let _ = self.scanner.skip_whitespace();
                    match c {
                        '>' => BinaryOp::Child,
                        '+' => BinaryOp::Adjacent,
                        _ => BinaryOp::Sibling,
                    }
                }
                Some(_) if saw_whitespace => BinaryOp::Descendant,
                Some(c) => return Err(self.invalid(InvalidInputKind::UnexpectedCharacter(c))),
            };

            let next = self.parse_simple_sequence()?;
            selector = Selector::binary(op, selector, next);
        }
    }

    /// `simple_sequence := ('*' | type_selector)? qualifier*`
    ///
    /// Qualifiers fold left into intersections. A sequence with nothing in
    /// it, or only `*`, is [`Selector::Universal`].
    fn parse_simple_sequence(&mut self) -> Result<Selector, SelectorError> {
        let Some(first) = self.scanner.peek() else {
            return Ok(Selector::Universal);
        };

        let mut selector = match first {
            '*' => {
                let _ = self.scanner.advance();
                None
            }
            '#' | '.' | '[' | ':' => None,
            _ => Some(self.parse_type_selector()?),
        };

        loop {
            let qualifier = match self.scanner.peek() {
                Some('#') => self.parse_id_selector()?,
                Some('.') => self.parse_class_selector()?,
                Some('[') => self.parse_attribute_selector()?,
                Some(':') => self.parse_pseudo_class_selector()?,
                _ => break,
            };
            selector = Some(match selector {
                Some(current) => Selector::binary(BinaryOp::Intersection, current, qualifier),
                None => qualifier,
            });
        }

        Ok(selector.unwrap_or(Selector::Universal))
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    fn parse_type_selector(&mut self) -> Result<Selector, SelectorError> {
        let name = self.parse_identifier()?;
        Ok(Selector::Tag(Tag::from_name(&name)))
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    fn parse_id_selector(&mut self) -> Result<Selector, SelectorError> {
        let _ = self.scanner.advance(); // #
        let id = self.parse_name()?;
        Ok(Selector::Attribute(AttributeSelector::new(
            AttributeOp::Equals,
            "id",
            id,
        )))
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    fn parse_class_selector(&mut self) -> Result<Selector, SelectorError> {
        let _ = self.scanner.advance(); // .
        let class = self.parse_identifier()?;
        Ok(Selector::Attribute(AttributeSelector::new(
            AttributeOp::Listed,
            "class",
            class,
        )))
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    fn parse_attribute_selector(&mut self) -> Result<Selector, SelectorError> {
        let _ = self.scanner.advance(); // [
        let _ = self.scanner.skip_whitespace();
        let name = self.parse_identifier()?;
        let _ = self.scanner.skip_whitespace();

        if self.scanner.is_at_end() {
            return Err(self.invalid(InvalidInputKind::UnexpectedEnd));
        }
        if self.scanner.eat(']') {
            return Ok(Selector::Attribute(AttributeSelector::new(
                AttributeOp::Exists,
                name,
                "",
            )));
        }

        let op = self.parse_attribute_operator()?;
        let _ = self.scanner.skip_whitespace();

        let value = match self.scanner.peek() {
            None => return Err(self.invalid(InvalidInputKind::UnexpectedEnd)),
            Some(quote @ ('"' | '\'')) => self.parse_string(quote)?,
            Some(_) => self.parse_identifier()?,
        };

        let _ = self.scanner.skip_whitespace();
        if !self.scanner.eat(']') {
            return Err(self.invalid(InvalidInputKind::MissingClosingBracket));
        }

        Ok(Selector::Attribute(AttributeSelector::new(op, name, value)))
    }

    /// Decide the operator from two characters of lookahead: a leading `=`
    /// is the one-character `=`, anything else must be a two-character
    /// operator.
    fn parse_attribute_operator(&mut self) -> Result<AttributeOp, SelectorError> {
        let (Some(first), Some(second)) = (self.scanner.peek(), self.scanner.peek_at(1)) else {
            return Err(self.invalid(InvalidInputKind::UnexpectedEnd));
        };

        if first == '=' {
            let _ = self.scanner.advance();
            return Ok(AttributeOp::Equals);
        }

        let op = match (first, second) {
            ('~', '=') => AttributeOp::Listed,
            ('^', '=') => AttributeOp::Prefix,
            ('$', '=') => AttributeOp::Suffix,
            ('*', '=') => AttributeOp::Contains,
            _ => {
                return Err(self.invalid(InvalidInputKind::UnknownAttributeOperator(
                    [first, second].iter().collect(),
                )));
            }
        };
        let _ = self.scanner.advance();
        let _ = self.scanner.advance();
        Ok(op)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Only `:not(<selector_group>)` is implemented.
    fn parse_pseudo_class_selector(&mut self) -> Result<Selector, SelectorError> {
        let _ = self.scanner.advance(); // :
        let start = self.scanner.position();
        let name = self.parse_identifier()?.to_lowercase();

        if name == "not" {
            if !self.scanner.eat('(') {
                return Err(self.invalid(InvalidInputKind::MissingOpeningParenthesis));
            }
            let _ = self.scanner.skip_whitespace();
            let inner = self.parse_selector_group()?;
            let _ = self.scanner.skip_whitespace();
            if !self.scanner.eat(')') {
                return Err(self.invalid(InvalidInputKind::MissingClosingParenthesis));
            }
            return Ok(Selector::Not(Box::new(inner)));
        }

        if UNSUPPORTED_PSEUDO_CLASSES.contains(&name.as_str()) {
            warn_once("Selector", &format!("unsupported pseudo-class ':{name}'"));
            return Err(SelectorError::PseudoClassUnimplemented { name });
        }

        Err(SelectorError::invalid(
            start,
            InvalidInputKind::UnknownPseudoClass(name),
        ))
    }

    /// `identifier := '-'? name`, where the name after the optional dash
    /// must start with a letter or `_`.
    fn parse_identifier(&mut self) -> Result<String, SelectorError> {
        let dash = self.scanner.eat('-');

        match self.scanner.peek() {
            None => Err(self.invalid(InvalidInputKind::UnexpectedEnd)),
            Some(c) if is_identifier_start(c) || c == '\\' => {
                let name = self.parse_name()?;
                Ok(if dash { format!("-{name}") } else { name })
            }
            Some(c) => Err(self.invalid(InvalidInputKind::UnexpectedCharacter(c))),
        }
    }

    /// A run of identifier characters. Escapes are rejected, never decoded.
    fn parse_name(&mut self) -> Result<String, SelectorError> {
        let name = self.scanner.take_while(is_identifier_char);
        if self.scanner.peek() == Some('\\') {
            return Err(self.escaping_unimplemented());
        }
        if name.is_empty() {
            return Err(self.invalid(InvalidInputKind::EmptyIdentifier));
        }
        Ok(name.to_string())
    }

    /// A string delimited by `quote`, taken verbatim. Backslashes and line
    /// breaks inside are errors.
    fn parse_string(&mut self, quote: char) -> Result<String, SelectorError> {
        let _ = self.scanner.advance(); // opening quote
        let value = self
            .scanner
            .take_while(|c| c != quote && c != '\\' && !is_newline(c));

        match self.scanner.peek() {
            Some(c) if c == quote => {
                let _ = self.scanner.advance();
                Ok(value.to_string())
            }
            Some('\\') => Err(self.escaping_unimplemented()),
            Some(_) => Err(self.invalid(InvalidInputKind::LineBreakInString)),
            None => Err(self.invalid(InvalidInputKind::UnterminatedString)),
        }
    }

    fn escaping_unimplemented(&self) -> SelectorError {
        warn_once("Selector", "escape sequences in selectors are unsupported");
        SelectorError::EscapingUnimplemented {
            position: self.scanner.position(),
        }
    }

    fn invalid(&self, kind: InvalidInputKind) -> SelectorError {
        SelectorError::invalid(self.scanner.position(), kind)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    is_identifier_start(c) || c.is_numeric() || c == '-'
}

/// Line terminators that may not appear inside a quoted string.
const fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
