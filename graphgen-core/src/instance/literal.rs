//! Textual literals for vector and dictionary files.
//!
//! The accepted syntax is the literal subset of Python expressions: integers,
//! floats, `True`/`False`, `None`, quoted strings, lists, tuples and dicts.
//! Rendering produces text the parser (and a Python `literal_eval`) reads back
//! to the same value.

use std::{
    collections::BTreeMap,
    fmt::{self, Write as _},
    str::Chars,
};

use pest::{Parser, iterators::Pair};
use pest_derive::Parser;

use crate::error::LiteralError;

#[derive(Parser)]
#[grammar = "instance/literal.pest"]
struct LiteralParser;

/// A parsed literal value.
///
/// # Examples
/// ```
/// use graphgen_core::Literal;
///
/// let value: Literal = "[1, 2.5, (True, None), {'a': -3}]".parse().expect("valid literal");
/// assert_eq!(value.to_string(), "[1, 2.5, (True, None), {'a': -3}]");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// `None`.
    None,
    /// `True` or `False`.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A finite float.
    Float(f64),
    /// A quoted string.
    Str(String),
    /// `[a, b, ...]`.
    List(Vec<Literal>),
    /// `(a, b, ...)`; a single element is written `(a,)`.
    Tuple(Vec<Literal>),
    /// `{key: value, ...}` in source order.
    Dict(Vec<(Literal, Literal)>),
}

impl Literal {
    /// Short name of the literal's kind, as used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Dict(_) => "dict",
        }
    }

    /// Renders the literal, refusing values that would not parse back.
    ///
    /// # Errors
    /// Returns [`LiteralError::NonFiniteFloat`] when any nested float is
    /// infinite or NaN.
    pub fn render(&self) -> Result<String, LiteralError> {
        if let Some(value) = self.first_non_finite() {
            return Err(LiteralError::NonFiniteFloat {
                text: format!("{value:?}"),
            });
        }
        Ok(self.to_string())
    }

    fn first_non_finite(&self) -> Option<f64> {
        match self {
            Self::Float(value) if !value.is_finite() => Some(*value),
            Self::List(items) | Self::Tuple(items) => {
                items.iter().find_map(Self::first_non_finite)
            }
            Self::Dict(entries) => entries.iter().find_map(|(key, value)| {
                key.first_non_finite().or_else(|| value.first_non_finite())
            }),
            _ => None,
        }
    }

    /// Reads a list or tuple of integers.
    ///
    /// # Errors
    /// Returns the first offending literal: `self` when it is not a sequence,
    /// otherwise the first element that is not an integer.
    pub fn to_int_vec(&self) -> Result<Vec<i64>, &Self> {
        match self {
            Self::List(items) | Self::Tuple(items) => items
                .iter()
                .map(|item| match item {
                    Self::Int(value) => Ok(*value),
                    other => Err(other),
                })
                .collect(),
            other => Err(other),
        }
    }

    /// Reads a dict with integer keys and values.
    ///
    /// Repeated keys keep the last value.
    ///
    /// # Errors
    /// Returns the first offending literal: `self` when it is not a dict,
    /// otherwise the first key or value that is not an integer.
    pub fn to_int_map(&self) -> Result<BTreeMap<i64, i64>, &Self> {
        let Self::Dict(entries) = self else {
            return Err(self);
        };
        entries
            .iter()
            .map(|(key, value)| match (key, value) {
                (Self::Int(key), Self::Int(value)) => Ok((*key, *value)),
                (Self::Int(_), other) | (other, _) => Err(other),
            })
            .collect()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(value) => write!(f, "{value}"),
            // Debug keeps a fractional part or exponent and round-trips exactly.
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Str(text) => write_quoted(f, text),
            Self::List(items) => {
                f.write_char('[')?;
                write_items(f, items)?;
                f.write_char(']')
            }
            Self::Tuple(items) => {
                f.write_char('(')?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_char(',')?;
                }
                f.write_char(')')
            }
            Self::Dict(entries) => {
                f.write_char('{')?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            }
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Literal]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('\'')?;
    for ch in text.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\'' => f.write_str("\\'")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            control if control.is_control() => write!(f, "\\x{:02x}", u32::from(control))?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('\'')
}

impl std::str::FromStr for Literal {
    type Err = LiteralError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_literal(text)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<&[i64]> for Literal {
    fn from(items: &[i64]) -> Self {
        Self::List(items.iter().copied().map(Self::Int).collect())
    }
}

impl From<&BTreeMap<i64, i64>> for Literal {
    fn from(map: &BTreeMap<i64, i64>) -> Self {
        Self::Dict(
            map.iter()
                .map(|(key, value)| (Self::Int(*key), Self::Int(*value)))
                .collect(),
        )
    }
}

/// Parses a single literal, ignoring surrounding whitespace.
///
/// # Errors
/// Returns [`LiteralError::Syntax`] for malformed text,
/// [`LiteralError::IntegerOverflow`] for integers outside `i64` and
/// [`LiteralError::NonFiniteFloat`] for floats that overflow to infinity.
///
/// # Examples
/// ```
/// use graphgen_core::{Literal, parse_literal};
///
/// assert_eq!(parse_literal("(7,)").expect("valid"), Literal::Tuple(vec![Literal::Int(7)]));
/// assert!(parse_literal("[1, 2").is_err());
/// ```
pub fn parse_literal(text: &str) -> Result<Literal, LiteralError> {
    let mut pairs = LiteralParser::parse(Rule::document, text).map_err(|err| {
        LiteralError::Syntax {
            message: err.to_string(),
        }
    })?;
    let value = pairs
        .next()
        .and_then(|document| document.into_inner().next())
        .ok_or_else(|| syntax("document holds no value"))?;
    build(value)
}

fn syntax(message: impl Into<String>) -> LiteralError {
    LiteralError::Syntax {
        message: message.into(),
    }
}

fn build(pair: Pair<'_, Rule>) -> Result<Literal, LiteralError> {
    let text = pair.as_str();
    match pair.as_rule() {
        Rule::integer => text
            .parse()
            .map(Literal::Int)
            .map_err(|_| LiteralError::IntegerOverflow {
                text: text.to_owned(),
            }),
        Rule::float => {
            let value: f64 = text
                .parse()
                .map_err(|_| syntax(format!("invalid float `{text}`")))?;
            if value.is_finite() {
                Ok(Literal::Float(value))
            } else {
                Err(LiteralError::NonFiniteFloat {
                    text: text.to_owned(),
                })
            }
        }
        Rule::boolean => Ok(Literal::Bool(text == "True")),
        Rule::none => Ok(Literal::None),
        Rule::string => {
            let inner = pair.into_inner().next().map_or("", |inner| inner.as_str());
            unescape(inner).map(Literal::Str)
        }
        Rule::list => build_items(pair).map(Literal::List),
        Rule::tuple => build_items(pair).map(Literal::Tuple),
        Rule::group => pair
            .into_inner()
            .next()
            .ok_or_else(|| syntax("empty parentheses"))
            .and_then(build),
        Rule::dict => pair
            .into_inner()
            .map(|entry| {
                let mut parts = entry.into_inner();
                match (parts.next(), parts.next()) {
                    (Some(key), Some(value)) => Ok((build(key)?, build(value)?)),
                    _ => Err(syntax("dict entry needs a key and a value")),
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Literal::Dict),
        other => Err(syntax(format!("unexpected rule {other:?}"))),
    }
}

fn build_items(pair: Pair<'_, Rule>) -> Result<Vec<Literal>, LiteralError> {
    pair.into_inner().map(build).collect()
}

fn unescape(raw: &str) -> Result<String, LiteralError> {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('r') => decoded.push('\r'),
            Some('t') => decoded.push('\t'),
            Some('0') => decoded.push('\0'),
            Some(quoted @ ('\\' | '\'' | '"')) => decoded.push(quoted),
            Some('x') => decoded.push(hex_escape(&mut chars, 2)?),
            Some('u') => decoded.push(hex_escape(&mut chars, 4)?),
            Some('U') => decoded.push(hex_escape(&mut chars, 8)?),
            // Unknown escapes keep their backslash.
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            }
            None => decoded.push('\\'),
        }
    }
    Ok(decoded)
}

fn hex_escape(chars: &mut Chars<'_>, width: usize) -> Result<char, LiteralError> {
    let digits: String = chars.by_ref().take(width).collect();
    Some(&digits)
        .filter(|digits| digits.len() == width)
        .and_then(|digits| u32::from_str_radix(digits, 16).ok())
        .and_then(char::from_u32)
        .ok_or_else(|| syntax(format!("invalid escape sequence with digits `{digits}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::int("42", Literal::Int(42))]
    #[case::negative("-7", Literal::Int(-7))]
    #[case::plus("+3", Literal::Int(3))]
    #[case::float("2.5", Literal::Float(2.5))]
    #[case::trailing_dot("3.", Literal::Float(3.0))]
    #[case::leading_dot("-.5", Literal::Float(-0.5))]
    #[case::exponent("1e3", Literal::Float(1000.0))]
    #[case::bool_true("True", Literal::Bool(true))]
    #[case::none(" None\n", Literal::None)]
    #[case::double_quoted("\"a'b\"", Literal::Str("a'b".into()))]
    #[case::escapes(r"'x\ty\\z\x41'", Literal::Str("x\ty\\zA".into()))]
    #[case::empty_list("[]", Literal::List(vec![]))]
    #[case::trailing_comma("[1, 2,]", Literal::List(vec![Literal::Int(1), Literal::Int(2)]))]
    #[case::unit_tuple("()", Literal::Tuple(vec![]))]
    #[case::singleton_tuple("( 1 , )", Literal::Tuple(vec![Literal::Int(1)]))]
    #[case::empty_dict("{}", Literal::Dict(vec![]))]
    #[case::grouped_scalar("(1)", Literal::Int(1))]
    #[case::nested_groups("((-2.5))", Literal::Float(-2.5))]
    #[case::grouped_tuple("((1, 2))", Literal::Tuple(vec![Literal::Int(1), Literal::Int(2)]))]
    #[case::grouped_list("( [7] )", Literal::List(vec![Literal::Int(7)]))]
    fn parses_scalars_and_containers(#[case] text: &str, #[case] expected: Literal) {
        assert_eq!(parse_literal(text).expect("valid literal"), expected);
    }

    #[rstest]
    fn parses_nested_containers() {
        let literal = parse_literal("{1: [2, (3, 4.0)], 'k': {None: False}}").expect("valid");
        assert_eq!(
            literal,
            Literal::Dict(vec![
                (
                    Literal::Int(1),
                    Literal::List(vec![
                        Literal::Int(2),
                        Literal::Tuple(vec![Literal::Int(3), Literal::Float(4.0)]),
                    ]),
                ),
                (
                    Literal::Str("k".into()),
                    Literal::Dict(vec![(Literal::None, Literal::Bool(false))]),
                ),
            ])
        );
    }

    #[rstest]
    #[case::unclosed("[1, 2")]
    #[case::unclosed_group("(1")]
    #[case::grouped_pair_without_comma("(1 2)")]
    #[case::keyword_prefix("Truth")]
    #[case::two_values("1 2")]
    #[case::bare_word("inf")]
    #[case::empty("")]
    #[case::newline_in_string("'a\nb'")]
    fn rejects_malformed_text(#[case] text: &str) {
        let err = parse_literal(text).expect_err("text must be rejected");
        assert!(matches!(err, LiteralError::Syntax { .. }), "{err:?}");
    }

    #[rstest]
    fn reports_integer_overflow() {
        let err = parse_literal("[99999999999999999999]").expect_err("overflow");
        assert_eq!(
            err,
            LiteralError::IntegerOverflow {
                text: "99999999999999999999".into()
            }
        );
    }

    #[rstest]
    fn rejects_floats_that_overflow() {
        let err = parse_literal("1e999").expect_err("overflow to infinity");
        assert!(matches!(err, LiteralError::NonFiniteFloat { .. }));
    }

    #[rstest]
    #[case::int(Literal::Int(-12), "-12")]
    #[case::whole_float(Literal::Float(100.0), "100.0")]
    #[case::tiny_float(Literal::Float(1e-7), "1e-7")]
    #[case::string(Literal::Str("it's\n".into()), r"'it\'s\n'")]
    #[case::control(Literal::Str("\u{1}".into()), r"'\x01'")]
    #[case::singleton(Literal::Tuple(vec![Literal::None]), "(None,)")]
    #[case::pair(Literal::Tuple(vec![Literal::Int(1), Literal::Bool(true)]), "(1, True)")]
    fn renders_python_style(#[case] literal: Literal, #[case] expected: &str) {
        assert_eq!(literal.render().expect("renderable"), expected);
        assert_eq!(parse_literal(expected).expect("parses back"), literal);
    }

    #[rstest]
    fn render_rejects_nested_non_finite_floats() {
        let literal = Literal::List(vec![Literal::Int(1), Literal::Float(f64::NAN)]);
        assert!(matches!(
            literal.render(),
            Err(LiteralError::NonFiniteFloat { .. })
        ));
    }

    #[rstest]
    fn to_int_vec_reports_the_offending_item() {
        let literal = parse_literal("(1, 'two', 3)").expect("valid");
        assert_eq!(literal.to_int_vec(), Err(&Literal::Str("two".into())));
        assert_eq!(
            Literal::Int(5).to_int_vec().map_err(Literal::kind_name),
            Err("int")
        );
    }

    #[rstest]
    fn to_int_map_keeps_the_last_duplicate() {
        let literal = parse_literal("{2: 1, 0: 5, 2: 9}").expect("valid");
        let map = literal.to_int_map().expect("integer dict");
        assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![(0, 5), (2, 9)]);
    }
}
