//! Parse and format strategies for each supported scalar kind.

use std::fmt::{self, Debug, Formatter};

use crate::{ParseError, ParseResult};

/// Text shown in place of a secret value.
pub const REDACTION_MARKER: &str = "***";

/// Strategy describing how one scalar kind is parsed from and rendered to text.
///
/// Kinds are zero-sized markers; the container is generic over them.
pub trait ScalarKind: Send + Sync + 'static {
    /// Value stored by containers of this kind.
    type Value: Clone + Default + PartialEq + Debug + Send + Sync + 'static;

    /// Short kind name used in logs and errors.
    const NAME: &'static str;

    /// Whether human-readable rendering hides the value.
    const REDACTED: bool = false;

    /// Whether a bare command-line flag with no value means `true`.
    const IS_SWITCH: bool = false;

    /// Parses text in the kind's canonical grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when `input` does not match the grammar.
    fn parse(input: &str) -> ParseResult<Self::Value>;

    /// Writes the human-readable form of `value`.
    ///
    /// # Errors
    ///
    /// Propagates formatter failures.
    fn render(value: &Self::Value, f: &mut Formatter<'_>) -> fmt::Result;
}

/// Boolean kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolKind;

impl ScalarKind for BoolKind {
    type Value = bool;

    const NAME: &'static str = "bool";
    const IS_SWITCH: bool = true;

    fn parse(input: &str) -> ParseResult<bool> {
        if ["1", "t", "true"].iter().any(|lit| input.eq_ignore_ascii_case(lit)) {
            Ok(true)
        } else if ["0", "f", "false"].iter().any(|lit| input.eq_ignore_ascii_case(lit)) {
            Ok(false)
        } else {
            Err(ParseError::Bool {
                input: input.to_owned(),
            })
        }
    }

    fn render(value: &bool, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(if *value { "true" } else { "false" })
    }
}

/// Signed 64-bit integer kind, base 10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Int64Kind;

impl ScalarKind for Int64Kind {
    type Value = i64;

    const NAME: &'static str = "int64";

    fn parse(input: &str) -> ParseResult<i64> {
        input.parse::<i64>().map_err(|source| ParseError::Int64 {
            input: input.to_owned(),
            source,
        })
    }

    fn render(value: &i64, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(value, f)
    }
}

/// 64-bit floating point kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Float64Kind;

impl ScalarKind for Float64Kind {
    type Value = f64;

    const NAME: &'static str = "float64";

    fn parse(input: &str) -> ParseResult<f64> {
        input.parse::<f64>().map_err(|source| ParseError::Float64 {
            input: input.to_owned(),
            source,
        })
    }

    // `Display` for f64 emits the shortest text that parses back to the same bits.
    fn render(value: &f64, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(value, f)
    }
}

/// Plain string kind; any text is accepted verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextKind;

impl ScalarKind for TextKind {
    type Value = String;

    const NAME: &'static str = "string";

    fn parse(input: &str) -> ParseResult<String> {
        Ok(input.to_owned())
    }

    fn render(value: &String, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(value)
    }
}

/// Secret string kind; accepted verbatim, always rendered as [`REDACTION_MARKER`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecretKind;

impl ScalarKind for SecretKind {
    type Value = String;

    const NAME: &'static str = "secret";
    const REDACTED: bool = true;

    fn parse(input: &str) -> ParseResult<String> {
        Ok(input.to_owned())
    }

    fn render(_value: &String, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(REDACTION_MARKER)
    }
}
