// Shared token parsers for chart-spec strings

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::map,
    sequence::delimited,
    IResult,
};

/// Wrap a parser to eat surrounding whitespace.
pub fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Bare column identifier: letters, digits, underscores.
pub fn identifier(input: &str) -> IResult<&str, String> {
    map(
        take_while1(|c: char| c.is_alphanumeric() || c == '_'),
        |s: &str| s.to_string(),
    )(input)
}

/// Double-quoted literal for column names with spaces or punctuation.
pub fn string_literal(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
        |s: &str| s.to_string(),
    )(input)
}

/// A column reference: bare identifier or quoted literal.
pub fn column_name(input: &str) -> IResult<&str, String> {
    alt((string_literal, identifier))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        let (rest, name) = identifier("sales_2024 extra").unwrap();
        assert_eq!(name, "sales_2024");
        assert_eq!(rest, " extra");
        assert!(identifier("").is_err());
    }

    #[test]
    fn test_string_literal() {
        let (_, name) = string_literal(r#""unit price""#).unwrap();
        assert_eq!(name, "unit price");
        assert!(string_literal(r#""unterminated"#).is_err());
    }

    #[test]
    fn test_column_name_prefers_quoted() {
        let (_, name) = column_name(r#""a b""#).unwrap();
        assert_eq!(name, "a b");
        let (_, name) = column_name("plain").unwrap();
        assert_eq!(name, "plain");
    }
}
