//! Safe parsing of literal expressions found inside cells.
//!
//! Cast and crew columns in the movie tables hold textual encodings of lists
//! of records, written either as JSON or in Python-repr style (single quotes,
//! `None`, tuples). [`parse_literal`] accepts exactly the literal subset —
//! numbers, strings, booleans, none/null, lists, tuples, dicts — and never
//! evaluates anything.
//!
//! JSON-shaped cells take a fast path through `serde_json`; everything else
//! goes through a small recursive-descent parser.

use thiserror::Error;

use crate::types::Value;

/// Maximum container nesting accepted before parsing fails.
const MAX_DEPTH: usize = 64;

/// Error describing why a cell's text is not a valid literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid literal at byte {offset}: {message}")]
pub struct LiteralError {
    /// Byte offset into the input where parsing failed.
    pub offset: usize,
    /// Human-readable failure description.
    pub message: String,
}

impl LiteralError {
    fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// Parse a cell's textual content as a literal expression.
///
/// Returns the parsed [`Value`]; tuples come back as [`Value::List`] and a
/// parenthesized scalar as the scalar itself. Dict keys must be strings.
///
/// ```
/// use cineprep::literal::parse_literal;
/// use cineprep::types::Value;
///
/// let v = parse_literal("[{'id': 1, 'name': 'Tom Hanks'}]").unwrap();
/// let Value::List(items) = v else { panic!() };
/// assert_eq!(items[0].get("name"), Some(&Value::Utf8("Tom Hanks".to_string())));
/// ```
pub fn parse_literal(input: &str) -> Result<Value, LiteralError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LiteralError::new(0, "empty input"));
    }

    // JSON-shaped cells (double quotes, true/false/null) parse directly.
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return Ok(from_json(v));
    }

    let mut parser = Parser {
        src: trimmed,
        pos: 0,
    };
    parser.skip_ws();
    let value = parser.parse_value(0)?;
    parser.skip_ws();
    if parser.pos != parser.src.len() {
        return Err(LiteralError::new(parser.pos, "trailing characters"));
    }
    Ok(value)
}

fn from_json(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int64(i)
            } else {
                Value::Float64(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::Utf8(s),
        serde_json::Value::Array(items) => Value::List(items.into_iter().map(from_json).collect()),
        serde_json::Value::Object(map) => Value::Record(
            map.into_iter()
                .map(|(k, v)| (k, from_json(v)))
                .collect(),
        ),
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn eat_keyword(&mut self, word: &str) -> bool {
        let rest = &self.src[self.pos..];
        if rest.starts_with(word) {
            // Keyword must not run into an identifier tail (`Nonesense`).
            let after = rest[word.len()..].chars().next();
            if !matches!(after, Some(c) if c.is_alphanumeric() || c == '_') {
                self.pos += word.len();
                return true;
            }
        }
        false
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, LiteralError> {
        if depth > MAX_DEPTH {
            return Err(LiteralError::new(self.pos, "nesting too deep"));
        }

        match self.peek() {
            None => Err(LiteralError::new(self.pos, "unexpected end of input")),
            Some('\'') | Some('"') => self.parse_string().map(Value::Utf8),
            Some('[') => self.parse_list(depth),
            Some('(') => self.parse_tuple(depth),
            Some('{') => self.parse_dict(depth),
            Some(c) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                self.parse_number()
            }
            Some(_) => {
                if self.eat_keyword("None") || self.eat_keyword("null") {
                    Ok(Value::Null)
                } else if self.eat_keyword("True") || self.eat_keyword("true") {
                    Ok(Value::Bool(true))
                } else if self.eat_keyword("False") || self.eat_keyword("false") {
                    Ok(Value::Bool(false))
                } else {
                    Err(LiteralError::new(self.pos, "expected a literal"))
                }
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, LiteralError> {
        let start = self.pos;
        let quote = self.bump().expect("caller checked quote");
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(LiteralError::new(start, "unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    None => return Err(LiteralError::new(start, "unterminated string")),
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    // Quotes, backslashes, and anything unrecognized pass through.
                    Some(c) => out.push(c),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-') | Some('+')) {
            self.bump();
        }
        let mut saw_digit = false;
        let mut is_float = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {
                    saw_digit = true;
                    self.bump();
                }
                '.' if !is_float => {
                    is_float = true;
                    self.bump();
                }
                'e' | 'E' if saw_digit => {
                    is_float = true;
                    self.bump();
                    if matches!(self.peek(), Some('-') | Some('+')) {
                        self.bump();
                    }
                }
                _ => break,
            }
        }
        if !saw_digit {
            return Err(LiteralError::new(start, "expected a number"));
        }

        let text = &self.src[start..self.pos];
        if is_float {
            text.parse::<f64>()
                .map(Value::Float64)
                .map_err(|e| LiteralError::new(start, e.to_string()))
        } else {
            // Integers too wide for i64 degrade to float, the way a numeric
            // coercion of the same text would.
            match text.parse::<i64>() {
                Ok(i) => Ok(Value::Int64(i)),
                Err(_) => text
                    .parse::<f64>()
                    .map(Value::Float64)
                    .map_err(|e| LiteralError::new(start, e.to_string())),
            }
        }
    }

    fn parse_list(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.bump(); // '['
        let items = self.parse_items(']', depth)?;
        Ok(Value::List(items.values))
    }

    fn parse_tuple(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.bump(); // '('
        let items = self.parse_items(')', depth)?;
        // `(x)` is just a parenthesized literal; `(x,)` is a one-tuple.
        if items.values.len() == 1 && !items.saw_comma {
            let mut values = items.values;
            return Ok(values.pop().expect("one element"));
        }
        Ok(Value::List(items.values))
    }

    fn parse_dict(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.bump(); // '{'
        let mut entries = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                None => return Err(LiteralError::new(self.pos, "unterminated dict")),
                Some('}') => {
                    self.bump();
                    return Ok(Value::Record(entries));
                }
                Some('\'') | Some('"') => {
                    let key = self.parse_string()?;
                    self.skip_ws();
                    if self.peek() != Some(':') {
                        return Err(LiteralError::new(self.pos, "expected ':' after dict key"));
                    }
                    self.bump();
                    self.skip_ws();
                    let value = self.parse_value(depth + 1)?;
                    entries.push((key, value));
                    self.skip_ws();
                    match self.peek() {
                        Some(',') => {
                            self.bump();
                        }
                        Some('}') => {}
                        _ => {
                            return Err(LiteralError::new(
                                self.pos,
                                "expected ',' or '}' in dict",
                            ));
                        }
                    }
                }
                Some(_) => {
                    return Err(LiteralError::new(self.pos, "record keys must be strings"));
                }
            }
        }
    }

    fn parse_items(&mut self, close: char, depth: usize) -> Result<Items, LiteralError> {
        let mut values = Vec::new();
        let mut saw_comma = false;
        loop {
            self.skip_ws();
            match self.peek() {
                None => {
                    return Err(LiteralError::new(
                        self.pos,
                        format!("unterminated sequence, expected '{close}'"),
                    ));
                }
                Some(c) if c == close => {
                    self.bump();
                    return Ok(Items { values, saw_comma });
                }
                Some(_) => {
                    values.push(self.parse_value(depth + 1)?);
                    self.skip_ws();
                    match self.peek() {
                        Some(',') => {
                            saw_comma = true;
                            self.bump();
                        }
                        Some(c) if c == close => {}
                        _ => {
                            return Err(LiteralError::new(
                                self.pos,
                                format!("expected ',' or '{close}'"),
                            ));
                        }
                    }
                }
            }
        }
    }
}

struct Items {
    values: Vec<Value>,
    saw_comma: bool,
}

#[cfg(test)]
mod tests {
    use super::{parse_literal, LiteralError};
    use crate::types::Value;

    #[test]
    fn parses_scalars() {
        assert_eq!(parse_literal("42").unwrap(), Value::Int64(42));
        assert_eq!(parse_literal("-7").unwrap(), Value::Int64(-7));
        assert_eq!(parse_literal("3.5").unwrap(), Value::Float64(3.5));
        assert_eq!(parse_literal("1e3").unwrap(), Value::Float64(1000.0));
        assert_eq!(parse_literal("None").unwrap(), Value::Null);
        assert_eq!(parse_literal("null").unwrap(), Value::Null);
        assert_eq!(parse_literal("True").unwrap(), Value::Bool(true));
        assert_eq!(parse_literal("false").unwrap(), Value::Bool(false));
    }

    #[test]
    fn parses_single_and_double_quoted_strings() {
        assert_eq!(
            parse_literal("'Toy Story'").unwrap(),
            Value::Utf8("Toy Story".to_string())
        );
        assert_eq!(
            parse_literal("\"Toy Story\"").unwrap(),
            Value::Utf8("Toy Story".to_string())
        );
        assert_eq!(
            parse_literal(r"'O\'Brien'").unwrap(),
            Value::Utf8("O'Brien".to_string())
        );
        assert_eq!(
            parse_literal("'line\\nbreak'").unwrap(),
            Value::Utf8("line\nbreak".to_string())
        );
    }

    #[test]
    fn parses_python_repr_cast_cell() {
        let cell = "[{'cast_id': 14, 'character': 'Woody (voice)', 'name': 'Tom Hanks'}, \
                    {'cast_id': 15, 'character': 'Buzz', 'name': 'Tim Allen'}]";
        let Value::List(items) = parse_literal(cell).unwrap() else {
            panic!("expected list");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("cast_id"), Some(&Value::Int64(14)));
        assert_eq!(
            items[1].get("name"),
            Some(&Value::Utf8("Tim Allen".to_string()))
        );
    }

    #[test]
    fn parses_json_cells_through_fast_path() {
        let Value::Record(entries) = parse_literal(r#"{"id": 862, "vote": 7.7}"#).unwrap() else {
            panic!("expected record");
        };
        assert_eq!(entries[0], ("id".to_string(), Value::Int64(862)));
        assert_eq!(entries[1], ("vote".to_string(), Value::Float64(7.7)));
    }

    #[test]
    fn tuples_become_lists_and_parens_unwrap() {
        assert_eq!(
            parse_literal("(1, 2)").unwrap(),
            Value::List(vec![Value::Int64(1), Value::Int64(2)])
        );
        assert_eq!(
            parse_literal("(1,)").unwrap(),
            Value::List(vec![Value::Int64(1)])
        );
        assert_eq!(parse_literal("(1)").unwrap(), Value::Int64(1));
        assert_eq!(parse_literal("()").unwrap(), Value::List(vec![]));
    }

    #[test]
    fn allows_trailing_commas_and_nesting() {
        assert_eq!(
            parse_literal("[1, 2,]").unwrap(),
            Value::List(vec![Value::Int64(1), Value::Int64(2)])
        );
        let v = parse_literal("{'genres': [{'id': 16, 'name': 'Animation'},]}").unwrap();
        let Value::List(genres) = v.get("genres").unwrap() else {
            panic!("expected list");
        };
        assert_eq!(
            genres[0].get("name"),
            Some(&Value::Utf8("Animation".to_string()))
        );
    }

    #[test]
    fn rejects_non_literals() {
        assert!(parse_literal("not_valid(").is_err());
        assert!(parse_literal("'unterminated").is_err());
        assert!(parse_literal("{1: 'x'}").is_err());
        assert!(parse_literal("[1, 2] extra").is_err());
        assert!(parse_literal("__import__('os')").is_err());
        assert!(parse_literal("").is_err());
        assert!(parse_literal("Nonesense").is_err());
    }

    #[test]
    fn reports_error_offsets() {
        let err = parse_literal("[1, oops]").unwrap_err();
        assert_eq!(err, LiteralError::new(4, "expected a literal"));
    }

    #[test]
    fn deep_nesting_is_bounded() {
        let deep = "[".repeat(200) + &"]".repeat(200);
        assert!(parse_literal(&deep).is_err());
    }
}
