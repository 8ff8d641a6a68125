//! Lenient attribute list parsing
//!
//! Malformed pairs are dropped rather than rejected: a bare token with no
//! `=`, or an `=` with nothing before it, simply does not produce an
//! attribute.

use tracing::trace;

use super::cursor::Cursor;
use super::node::Attribute;

/// Parse the raw attribute text of a tag, keeping document order
pub fn parse_attributes(raw: &str) -> Vec<Attribute> {
    let mut cursor = Cursor::new(raw);
    let mut attributes = Vec::new();

    loop {
        cursor.eat_while(char::is_whitespace);
        if cursor.is_eof() {
            break;
        }

        let name = cursor.eat_while(|c| !c.is_whitespace() && c != '=');
        cursor.eat_while(char::is_whitespace);
        if !cursor.consume('=') {
            trace!(token = name, "dropping attribute without value");
            continue;
        }

        cursor.eat_while(char::is_whitespace);
        let value = read_value(&mut cursor);
        if name.is_empty() {
            trace!(value, "dropping attribute without name");
            continue;
        }

        attributes.push(Attribute::new(name, value));
    }

    attributes
}

fn read_value<'a>(cursor: &mut Cursor<'a>) -> &'a str {
    match cursor.current() {
        Some(quote @ ('"' | '\'')) => {
            cursor.advance();
            let value = cursor.eat_while(|c| c != quote);
            cursor.consume(quote);
            value
        }
        _ => cursor.eat_while(|c| !c.is_whitespace()),
    }
}
