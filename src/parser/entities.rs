//! Entity handling for text content
//!
//! Only `&lt;`, `&gt;` and `&amp;` are understood. Anything else starting
//! with `&` is kept as written.

use std::borrow::Cow;

const ENTITIES: [(&str, char); 3] = [("&lt;", '<'), ("&gt;", '>'), ("&amp;", '&')];

/// Decode the supported entities in a single left-to-right pass.
///
/// Returns `Borrowed` when the input contains no `&`.
pub fn unescape(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(idx) = rest.find('&') {
        let (before, at_amp) = rest.split_at(idx);
        out.push_str(before);

        let (decoded, consumed) = ENTITIES
            .iter()
            .find(|(entity, _)| at_amp.starts_with(*entity))
            .map_or(('&', 1), |(entity, ch)| (*ch, entity.len()));
        out.push(decoded);
        rest = at_amp.get(consumed..).unwrap_or_default();
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Escape `&`, `<` and `>` so text survives a re-parse
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
