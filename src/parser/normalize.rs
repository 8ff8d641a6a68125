//! Whitespace normalization applied before tokenizing

/// Collapse runs of spaces to a single space and trim the input.
///
/// When `preserve_attribute_whitespace` is set, quoted runs inside a tag are
/// copied verbatim so attribute values keep their spacing.
pub fn normalize(input: &str, preserve_attribute_whitespace: bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    let mut quote: Option<char> = None;
    let mut prev_space = false;

    for c in input.trim().chars() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            out.push(c);
            prev_space = false;
            continue;
        }

        match c {
            ' ' if prev_space => continue,
            '<' => in_tag = true,
            '>' => in_tag = false,
            '"' | '\'' if in_tag && preserve_attribute_whitespace => quote = Some(c),
            _ => {}
        }

        prev_space = c == ' ';
        out.push(c);
    }

    out
}
