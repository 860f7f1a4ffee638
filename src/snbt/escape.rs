/// Whether a compound member name can be written without quotes.
pub(crate) fn is_bare_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'+' | b'-'))
}

/// Append a compound member name, quoting it only when it has to be.
pub(crate) fn write_name(out: &mut String, name: &str) {
    if is_bare_name(name) {
        out.push_str(name);
    } else {
        write_quoted(out, name);
    }
}

/// Append `v` as a quoted string. Double quotes are used unless the text
/// holds a double quote and no single quote.
pub(crate) fn write_quoted(out: &mut String, v: &str) {
    let quote = if v.contains('"') && !v.contains('\'') {
        b'\''
    } else {
        b'"'
    };

    out.push(quote as char);
    let bytes = v.as_bytes();
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        let escaped = match byte {
            b'\\' => "\\\\",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            b'"' if quote == b'"' => "\\\"",
            b'\'' if quote == b'\'' => "\\'",
            _ => continue,
        };
        if start < i {
            out.push_str(&v[start..i]);
        }
        out.push_str(escaped);
        start = i + 1;
    }
    if start != bytes.len() {
        out.push_str(&v[start..]);
    }
    out.push(quote as char);
}
