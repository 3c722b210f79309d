use std::fmt::Write as _;

/// Title derived from a file stem: `my-first-post` -> `My First Post`.
pub(crate) fn title_from_stem(stem: &str) -> String {
    title_case(&stem.replace('-', " "))
}

/// Upper-cases the first cased character of every run of cased characters
/// and lower-cases the rest, so `2nd` becomes `2Nd` and `o'neil` `O'Neil`.
pub(crate) fn title_case(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    let mut previous_is_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if previous_is_cased {
                res.extend(c.to_lowercase());
            } else {
                res.push(c);
            }
            previous_is_cased = true;
        } else if c.is_lowercase() {
            if previous_is_cased {
                res.push(c);
            } else {
                res.extend(c.to_uppercase());
            }
            previous_is_cased = true;
        } else {
            res.push(c);
            previous_is_cased = false;
        }
    }
    res
}

/// Splits a `**Tags:**` value on commas. Empty pieces are kept.
pub(crate) fn split_tags(value: &str) -> Vec<String> {
    value.split(',').map(|tag| tag.trim().to_string()).collect()
}

fn quote_str(res: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    res.push(quote);
    for c in s.chars() {
        match c {
            '\\' => res.push_str("\\\\"),
            '\n' => res.push_str("\\n"),
            '\r' => res.push_str("\\r"),
            '\t' => res.push_str("\\t"),
            c if c == quote => {
                res.push('\\');
                res.push(c);
            }
            c if c.is_ascii_control() => {
                let _ = write!(res, "\\x{:02x}", c as u32);
            }
            c => res.push(c),
        }
    }
    res.push(quote);
}

/// Renders tags as a bracketed list of quoted strings: `['go', 'rust']`.
pub(crate) fn python_list_literal(items: &[String]) -> String {
    let mut res = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i != 0 {
            res.push_str(", ");
        }
        quote_str(&mut res, item);
    }
    res.push(']');
    res
}
