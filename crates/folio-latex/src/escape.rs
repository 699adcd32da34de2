/// Sequences `escape` produces. Input already in one of these forms is
/// copied through, so escaping twice changes nothing.
const ESCAPED: [&str; 10] = [
    "\\textbackslash{}",
    "\\textasciitilde{}",
    "\\textasciicircum{}",
    "\\&",
    "\\%",
    "\\$",
    "\\#",
    "\\_",
    "\\{",
    "\\}",
];

/// Make arbitrary text safe to embed in LaTeX source.
///
/// `\` `~` `^` become their text commands; `&` `%` `$` `#` `_` `{` `}`
/// get a backslash prefix. Everything else passes through.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if c == '\\' {
            if let Some(seq) = ESCAPED.iter().find(|seq| rest.starts_with(*seq)) {
                out.push_str(seq);
                rest = &rest[seq.len()..];
                continue;
            }
        }

        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_backslash() {
        assert_eq!(escape("a\\b"), "a\\textbackslash{}b");
        assert_eq!(escape("\\"), "\\textbackslash{}");
    }

    #[test]
    fn test_escaped_sequences_pass_through() {
        for seq in ESCAPED {
            assert_eq!(escape(seq), seq);
        }
    }
}
