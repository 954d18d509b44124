use std::{borrow::Cow, fmt};

fn needs_escape(c: char) -> bool {
    matches!(c, '\\' | '\n' | '\r')
}

/// Writes through to `W`, escaping backslashes and line breaks so every
/// value stays on its own line.
struct Escaped<'w, W> {
    out: &'w mut W,
    written: bool,
}

impl<W: fmt::Write> fmt::Write for Escaped<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.written |= !s.is_empty();
        let mut rest = s;
        while let Some(at) = rest.find(needs_escape) {
            self.out.write_str(&rest[..at])?;
            self.out.write_str(match rest.as_bytes()[at] {
                b'\n' => "\\n",
                b'\r' => "\\r",
                _ => "\\\\",
            })?;
            rest = &rest[at + 1..];
        }
        self.out.write_str(rest)
    }
}

/// Write `value`'s `Display` output with line breaks escaped.
pub(super) fn write_escaped<W, T>(out: &mut W, value: &T) -> fmt::Result
where
    W: fmt::Write,
    T: fmt::Display + ?Sized,
{
    write_value(out, value).map(|_| ())
}

/// [`write_escaped`], but empty output is written as `\e` so that it
/// cannot be confused with a missing value.
pub(super) fn write_escaped_nonempty<W, T>(out: &mut W, value: &T) -> fmt::Result
where
    W: fmt::Write,
    T: fmt::Display + ?Sized,
{
    if !write_value(out, value)? {
        out.write_str("\\e")?;
    }
    Ok(())
}

/// Whether anything was written
fn write_value<W, T>(out: &mut W, value: &T) -> Result<bool, fmt::Error>
where
    W: fmt::Write,
    T: fmt::Display + ?Sized,
{
    let mut escaped = Escaped {
        out,
        written: false,
    };
    fmt::Write::write_fmt(&mut escaped, format_args!("{value}"))?;
    Ok(escaped.written)
}

/// Undo [`write_escaped`]. `None` on a dangling or unknown escape.
pub(super) fn unescape(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('\\') {
        return Some(Cow::Borrowed(text));
    }
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => unescaped.push('\\'),
            'n' => unescaped.push('\n'),
            'r' => unescaped.push('\r'),
            'e' => {}
            _ => return None,
        }
    }
    Some(Cow::Owned(unescaped))
}

#[cfg(test)]
mod test {
    use std::borrow::Cow;

    use super::{unescape, write_escaped, write_escaped_nonempty};

    fn escaped(value: &str) -> String {
        let mut out = String::new();
        write_escaped(&mut out, value).expect("string");
        out
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!("  1.5\tx ", escaped("  1.5\tx "));
        assert_eq!(Some(Cow::Borrowed("  1.5\tx ")), unescape("  1.5\tx "));
    }

    #[test]
    fn line_breaks_and_backslashes() {
        let text = "a\\n\nb\r\n\\";
        let encoded = escaped(text);
        assert_eq!("a\\\\n\\nb\\r\\n\\\\", encoded);
        assert!(!encoded.contains('\n'));
        assert_eq!(Some(text), unescape(&encoded).as_deref());
    }

    #[test]
    fn empty_values_can_be_marked() {
        let mut out = String::new();
        write_escaped_nonempty(&mut out, "").expect("string");
        assert_eq!("\\e", out);
        assert_eq!(Some(""), unescape(&out).as_deref());

        out.clear();
        write_escaped_nonempty(&mut out, " ").expect("string");
        assert_eq!(" ", out);
        assert_eq!("", escaped(""));
    }

    #[test]
    fn rejects_bad_escapes() {
        assert_eq!(None, unescape("dangling\\"));
        assert_eq!(None, unescape("\\t"));
    }
}
