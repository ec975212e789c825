//! Rendering of printable values and composite format templates.
//!
//! Every value is rendered with fixed, locale-independent rules:
//!
//! * integers in plain decimal,
//! * booleans as `True` or `False`,
//! * floats as their shortest round-trip digits, switching to scientific
//!   notation (`1.5E+20`, `1E-05`) for large or small exponents,
//! * text, characters and character ranges verbatim.
//!
//! A composite template contains placeholders of the form
//! `{index[,alignment][:format]}`. Literal braces are written `{{` and `}}`.

use std::borrow::Cow;

use crate::error::FormatError;

/// A single value that can be written to a console.
#[derive(Clone, Debug, PartialEq)]
pub enum Printable<'a> {
    /// No value. Renders as empty text.
    Null,
    /// Text, written verbatim.
    Text(Cow<'a, str>),
    /// A single character.
    Char(char),
    /// Any signed integer.
    Int(i64),
    /// Any unsigned integer.
    UInt(u64),
    /// A double precision float.
    Double(f64),
    /// A single precision float.
    Single(f32),
    /// A boolean.
    Bool(bool),
    /// `count` characters of `buf` starting at `index`.
    Chars {
        /// The whole buffer.
        buf: &'a [char],
        /// First character to write.
        index: usize,
        /// Number of characters to write.
        count: usize,
    },
}

impl<'a> Printable<'a> {
    /// A sub-range of a character buffer.
    ///
    /// The range is checked when the value is rendered.
    pub fn chars(buf: &'a [char], index: usize, count: usize) -> Printable<'a> {
        Printable::Chars { buf, index, count }
    }

    /// Renders this value in its canonical form.
    ///
    /// The only failure is a character range outside its buffer.
    pub fn render(&self) -> Result<Cow<'a, str>, FormatError> {
        let text = match *self {
            Printable::Null => Cow::Borrowed(""),
            Printable::Text(ref s) => s.clone(),
            Printable::Char(c) => Cow::Owned(c.to_string()),
            Printable::Int(n) => Cow::Owned(n.to_string()),
            Printable::UInt(n) => Cow::Owned(n.to_string()),
            Printable::Double(v) => Cow::Owned(general_f64(v)),
            Printable::Single(v) => Cow::Owned(general_f32(v)),
            Printable::Bool(true) => Cow::Borrowed("True"),
            Printable::Bool(false) => Cow::Borrowed("False"),
            Printable::Chars { buf, index, count } => {
                Cow::Owned(char_range(buf, index, count)?.iter().collect())
            }
        };
        Ok(text)
    }

    /// Renders this value according to a placeholder's format string.
    ///
    /// Format strings apply to numbers only; they are ignored for every
    /// other kind of value.
    pub fn render_with(&self, spec: &str) -> Result<Cow<'a, str>, FormatError> {
        if spec.is_empty() {
            return self.render();
        }
        let number = match *self {
            Printable::Int(n) => Number::Int(n),
            Printable::UInt(n) => Number::UInt(n),
            Printable::Double(v) => Number::Float(v, general_f64(v)),
            Printable::Single(v) => {
                Number::Float(f64::from(v), general_f32(v))
            }
            _ => return self.render(),
        };
        number.format(spec).map(Cow::Owned)
    }
}

fn char_range(
    buf: &[char],
    index: usize,
    count: usize,
) -> Result<&[char], FormatError> {
    index
        .checked_add(count)
        .and_then(|end| buf.get(index..end))
        .ok_or(FormatError::CharRange { index, count, len: buf.len() })
}

impl<'a> From<&'a str> for Printable<'a> {
    fn from(s: &'a str) -> Printable<'a> {
        Printable::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Printable<'a> {
    fn from(s: &'a String) -> Printable<'a> {
        Printable::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Printable<'_> {
    fn from(s: String) -> Self {
        Printable::Text(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Printable<'a> {
    fn from(s: Cow<'a, str>) -> Printable<'a> {
        Printable::Text(s)
    }
}

impl<'a> From<&'a [char]> for Printable<'a> {
    fn from(buf: &'a [char]) -> Printable<'a> {
        Printable::Chars { buf, index: 0, count: buf.len() }
    }
}

impl From<char> for Printable<'_> {
    fn from(c: char) -> Self {
        Printable::Char(c)
    }
}

impl From<bool> for Printable<'_> {
    fn from(b: bool) -> Self {
        Printable::Bool(b)
    }
}

impl From<f64> for Printable<'_> {
    fn from(v: f64) -> Self {
        Printable::Double(v)
    }
}

impl From<f32> for Printable<'_> {
    fn from(v: f32) -> Self {
        Printable::Single(v)
    }
}

impl<'a, T: Into<Printable<'a>>> From<Option<T>> for Printable<'a> {
    fn from(value: Option<T>) -> Printable<'a> {
        value.map_or(Printable::Null, Into::into)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Printable<'_> {
                fn from(n: $t) -> Self {
                    Printable::$variant(n as $wide)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64, u8, u16, u32, u64, usize);

/// Formats a double with the shortest round-trip digits, in scientific
/// notation when the decimal exponent is at least 15 or at most -5.
fn general_f64(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    general(format!("{v:e}"), 15, || format!("{v}"))
}

/// Like `general_f64`, with the single precision exponent limit of 7.
fn general_f32(v: f32) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    general(format!("{v:e}"), 7, || format!("{v}"))
}

fn general(
    scientific: String,
    limit: i32,
    plain: impl FnOnce() -> String,
) -> String {
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return plain();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return plain();
    };
    if exponent >= limit || exponent <= -5 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}E{sign}{:02}", exponent.unsigned_abs())
    } else {
        plain()
    }
}

/// Widest padding a placeholder alignment may ask for.
const MAX_ALIGNMENT: i64 = 1_000_000;

/// Largest digit count accepted after a format letter.
const MAX_PRECISION: usize = 99;

enum Number {
    Int(i64),
    UInt(u64),
    /// The value and its canonical rendering.
    Float(f64, String),
}

impl Number {
    fn format(&self, spec: &str) -> Result<String, FormatError> {
        let mut chars = spec.chars();
        let letter = chars.next().unwrap_or('G');
        let digits = chars.as_str();
        let unsupported = || FormatError::UnsupportedSpecifier {
            spec: spec.to_string(),
            target: match self {
                Number::Float(..) => "a float",
                _ => "an integer",
            },
        };
        let precision = if digits.is_empty() {
            None
        } else if digits.bytes().all(|b| b.is_ascii_digit()) {
            match digits.parse::<usize>() {
                Ok(n) if n <= MAX_PRECISION => Some(n),
                _ => return Err(unsupported()),
            }
        } else {
            return Err(unsupported());
        };

        match (letter, self) {
            ('G' | 'g', Number::Int(n)) => Ok(n.to_string()),
            ('G' | 'g', Number::UInt(n)) => Ok(n.to_string()),
            ('G' | 'g', Number::Float(_, canonical)) => Ok(canonical.clone()),
            ('D' | 'd', Number::Int(n)) => {
                let width = precision.unwrap_or(0);
                let sign = if *n < 0 { "-" } else { "" };
                Ok(format!("{sign}{:0width$}", n.unsigned_abs()))
            }
            ('D' | 'd', Number::UInt(n)) => {
                Ok(format!("{n:0width$}", width = precision.unwrap_or(0)))
            }
            ('X', Number::Int(n)) => {
                Ok(format!("{:0width$X}", *n as u64, width = precision.unwrap_or(0)))
            }
            ('X', Number::UInt(n)) => {
                Ok(format!("{n:0width$X}", width = precision.unwrap_or(0)))
            }
            ('x', Number::Int(n)) => {
                Ok(format!("{:0width$x}", *n as u64, width = precision.unwrap_or(0)))
            }
            ('x', Number::UInt(n)) => {
                Ok(format!("{n:0width$x}", width = precision.unwrap_or(0)))
            }
            ('F' | 'f', _) => {
                let v = self.as_f64();
                if !v.is_finite() {
                    return Ok(self.non_finite(v));
                }
                Ok(fixed(v, precision.unwrap_or(2)))
            }
            ('E' | 'e', _) => {
                let v = self.as_f64();
                if !v.is_finite() {
                    return Ok(self.non_finite(v));
                }
                let raw = format!("{v:.prec$e}", prec = precision.unwrap_or(6));
                let Some((mantissa, exponent)) = raw.split_once('e') else {
                    return Ok(raw);
                };
                let exponent: i32 = exponent.parse().map_err(|_| unsupported())?;
                let sign = if exponent < 0 { '-' } else { '+' };
                Ok(format!(
                    "{mantissa}{letter}{sign}{:03}",
                    exponent.unsigned_abs()
                ))
            }
            _ => Err(unsupported()),
        }
    }

    fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(n) => n as f64,
            Number::UInt(n) => n as f64,
            Number::Float(v, _) => v,
        }
    }

    fn non_finite(&self, v: f64) -> String {
        match self {
            Number::Float(_, canonical) => canonical.clone(),
            _ => general_f64(v),
        }
    }
}

/// Renders `v` with `prec` fractional digits, rounding halves away from
/// zero.
fn fixed(v: f64, prec: usize) -> String {
    // 1074 fractional digits hold any finite f64 exactly
    let exact = format!("{:.1074}", v.abs());
    let (int, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<u8> = int.bytes().chain(frac.bytes().take(prec)).collect();
    if frac.as_bytes().get(prec).is_some_and(|&d| d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let int_len = digits.len() - prec;
    let mut out = String::with_capacity(digits.len() + 2);
    if v.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().copied().map(char::from));
    if prec > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().copied().map(char::from));
    }
    out
}

/// Expands a composite template against its arguments.
///
/// The whole template is validated: a malformed placeholder or a reference
/// past the end of `args` fails even if an earlier part was already
/// expanded.
pub fn format_composite(
    template: &str,
    args: &[Printable<'_>],
) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut parser = TemplateParser { template, pos: 0 };
    while let Some(piece) = parser.next_piece()? {
        match piece {
            Piece::Literal(s) => out.push_str(s),
            Piece::Placeholder { index, alignment, spec } => {
                let arg = args.get(index).ok_or(FormatError::MissingArgument {
                    index,
                    supplied: args.len(),
                })?;
                let text = arg.render_with(spec)?;
                pad(&mut out, &text, alignment);
            }
        }
    }
    Ok(out)
}

fn pad(out: &mut String, text: &str, alignment: i64) {
    let width = usize::try_from(alignment.unsigned_abs()).unwrap_or(usize::MAX);
    let fill = width.saturating_sub(text.chars().count());
    if alignment > 0 {
        out.extend(std::iter::repeat_n(' ', fill));
        out.push_str(text);
    } else {
        out.push_str(text);
        out.extend(std::iter::repeat_n(' ', fill));
    }
}

enum Piece<'t> {
    Literal(&'t str),
    Placeholder { index: usize, alignment: i64, spec: &'t str },
}

struct TemplateParser<'t> {
    template: &'t str,
    pos: usize,
}

impl<'t> TemplateParser<'t> {
    fn rest(&self) -> &'t str {
        &self.template[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_spaces(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start_matches(' ').len();
    }

    fn digits(&mut self) -> &'t str {
        let rest = self.rest();
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        self.pos += len;
        &rest[..len]
    }

    fn next_piece(&mut self) -> Result<Option<Piece<'t>>, FormatError> {
        let rest = self.rest();
        if rest.is_empty() {
            return Ok(None);
        }
        if rest.starts_with("{{") || rest.starts_with("}}") {
            self.pos += 2;
            return Ok(Some(Piece::Literal(&rest[..1])));
        }
        match rest.find(['{', '}']) {
            Some(0) if rest.starts_with('}') => {
                Err(FormatError::UnescapedBrace { position: self.pos })
            }
            Some(0) => self.placeholder().map(Some),
            Some(n) => {
                self.pos += n;
                Ok(Some(Piece::Literal(&rest[..n])))
            }
            None => {
                self.pos = self.template.len();
                Ok(Some(Piece::Literal(rest)))
            }
        }
    }

    fn placeholder(&mut self) -> Result<Piece<'t>, FormatError> {
        let start = self.pos;
        let unclosed = FormatError::UnclosedPlaceholder { position: start };
        self.pos += 1;

        let index_at = self.pos;
        let index = self
            .digits()
            .parse::<usize>()
            .map_err(|_| FormatError::InvalidIndex { position: index_at })?;
        self.skip_spaces();

        let mut alignment = 0i64;
        if self.peek() == Some(',') {
            self.pos += 1;
            self.skip_spaces();
            let align_at = self.pos;
            let negative = self.peek() == Some('-');
            if negative {
                self.pos += 1;
            }
            let magnitude = match self.digits().parse::<i64>() {
                Ok(n) if n <= MAX_ALIGNMENT => n,
                _ => return Err(FormatError::InvalidAlignment { position: align_at }),
            };
            alignment = if negative { -magnitude } else { magnitude };
            self.skip_spaces();
        }

        let mut spec = "";
        if self.peek() == Some(':') {
            self.pos += 1;
            let rest = self.rest();
            match rest.find(['{', '}']) {
                Some(n) if rest[n..].starts_with('}') => {
                    spec = &rest[..n];
                    self.pos += n;
                }
                _ => return Err(unclosed),
            }
        }

        match self.peek() {
            Some('}') => {
                self.pos += 1;
                Ok(Piece::Placeholder { index, alignment, spec })
            }
            _ => Err(unclosed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fmt(template: &str, args: &[Printable<'_>]) -> String {
        format_composite(template, args).unwrap()
    }

    #[test]
    fn canonical_scalars() {
        assert_eq!(Printable::from(42).render().unwrap(), "42");
        assert_eq!(Printable::from(-7i8).render().unwrap(), "-7");
        assert_eq!(Printable::from(u64::MAX).render().unwrap(), "18446744073709551615");
        assert_eq!(Printable::from(true).render().unwrap(), "True");
        assert_eq!(Printable::from(false).render().unwrap(), "False");
        assert_eq!(Printable::from('x').render().unwrap(), "x");
        assert_eq!(Printable::Null.render().unwrap(), "");
        assert_eq!(Printable::from(None::<&str>).render().unwrap(), "");
        assert_eq!(Printable::from(Some("hi")).render().unwrap(), "hi");
    }

    #[test]
    fn canonical_doubles() {
        let cases: &[(f64, &str)] = &[
            (0.0, "0"),
            (-0.0, "-0"),
            (1.5, "1.5"),
            (0.1, "0.1"),
            (123456.789, "123456.789"),
            (1e14, "100000000000000"),
            (1e15, "1E+15"),
            (1.5e20, "1.5E+20"),
            (0.0001, "0.0001"),
            (0.00001, "1E-05"),
            (-2.5e-10, "-2.5E-10"),
            (f64::NAN, "NaN"),
            (f64::INFINITY, "Infinity"),
            (f64::NEG_INFINITY, "-Infinity"),
        ];
        for &(v, want) in cases {
            assert_eq!(Printable::from(v).render().unwrap(), want, "{v:?}");
        }
    }

    #[test]
    fn canonical_singles() {
        assert_eq!(Printable::from(1.25f32).render().unwrap(), "1.25");
        assert_eq!(Printable::from(1234567f32).render().unwrap(), "1234567");
        assert_eq!(Printable::from(1e7f32).render().unwrap(), "1E+07");
        assert_eq!(Printable::from(0.1f32).render().unwrap(), "0.1");
    }

    #[test]
    fn char_ranges() {
        let buf: Vec<char> = "abcdef".chars().collect();
        assert_eq!(Printable::chars(&buf, 2, 3).render().unwrap(), "cde");
        assert_eq!(Printable::chars(&buf, 6, 0).render().unwrap(), "");
        assert_eq!(Printable::from(&buf[..]).render().unwrap(), "abcdef");
        assert_eq!(
            Printable::chars(&buf, 4, 3).render(),
            Err(FormatError::CharRange { index: 4, count: 3, len: 6 })
        );
        assert_eq!(
            Printable::chars(&buf, usize::MAX, 2).render(),
            Err(FormatError::CharRange { index: usize::MAX, count: 2, len: 6 })
        );
    }

    #[test]
    fn positional_placeholders() {
        let args = [Printable::from("world"), Printable::from(3)];
        assert_eq!(fmt("hello {0}", &args), "hello world");
        assert_eq!(fmt("{1}{1}{0}", &args), "33world");
        assert_eq!(fmt("{0 }", &args), "world");
        assert!(format_composite("{ 0}", &args).is_err());
        assert_eq!(fmt("no placeholders", &[]), "no placeholders");
        assert_eq!(fmt("", &[]), "");
    }

    #[test]
    fn escaped_braces() {
        let args = [Printable::from(1)];
        assert_eq!(fmt("{{{0}}}", &args), "{1}");
        assert_eq!(fmt("{{}}", &[]), "{}");
    }

    #[test]
    fn alignment_pads_in_chars() {
        let args = [Printable::from("ab"), Printable::from("ñé")];
        assert_eq!(fmt("[{0,5}]", &args), "[   ab]");
        assert_eq!(fmt("[{0,-5}]", &args), "[ab   ]");
        assert_eq!(fmt("[{1,4}]", &args), "[  ñé]");
        assert_eq!(fmt("[{0,1}]", &args), "[ab]");
        assert_eq!(fmt("[{0 , -3 }]", &args), "[ab ]");
    }

    #[test]
    fn numeric_format_strings() {
        let args = [
            Printable::from(42),
            Printable::from(-42),
            Printable::from(255u8),
            Printable::from(3.14159),
            Printable::from(1234.5f32),
        ];
        assert_eq!(fmt("{0:D5}", &args), "00042");
        assert_eq!(fmt("{1:D5}", &args), "-00042");
        assert_eq!(fmt("{2:X}", &args), "FF");
        assert_eq!(fmt("{2:x4}", &args), "00ff");
        assert_eq!(fmt("{1:X}", &args), "FFFFFFFFFFFFFFD6");
        assert_eq!(fmt("{3:F2}", &args), "3.14");
        assert_eq!(fmt("{3:F}", &args), "3.14");
        assert_eq!(fmt("{0:F1}", &args), "42.0");
        assert_eq!(fmt("{1:F0}", &args), "-42");
        assert_eq!(fmt("{3:E2}", &args), "3.14E+000");
        assert_eq!(fmt("{4:e}", &args), "1.234500e+003");
        assert_eq!(fmt("{3:G}", &args), "3.14159");
        assert_eq!(fmt("{0,6:D3}|", &args), "   042|");
    }

    #[test]
    fn fixed_point_rounds_halves_away_from_zero() {
        let args = [
            Printable::from(2.5),
            Printable::from(0.5),
            Printable::from(-2.5),
            Printable::from(0.25),
            Printable::from(9.995),
            Printable::from(99.5),
            Printable::from(-0.001),
        ];
        assert_eq!(fmt("{0:F0}|{1:F0}|{2:F0}|{3:F1}", &args), "3|1|-3|0.3");
        // 9.995 is stored just below the half
        assert_eq!(fmt("{4:F2}", &args), "9.99");
        assert_eq!(fmt("{5:F0}", &args), "100");
        assert_eq!(fmt("{6:F2}", &args), "-0.00");
    }

    #[test]
    fn negative_hex_uses_full_width() {
        let args = [Printable::from(-42i32), Printable::from(-1i8)];
        assert_eq!(fmt("{0:X}", &args), "FFFFFFFFFFFFFFD6");
        assert_eq!(fmt("{1:x}", &args), "ffffffffffffffff");
    }

    #[test]
    fn oversized_precision_is_rejected() {
        let args = [Printable::from(7), Printable::from(1.5)];
        for (template, spec, target) in [
            ("{0:D70000}", "D70000", "an integer"),
            ("{0:D18446744073709551615}", "D18446744073709551615", "an integer"),
            ("{0:X100}", "X100", "an integer"),
            ("{1:F70000}", "F70000", "a float"),
            ("{1:E100}", "E100", "a float"),
        ] {
            assert_eq!(
                format_composite(template, &args),
                Err(FormatError::UnsupportedSpecifier { spec: spec.to_string(), target }),
                "{template}"
            );
        }
        assert_eq!(fmt("{0:D99}", &args).len(), 99);
    }

    #[test]
    fn format_strings_ignored_for_text() {
        let args = [Printable::from("abc"), Printable::from(true)];
        assert_eq!(fmt("{0:X8}{1:D2}", &args), "abcTrue");
    }

    #[test]
    fn unsupported_specifiers() {
        let args = [Printable::from(1.5), Printable::from(7)];
        assert_eq!(
            format_composite("{0:D2}", &args),
            Err(FormatError::UnsupportedSpecifier {
                spec: "D2".to_string(),
                target: "a float",
            })
        );
        assert_eq!(
            format_composite("{1:Q}", &args),
            Err(FormatError::UnsupportedSpecifier {
                spec: "Q".to_string(),
                target: "an integer",
            })
        );
        assert!(format_composite("{1:D2x}", &args).is_err());
    }

    #[test]
    fn malformed_templates() {
        let args = [Printable::from(1)];
        assert_eq!(
            format_composite("abc {0", &args),
            Err(FormatError::UnclosedPlaceholder { position: 4 })
        );
        assert_eq!(
            format_composite("a } b", &args),
            Err(FormatError::UnescapedBrace { position: 2 })
        );
        assert_eq!(
            format_composite("{x}", &args),
            Err(FormatError::InvalidIndex { position: 1 })
        );
        assert_eq!(
            format_composite("{}", &args),
            Err(FormatError::InvalidIndex { position: 1 })
        );
        assert_eq!(
            format_composite("{0,}", &args),
            Err(FormatError::InvalidAlignment { position: 3 })
        );
        assert_eq!(
            format_composite("{0:X{1}}", &args),
            Err(FormatError::UnclosedPlaceholder { position: 0 })
        );
        assert_eq!(
            format_composite("{0 1}", &args),
            Err(FormatError::UnclosedPlaceholder { position: 0 })
        );
        assert_eq!(
            format_composite("{99999999999999999999999}", &args),
            Err(FormatError::InvalidIndex { position: 1 })
        );
        assert_eq!(
            format_composite("{0,9223372036854775807}", &args),
            Err(FormatError::InvalidAlignment { position: 3 })
        );
        assert_eq!(
            format_composite("{0,-1000001}", &args),
            Err(FormatError::InvalidAlignment { position: 3 })
        );
        assert_eq!(
            format_composite("{0,99999999999999999999}", &args),
            Err(FormatError::InvalidAlignment { position: 3 })
        );
        assert_eq!(fmt("{0,1000000}", &args).len(), 1_000_000);
    }

    #[test]
    fn missing_arguments() {
        let args = [Printable::from("only")];
        assert_eq!(
            format_composite("{0} {1}", &args),
            Err(FormatError::MissingArgument { index: 1, supplied: 1 })
        );
        assert_eq!(
            format_composite("{0}", &[]),
            Err(FormatError::MissingArgument { index: 0, supplied: 0 })
        );
    }

    #[test]
    fn char_range_arguments_are_checked() {
        let buf = ['a', 'b'];
        let args = [Printable::chars(&buf, 1, 5)];
        assert_eq!(
            format_composite("{0}", &args),
            Err(FormatError::CharRange { index: 1, count: 5, len: 2 })
        );
    }
}
