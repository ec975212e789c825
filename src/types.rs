use std::convert::Infallible;
use std::env;
use std::fmt;
use std::str::FromStr;

/// ColorChoice represents the color preferences of an end user.
///
/// The `Default` implementation for this type will select `Auto`, which tries
/// to do the right thing based on the current environment.
///
/// The `FromStr` implementation for this type converts a lowercase kebab-case
/// string of the variant name to the corresponding variant. Any other string
/// results in an error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ColorChoice {
    /// Try very hard to emit colors. This includes emitting ANSI colors
    /// on Windows if virtual terminal processing can be enabled.
    Always,
    /// AlwaysAnsi is like Always, except it never tries to enable virtual
    /// terminal processing first and emits ANSI escapes unconditionally.
    AlwaysAnsi,
    /// Try to use colors, but don't force the issue. If the console isn't
    /// available on Windows, or if TERM=dumb, or if `NO_COLOR` is defined, for
    /// example, then don't use colors.
    #[default]
    Auto,
    /// Never emit colors. The foreground color is still tracked.
    Never,
}

impl FromStr for ColorChoice {
    type Err = ColorChoiceParseError;

    fn from_str(s: &str) -> Result<ColorChoice, ColorChoiceParseError> {
        match s.to_lowercase().as_str() {
            "always" => Ok(ColorChoice::Always),
            "always-ansi" => Ok(ColorChoice::AlwaysAnsi),
            "never" => Ok(ColorChoice::Never),
            "auto" => Ok(ColorChoice::Auto),
            unknown => Err(ColorChoiceParseError {
                unknown_choice: unknown.to_string(),
            }),
        }
    }
}

impl ColorChoice {
    /// Returns true if we should attempt to write colored output.
    pub(crate) fn should_attempt_color(&self) -> bool {
        match *self {
            ColorChoice::Always => true,
            ColorChoice::AlwaysAnsi => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.env_allows_color(),
        }
    }

    #[cfg(not(windows))]
    fn env_allows_color(&self) -> bool {
        match env::var_os("TERM") {
            // If TERM isn't set, then we are in a weird environment that
            // probably doesn't support colors.
            None => return false,
            Some(k) => {
                if k == "dumb" {
                    return false;
                }
            }
        }
        // If TERM != dumb, then the only way we don't allow colors at this
        // point is if NO_COLOR is set.
        env::var_os("NO_COLOR").is_none()
    }

    #[cfg(windows)]
    fn env_allows_color(&self) -> bool {
        // On Windows, if TERM isn't set, then we shouldn't automatically
        // assume that colors aren't allowed. This is unlike Unix environments
        // where TERM is more rigorously set.
        if let Some(k) = env::var_os("TERM") {
            if k == "dumb" {
                return false;
            }
        }
        env::var_os("NO_COLOR").is_none()
    }

    /// Returns true if this choice should forcefully use ANSI color codes
    /// even when virtual terminal processing could not be enabled.
    #[cfg(windows)]
    pub(crate) fn should_force_ansi(&self) -> bool {
        match *self {
            ColorChoice::Always => false,
            ColorChoice::AlwaysAnsi => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => match env::var("TERM") {
                Ok(term) => term != "dumb" && term != "cygwin",
                Err(_) => false,
            },
        }
    }
}

/// An error that occurs when parsing a `ColorChoice` fails.
#[derive(Clone, Debug)]
pub struct ColorChoiceParseError {
    unknown_choice: String,
}

impl ColorChoiceParseError {
    /// Return the string that couldn't be parsed as a valid color choice.
    pub fn invalid_choice(&self) -> &str {
        &self.unknown_choice
    }
}

impl std::error::Error for ColorChoiceParseError {}

impl fmt::Display for ColorChoiceParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unrecognized color choice '{}': valid choices are: \
             always, always-ansi, never, auto",
            self.unknown_choice,
        )
    }
}

/// The sixteen console foreground colors.
///
/// Each color has a fixed numeric code in `0..=15`. Codes outside that range
/// are not colors; converting one with `TryFrom<i32>` fails with a
/// [`ParseColorError`].
///
/// This type has a `FromStr` impl that accepts either a color name or its
/// decimal code. Names are matched case insensitively, and the dark variants
/// may be written `darkblue`, `dark-blue` or `dark_blue`.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConsoleColor {
    Black = 0,
    DarkBlue = 1,
    DarkGreen = 2,
    DarkCyan = 3,
    DarkRed = 4,
    DarkMagenta = 5,
    DarkYellow = 6,
    Gray = 7,
    DarkGray = 8,
    Blue = 9,
    Green = 10,
    Cyan = 11,
    Red = 12,
    Magenta = 13,
    Yellow = 14,
    White = 15,
}

impl ConsoleColor {
    /// Every color, ordered by code.
    pub const ALL: [ConsoleColor; 16] = [
        ConsoleColor::Black,
        ConsoleColor::DarkBlue,
        ConsoleColor::DarkGreen,
        ConsoleColor::DarkCyan,
        ConsoleColor::DarkRed,
        ConsoleColor::DarkMagenta,
        ConsoleColor::DarkYellow,
        ConsoleColor::Gray,
        ConsoleColor::DarkGray,
        ConsoleColor::Blue,
        ConsoleColor::Green,
        ConsoleColor::Cyan,
        ConsoleColor::Red,
        ConsoleColor::Magenta,
        ConsoleColor::Yellow,
        ConsoleColor::White,
    ];

    /// Returns the numeric code of this color.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the kebab-case name of this color.
    pub fn name(self) -> &'static str {
        match self {
            ConsoleColor::Black => "black",
            ConsoleColor::DarkBlue => "dark-blue",
            ConsoleColor::DarkGreen => "dark-green",
            ConsoleColor::DarkCyan => "dark-cyan",
            ConsoleColor::DarkRed => "dark-red",
            ConsoleColor::DarkMagenta => "dark-magenta",
            ConsoleColor::DarkYellow => "dark-yellow",
            ConsoleColor::Gray => "gray",
            ConsoleColor::DarkGray => "dark-gray",
            ConsoleColor::Blue => "blue",
            ConsoleColor::Green => "green",
            ConsoleColor::Cyan => "cyan",
            ConsoleColor::Red => "red",
            ConsoleColor::Magenta => "magenta",
            ConsoleColor::Yellow => "yellow",
            ConsoleColor::White => "white",
        }
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for ConsoleColor {
    type Error = ParseColorError;

    fn try_from(code: i32) -> Result<ConsoleColor, ParseColorError> {
        usize::try_from(code)
            .ok()
            .and_then(|i| ConsoleColor::ALL.get(i).copied())
            .ok_or_else(|| ParseColorError {
                kind: ParseColorErrorKind::OutOfRange,
                given: code.to_string(),
            })
    }
}

impl TryFrom<u8> for ConsoleColor {
    type Error = ParseColorError;

    fn try_from(code: u8) -> Result<ConsoleColor, ParseColorError> {
        ConsoleColor::try_from(i32::from(code))
    }
}

impl TryFrom<&str> for ConsoleColor {
    type Error = ParseColorError;

    fn try_from(s: &str) -> Result<ConsoleColor, ParseColorError> {
        s.parse()
    }
}

impl FromStr for ConsoleColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<ConsoleColor, ParseColorError> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|&c| c != '-' && c != '_')
            .collect::<String>()
            .to_lowercase();
        let color = match &*folded {
            "black" => ConsoleColor::Black,
            "darkblue" => ConsoleColor::DarkBlue,
            "darkgreen" => ConsoleColor::DarkGreen,
            "darkcyan" => ConsoleColor::DarkCyan,
            "darkred" => ConsoleColor::DarkRed,
            "darkmagenta" => ConsoleColor::DarkMagenta,
            "darkyellow" => ConsoleColor::DarkYellow,
            "gray" | "grey" => ConsoleColor::Gray,
            "darkgray" | "darkgrey" => ConsoleColor::DarkGray,
            "blue" => ConsoleColor::Blue,
            "green" => ConsoleColor::Green,
            "cyan" => ConsoleColor::Cyan,
            "red" => ConsoleColor::Red,
            "magenta" => ConsoleColor::Magenta,
            "yellow" => ConsoleColor::Yellow,
            "white" => ConsoleColor::White,
            _ => {
                let numeric = !folded.is_empty()
                    && folded.bytes().all(|b| b.is_ascii_digit());
                return if numeric {
                    folded
                        .parse::<i32>()
                        .map_err(|_| ParseColorError {
                            kind: ParseColorErrorKind::OutOfRange,
                            given: s.to_string(),
                        })
                        .and_then(ConsoleColor::try_from)
                } else {
                    Err(ParseColorError {
                        kind: ParseColorErrorKind::InvalidName,
                        given: s.to_string(),
                    })
                };
            }
        };
        Ok(color)
    }
}

/// An error from converting a value that is not one of the console colors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseColorError {
    kind: ParseColorErrorKind,
    given: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum ParseColorErrorKind {
    InvalidName,
    OutOfRange,
}

impl ParseColorError {
    /// Return the value that couldn't be converted to a color.
    pub fn invalid(&self) -> &str {
        &self.given
    }
}

impl std::error::Error for ParseColorError {}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ParseColorErrorKind::*;
        match self.kind {
            InvalidName => write!(
                f,
                "unrecognized color name '{}'. Choose from: black, \
                 dark-blue, dark-green, dark-cyan, dark-red, dark-magenta, \
                 dark-yellow, gray, dark-gray, blue, green, cyan, red, \
                 magenta, yellow, white",
                self.given
            ),
            OutOfRange => write!(
                f,
                "unrecognized color code, should be '[0-15]', but is '{}'",
                self.given
            ),
        }
    }
}

// Lets `ConsoleColor` itself satisfy the `TryInto<ConsoleColor>` bounds used
// by the writer, whose error type must convert into `ParseColorError`.
impl From<Infallible> for ParseColorError {
    fn from(never: Infallible) -> ParseColorError {
        match never {}
    }
}
