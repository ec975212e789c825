//! ANSI escape sequence functionality for console foreground colors.
//!
//! This module maps each [`ConsoleColor`] to its SGR ("select graphic
//! rendition") code and writes the corresponding escape sequence. The dark
//! colors and `Gray` use the standard `30..=37` range; the bright colors and
//! `DarkGray` use the aixterm `90..=97` range, which every terminal emulator
//! in common use understands.

use crate::ConsoleColor;
use std::fmt;
use std::io;

/// Returns the SGR parameter that selects `color` as the foreground.
pub fn sgr_code(color: ConsoleColor) -> u8 {
    match color {
        ConsoleColor::Black => 30,
        ConsoleColor::DarkRed => 31,
        ConsoleColor::DarkGreen => 32,
        ConsoleColor::DarkYellow => 33,
        ConsoleColor::DarkBlue => 34,
        ConsoleColor::DarkMagenta => 35,
        ConsoleColor::DarkCyan => 36,
        ConsoleColor::Gray => 37,
        ConsoleColor::DarkGray => 90,
        ConsoleColor::Red => 91,
        ConsoleColor::Green => 92,
        ConsoleColor::Yellow => 93,
        ConsoleColor::Blue => 94,
        ConsoleColor::Magenta => 95,
        ConsoleColor::Cyan => 96,
        ConsoleColor::White => 97,
    }
}

/// Writes the ANSI escape sequence that selects `color` as the foreground.
///
/// The caller must provide their own `io::Write` to write to. Callers should
/// prefer higher level types in this crate, such as `Ansi` or
/// `StandardStream`, which also keep track of the current color.
pub fn ansi_foreground<W: io::Write>(
    mut wtr: W,
    color: ConsoleColor,
) -> io::Result<()> {
    write!(wtr, "\x1B[{}m", sgr_code(color))
}

/// A convenience function for formatting a foreground escape sequence
/// directly, e.g. with `format!`.
pub fn ansi_foreground_only(color: ConsoleColor) -> AnsiForeground {
    AnsiForeground { color }
}

/// A foreground color that formats as its ANSI escape sequence.
///
/// This is created by the `ansi_foreground_only` function.
#[derive(Clone, Copy, Debug)]
pub struct AnsiForeground {
    color: ConsoleColor,
}

impl fmt::Display for AnsiForeground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1B[{}m", sgr_code(self.color))
    }
}
