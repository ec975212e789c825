use crate::{ColorChoice, ConsoleBackend, ConsoleColor, ansi};
use std::io::{self, Write};

#[cfg(windows)]
use winapi_util::console as wincon;

/// The foreground color a fresh backend reports before any color is set.
///
/// This is the conventional default of a console host, and the color that
/// `Ansi` assumes the terminal starts in.
pub const DEFAULT_FOREGROUND: ConsoleColor = ConsoleColor::Gray;

/// `std::io` implements `Stdout` and `Stderr` as separate types, which makes
/// it difficult to abstract over them. We use some simple internal enum types
/// to work around this.
#[derive(Clone, Copy, Debug)]
enum StandardStreamType {
    Stdout,
    Stderr,
}

#[derive(Debug)]
enum IoStandardStream {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
}

impl IoStandardStream {
    fn new(sty: StandardStreamType) -> IoStandardStream {
        match sty {
            StandardStreamType::Stdout => IoStandardStream::Stdout(io::stdout()),
            StandardStreamType::Stderr => IoStandardStream::Stderr(io::stderr()),
        }
    }
}

impl io::Write for IoStandardStream {
    #[inline(always)]
    fn write(&mut self, b: &[u8]) -> io::Result<usize> {
        match *self {
            IoStandardStream::Stdout(ref mut s) => s.write(b),
            IoStandardStream::Stderr(ref mut s) => s.write(b),
        }
    }

    #[inline(always)]
    fn flush(&mut self) -> io::Result<()> {
        match *self {
            IoStandardStream::Stdout(ref mut s) => s.flush(),
            IoStandardStream::Stderr(ref mut s) => s.flush(),
        }
    }
}

/// A console backend for stdout or stderr.
///
/// Depending on the `ColorChoice` it was created with and on the environment,
/// color changes are either emitted as ANSI escape sequences or only
/// recorded. Either way the foreground color register is tracked, so scoped
/// writes restore correctly.
///
/// Every `StandardStream` keeps its own register. Two streams on the same
/// terminal do not see each other's color changes.
#[derive(Debug)]
pub struct StandardStream {
    wtr: WriterInner<IoStandardStream>,
}

#[derive(Debug)]
enum WriterInner<W> {
    NoColor(NoColor<W>),
    Ansi(Ansi<W>),
}

impl StandardStream {
    /// Create a new `StandardStream` with the given color preferences that
    /// writes to standard output.
    pub fn stdout(choice: ColorChoice) -> StandardStream {
        StandardStream { wtr: WriterInner::create(StandardStreamType::Stdout, choice) }
    }

    /// Create a new `StandardStream` with the given color preferences that
    /// writes to standard error.
    pub fn stderr(choice: ColorChoice) -> StandardStream {
        StandardStream { wtr: WriterInner::create(StandardStreamType::Stderr, choice) }
    }

    /// Returns true if color changes are emitted to the stream.
    pub fn supports_color(&self) -> bool {
        matches!(self.wtr, WriterInner::Ansi(_))
    }
}

impl WriterInner<IoStandardStream> {
    /// Create a new inner writer for a standard stream with the given color
    /// preferences.
    #[cfg(not(windows))]
    fn create(
        sty: StandardStreamType,
        choice: ColorChoice,
    ) -> WriterInner<IoStandardStream> {
        if choice.should_attempt_color() {
            log::debug!("{sty:?}: emitting ANSI colors ({choice:?})");
            WriterInner::Ansi(Ansi::new(IoStandardStream::new(sty)))
        } else {
            log::debug!("{sty:?}: colors disabled ({choice:?})");
            WriterInner::NoColor(NoColor::new(IoStandardStream::new(sty)))
        }
    }

    #[cfg(windows)]
    fn create(
        sty: StandardStreamType,
        choice: ColorChoice,
    ) -> WriterInner<IoStandardStream> {
        let enabled_virtual = if choice.should_attempt_color() {
            let con_res = match sty {
                StandardStreamType::Stdout => wincon::Console::stdout(),
                StandardStreamType::Stderr => wincon::Console::stderr(),
            };
            match con_res {
                Ok(mut con) => con.set_virtual_terminal_processing(true).is_ok(),
                Err(err) => {
                    log::debug!("{sty:?}: no console attached: {err}");
                    false
                }
            }
        } else {
            false
        };
        if choice.should_attempt_color()
            && (enabled_virtual || choice.should_force_ansi())
        {
            log::debug!(
                "{sty:?}: emitting ANSI colors ({choice:?}, virtual terminal: {enabled_virtual})"
            );
            WriterInner::Ansi(Ansi::new(IoStandardStream::new(sty)))
        } else {
            log::debug!("{sty:?}: colors disabled ({choice:?})");
            WriterInner::NoColor(NoColor::new(IoStandardStream::new(sty)))
        }
    }
}

impl io::Write for StandardStream {
    #[inline]
    fn write(&mut self, b: &[u8]) -> io::Result<usize> {
        self.wtr.write(b)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.wtr.flush()
    }
}

impl ConsoleBackend for StandardStream {
    #[inline]
    fn foreground(&self) -> io::Result<ConsoleColor> {
        self.wtr.foreground()
    }

    #[inline]
    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        self.wtr.set_foreground(color)
    }
}

impl<W: io::Write> io::Write for WriterInner<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match *self {
            WriterInner::NoColor(ref mut wtr) => wtr.write(buf),
            WriterInner::Ansi(ref mut wtr) => wtr.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match *self {
            WriterInner::NoColor(ref mut wtr) => wtr.flush(),
            WriterInner::Ansi(ref mut wtr) => wtr.flush(),
        }
    }
}

impl<W: io::Write> ConsoleBackend for WriterInner<W> {
    fn foreground(&self) -> io::Result<ConsoleColor> {
        match *self {
            WriterInner::NoColor(ref wtr) => wtr.foreground(),
            WriterInner::Ansi(ref wtr) => wtr.foreground(),
        }
    }

    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        match *self {
            WriterInner::NoColor(ref mut wtr) => wtr.set_foreground(color),
            WriterInner::Ansi(ref mut wtr) => wtr.set_foreground(color),
        }
    }
}

/// A console backend that tracks the foreground color but never emits any
/// color information.
#[derive(Clone, Debug)]
pub struct NoColor<W> {
    wtr: W,
    fg: ConsoleColor,
}

impl<W: Write> NoColor<W> {
    /// Create a new backend that drops all color information. It reports
    /// [`DEFAULT_FOREGROUND`] until a color is set.
    pub fn new(wtr: W) -> NoColor<W> {
        NoColor::with_foreground(wtr, DEFAULT_FOREGROUND)
    }

    /// Create a new backend that reports `fg` until a color is set.
    pub fn with_foreground(wtr: W, fg: ConsoleColor) -> NoColor<W> {
        NoColor { wtr, fg }
    }

    /// Consume this `NoColor` value and return the inner writer.
    pub fn into_inner(self) -> W {
        self.wtr
    }

    /// Return a reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.wtr
    }

    /// Return a mutable reference to the inner writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.wtr
    }
}

impl<W: io::Write> io::Write for NoColor<W> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.wtr.write(buf)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.wtr.flush()
    }
}

impl<W: io::Write> ConsoleBackend for NoColor<W> {
    #[inline]
    fn foreground(&self) -> io::Result<ConsoleColor> {
        Ok(self.fg)
    }

    #[inline]
    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        self.fg = color;
        Ok(())
    }
}

/// A console backend that emits color changes as ANSI escape sequences.
///
/// The register only changes once the escape sequence has been written, so
/// a failed `set_foreground` leaves the reported color unchanged.
#[derive(Clone, Debug)]
pub struct Ansi<W> {
    wtr: W,
    fg: ConsoleColor,
}

impl<W: Write> Ansi<W> {
    /// Create a new backend over `wtr` that assumes the terminal starts in
    /// [`DEFAULT_FOREGROUND`].
    pub fn new(wtr: W) -> Ansi<W> {
        Ansi::with_foreground(wtr, DEFAULT_FOREGROUND)
    }

    /// Create a new backend over `wtr` that assumes the terminal starts in
    /// `fg`. Nothing is written.
    pub fn with_foreground(wtr: W, fg: ConsoleColor) -> Ansi<W> {
        Ansi { wtr, fg }
    }

    /// Consume this `Ansi` value and return the inner writer.
    pub fn into_inner(self) -> W {
        self.wtr
    }

    /// Return a reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.wtr
    }

    /// Return a mutable reference to the inner writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.wtr
    }
}

impl<W: io::Write> io::Write for Ansi<W> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.wtr.write(buf)
    }

    // Forwarded explicitly so a `BufWriter` underneath sees one call per
    // payload instead of a loop of partial writes.
    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.wtr.write_all(buf)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.wtr.flush()
    }
}

impl<W: io::Write> ConsoleBackend for Ansi<W> {
    #[inline]
    fn foreground(&self) -> io::Result<ConsoleColor> {
        Ok(self.fg)
    }

    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        ansi::ansi_foreground(&mut self.wtr, color)?;
        self.fg = color;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ansi_tracks_and_emits() {
        let mut wtr = Ansi::new(Vec::new());
        assert_eq!(wtr.foreground().unwrap(), ConsoleColor::Gray);
        wtr.set_foreground(ConsoleColor::DarkCyan).unwrap();
        wtr.write_all(b"hi").unwrap();
        wtr.set_foreground(ConsoleColor::Gray).unwrap();
        assert_eq!(wtr.foreground().unwrap(), ConsoleColor::Gray);
        assert_eq!(wtr.into_inner(), b"\x1B[36mhi\x1B[37m");
    }

    #[test]
    fn ansi_keeps_register_when_escape_fails() {
        struct Closed;
        impl io::Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut wtr = Ansi::with_foreground(Closed, ConsoleColor::Yellow);
        assert!(wtr.set_foreground(ConsoleColor::Red).is_err());
        assert_eq!(wtr.foreground().unwrap(), ConsoleColor::Yellow);
    }

    #[test]
    fn no_color_tracks_without_emitting() {
        let mut wtr = NoColor::with_foreground(Vec::new(), ConsoleColor::White);
        wtr.set_foreground(ConsoleColor::Red).unwrap();
        assert_eq!(wtr.foreground().unwrap(), ConsoleColor::Red);
        wtr.write_all(b"plain").unwrap();
        assert_eq!(wtr.get_ref(), b"plain");
    }

    #[test]
    fn never_choice_disables_color() {
        let stream = StandardStream::stdout(ColorChoice::Never);
        assert!(!stream.supports_color());
        assert_eq!(stream.foreground().unwrap(), DEFAULT_FOREGROUND);
    }

    #[cfg(not(windows))]
    #[test]
    fn always_ansi_enables_color() {
        let stream = StandardStream::stderr(ColorChoice::AlwaysAnsi);
        assert!(stream.supports_color());
    }
}
