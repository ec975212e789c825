use crate::ConsoleColor;
use std::io;

/// The line terminator emitted by line-terminated writes unless a backend
/// overrides [`ConsoleBackend::line_terminator`].
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";

/// The line terminator emitted by line-terminated writes unless a backend
/// overrides [`ConsoleBackend::line_terminator`].
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// This trait describes a console that owns a single foreground color
/// register alongside its output stream.
///
/// Text written through `io::Write` is expected to appear in whatever
/// foreground color is current at the time of the write.
pub trait ConsoleBackend: io::Write {
    /// Returns the current foreground color.
    ///
    /// This must not have side effects. An error means the register could not
    /// be read at all, for example because no console is attached.
    fn foreground(&self) -> io::Result<ConsoleColor>;

    /// Set the foreground color used by subsequent writes.
    ///
    /// If the backend does not support the color, denies access, or fails to
    /// write the change to its output, then an error is returned and the
    /// register is left as it was.
    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()>;

    /// The characters appended by line-terminated writes.
    ///
    /// This defaults to [`LINE_TERMINATOR`].
    fn line_terminator(&self) -> &'static str {
        LINE_TERMINATOR
    }
}

impl<T: ?Sized + ConsoleBackend> ConsoleBackend for &mut T {
    fn foreground(&self) -> io::Result<ConsoleColor> {
        (**self).foreground()
    }
    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        (**self).set_foreground(color)
    }
    fn line_terminator(&self) -> &'static str {
        (**self).line_terminator()
    }
}

impl<T: ?Sized + ConsoleBackend> ConsoleBackend for Box<T> {
    fn foreground(&self) -> io::Result<ConsoleColor> {
        (**self).foreground()
    }
    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        (**self).set_foreground(color)
    }
    fn line_terminator(&self) -> &'static str {
        (**self).line_terminator()
    }
}
