use std::borrow::Cow;
use std::sync::{Mutex, PoisonError};

use crate::error::{Phase, Result, WriteError};
use crate::format::{Printable, format_composite};
use crate::{ColorScope, ConsoleBackend, ConsoleColor, ParseColorError};

/// Writes text in a chosen foreground color, one call at a time, and puts
/// the previous color back afterwards.
///
/// Every colored operation runs the same sequence: convert the color, render
/// the payload, read and save the backend's current color, set the new
/// color, emit the text, restore the saved color. Because conversion and
/// rendering come first, an invalid color or a malformed template fails
/// without touching the backend. A failed write still restores the saved
/// color before the error is returned.
///
/// This type does no locking of its own. If several threads share one
/// console, either give each its own backend or wrap the writer in a
/// [`SharedColorWriter`]; interleaved scopes on a shared color register can
/// leave text in the wrong color.
#[derive(Debug)]
pub struct ScopedColorWriter<B> {
    backend: B,
}

impl<B: ConsoleBackend> ScopedColorWriter<B> {
    /// Create a writer over `backend`.
    pub fn new(backend: B) -> ScopedColorWriter<B> {
        ScopedColorWriter { backend }
    }

    /// Write `value` in `color`, followed by the backend's line terminator
    /// if `newline` is true.
    ///
    /// `color` may be a [`ConsoleColor`], a numeric code, or a color name.
    pub fn write_colored<'v, C>(
        &mut self,
        color: C,
        value: impl Into<Printable<'v>>,
        newline: bool,
    ) -> Result<()>
    where
        C: TryInto<ConsoleColor>,
        C::Error: Into<ParseColorError>,
    {
        let color = console_color(color)?;
        let value: Printable<'v> = value.into();
        let text = value.render()?;
        self.emit_scoped(color, &text, newline)
    }

    /// Write `value` in `color` followed by the line terminator.
    pub fn write_colored_line<'v, C>(
        &mut self,
        color: C,
        value: impl Into<Printable<'v>>,
    ) -> Result<()>
    where
        C: TryInto<ConsoleColor>,
        C::Error: Into<ParseColorError>,
    {
        self.write_colored(color, value, true)
    }

    /// Expand a composite template and write it in `color`.
    ///
    /// The template is expanded in full before the color is touched.
    pub fn write_colored_format<C>(
        &mut self,
        color: C,
        template: &str,
        args: &[Printable<'_>],
        newline: bool,
    ) -> Result<()>
    where
        C: TryInto<ConsoleColor>,
        C::Error: Into<ParseColorError>,
    {
        let color = console_color(color)?;
        let text = format_composite(template, args)?;
        self.emit_scoped(color, &text, newline)
    }

    /// Write `value` in whatever color is current.
    pub fn write<'v>(&mut self, value: impl Into<Printable<'v>>) -> Result<()> {
        let value: Printable<'v> = value.into();
        let text = value.render()?;
        self.emit(&text, false)
    }

    /// Write `value` in whatever color is current, followed by the line
    /// terminator.
    pub fn write_line<'v>(&mut self, value: impl Into<Printable<'v>>) -> Result<()> {
        let value: Printable<'v> = value.into();
        let text = value.render()?;
        self.emit(&text, true)
    }

    /// Expand a composite template and write it in whatever color is
    /// current.
    pub fn write_format(
        &mut self,
        template: &str,
        args: &[Printable<'_>],
        newline: bool,
    ) -> Result<()> {
        let text = format_composite(template, args)?;
        self.emit(&text, newline)
    }

    /// The backend's current foreground color.
    pub fn foreground(&self) -> Result<ConsoleColor> {
        self.backend
            .foreground()
            .map_err(|err| WriteError::io(Phase::ReadColor, err))
    }

    /// Change the backend's foreground color without restoring it later.
    pub fn set_foreground(&mut self, color: ConsoleColor) -> Result<()> {
        self.backend
            .set_foreground(color)
            .map_err(|err| WriteError::io(Phase::SetColor, err))
    }

    /// Switch to `color` until the returned scope is released or dropped.
    pub fn scope(&mut self, color: ConsoleColor) -> Result<ColorScope<'_, B>> {
        ColorScope::acquire(&mut self.backend, color)
    }

    /// Return a reference to the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Return a mutable reference to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consume the writer and return the backend.
    pub fn into_inner(self) -> B {
        self.backend
    }

    fn emit_scoped(&mut self, color: ConsoleColor, text: &str, newline: bool) -> Result<()> {
        let mut scope = ColorScope::acquire(&mut self.backend, color)?;
        let written = emit(&mut *scope, text, newline);
        match (written, scope.finish()) {
            (Ok(()), Ok(())) => Ok(()),
            (Ok(()), Err(restore)) => Err(WriteError::io(Phase::Restore, restore)),
            (Err(primary), Ok(())) => Err(primary),
            (Err(primary), Err(restore)) => {
                Err(WriteError::RestoreFailed { primary: Box::new(primary), restore })
            }
        }
    }

    fn emit(&mut self, text: &str, newline: bool) -> Result<()> {
        emit(&mut self.backend, text, newline)
    }
}

fn console_color<C>(color: C) -> Result<ConsoleColor>
where
    C: TryInto<ConsoleColor>,
    C::Error: Into<ParseColorError>,
{
    color
        .try_into()
        .map_err(|err| WriteError::InvalidColor(err.into()))
}

fn emit<B: ConsoleBackend + ?Sized>(backend: &mut B, text: &str, newline: bool) -> Result<()> {
    let payload = if newline {
        let mut line = String::with_capacity(text.len() + 2);
        line.push_str(text);
        line.push_str(backend.line_terminator());
        Cow::Owned(line)
    } else {
        Cow::Borrowed(text)
    };
    log::trace!("writing {} byte(s)", payload.len());
    backend
        .write_all(payload.as_bytes())
        .and_then(|()| backend.flush())
        .map_err(|err| WriteError::io(Phase::Write, err))
}

/// A [`ScopedColorWriter`] that can be shared between threads.
///
/// Each operation holds a lock for its whole save, set, write, restore
/// sequence, so concurrent callers never observe each other's colors.
#[derive(Debug)]
pub struct SharedColorWriter<B> {
    inner: Mutex<ScopedColorWriter<B>>,
}

impl<B: ConsoleBackend> SharedColorWriter<B> {
    /// Create a shared writer over `backend`.
    pub fn new(backend: B) -> SharedColorWriter<B> {
        SharedColorWriter { inner: Mutex::new(ScopedColorWriter::new(backend)) }
    }

    /// See [`ScopedColorWriter::write_colored`].
    pub fn write_colored<'v, C>(
        &self,
        color: C,
        value: impl Into<Printable<'v>>,
        newline: bool,
    ) -> Result<()>
    where
        C: TryInto<ConsoleColor>,
        C::Error: Into<ParseColorError>,
    {
        self.with(|w| w.write_colored(color, value, newline))
    }

    /// See [`ScopedColorWriter::write_colored_format`].
    pub fn write_colored_format<C>(
        &self,
        color: C,
        template: &str,
        args: &[Printable<'_>],
        newline: bool,
    ) -> Result<()>
    where
        C: TryInto<ConsoleColor>,
        C::Error: Into<ParseColorError>,
    {
        self.with(|w| w.write_colored_format(color, template, args, newline))
    }

    /// Run `f` with exclusive access to the writer.
    ///
    /// A lock poisoned by a panicking caller is taken over; the color is
    /// whatever the interrupted operation left behind.
    pub fn with<T>(&self, f: impl FnOnce(&mut ScopedColorWriter<B>) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    /// Consume the shared writer and return the backend.
    pub fn into_inner(self) -> B {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_inner()
    }
}
