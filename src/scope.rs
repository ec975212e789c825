use std::ops::{Deref, DerefMut};

use std::io;

use crate::error::{Phase, Result, WriteError};
use crate::{ConsoleBackend, ConsoleColor};

/// Temporary ownership of a backend's foreground color.
///
/// Acquiring a scope saves the current color and switches to a new one.
/// The saved color is put back when the scope is released with
/// [`ColorScope::release`], or when it is dropped. Releasing reports a
/// failed restore; dropping can only log it.
///
/// While the scope is alive it dereferences to the backend, so text can be
/// written through it in the scoped color.
#[derive(Debug)]
pub struct ColorScope<'a, B: ConsoleBackend + ?Sized> {
    backend: &'a mut B,
    saved: ConsoleColor,
    active: bool,
}

impl<'a, B: ConsoleBackend + ?Sized> ColorScope<'a, B> {
    /// Save the backend's current foreground color and switch to `color`.
    ///
    /// If the current color cannot be read, or the new one cannot be set,
    /// the backend is left as it was and no scope is created.
    pub fn acquire(backend: &'a mut B, color: ConsoleColor) -> Result<Self> {
        let saved = backend
            .foreground()
            .map_err(|err| WriteError::io(Phase::ReadColor, err))?;
        backend
            .set_foreground(color)
            .map_err(|err| WriteError::io(Phase::SetColor, err))?;
        log::trace!("foreground {saved} -> {color}");
        Ok(ColorScope { backend, saved, active: true })
    }

    /// The color that will be restored.
    pub fn saved(&self) -> ConsoleColor {
        self.saved
    }

    /// Put the saved color back.
    pub fn release(self) -> Result<()> {
        self.finish().map_err(|err| WriteError::io(Phase::Restore, err))
    }

    /// Like `release`, but hands back the backend's own error.
    pub(crate) fn finish(mut self) -> io::Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        log::trace!("foreground restored to {}", self.saved);
        self.backend.set_foreground(self.saved)
    }
}

impl<B: ConsoleBackend + ?Sized> Deref for ColorScope<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.backend
    }
}

impl<B: ConsoleBackend + ?Sized> DerefMut for ColorScope<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.backend
    }
}

impl<B: ConsoleBackend + ?Sized> Drop for ColorScope<'_, B> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::warn!("dropped color scope could not restore foreground: {err}");
        }
    }
}
