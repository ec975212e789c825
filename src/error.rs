//! Error types for scoped colored writes.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::ParseColorError;

/// The step of a colored write at which the backend failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Reading the current foreground color before changing it.
    ReadColor,
    /// Switching to the requested foreground color.
    SetColor,
    /// Emitting the payload.
    Write,
    /// Putting the saved foreground color back.
    Restore,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Phase::ReadColor => "reading the foreground color",
            Phase::SetColor => "setting the foreground color",
            Phase::Write => "writing",
            Phase::Restore => "restoring the foreground color",
        })
    }
}

/// A malformed composite format template or an argument that cannot be
/// rendered.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FormatError {
    /// A `{` opened a placeholder that never closed.
    #[error("unclosed placeholder starting at offset {position}")]
    UnclosedPlaceholder {
        /// Byte offset of the opening brace.
        position: usize,
    },

    /// A lone `}` that is neither `}}` nor the end of a placeholder.
    #[error("unescaped '}}' at offset {position}")]
    UnescapedBrace {
        /// Byte offset of the brace.
        position: usize,
    },

    /// The placeholder index is missing, not decimal, or too large.
    #[error("invalid placeholder index at offset {position}")]
    InvalidIndex {
        /// Byte offset where the index was expected.
        position: usize,
    },

    /// The alignment after `,` is missing or not a decimal integer.
    #[error("invalid alignment at offset {position}")]
    InvalidAlignment {
        /// Byte offset where the alignment was expected.
        position: usize,
    },

    /// The template refers to an argument that was not supplied.
    #[error("placeholder {{{index}}} refers past the {supplied} supplied argument(s)")]
    MissingArgument {
        /// The referenced index.
        index: usize,
        /// How many arguments were supplied.
        supplied: usize,
    },

    /// The format string after `:` is not understood for the argument.
    #[error("format specifier '{spec}' is not supported for {target}")]
    UnsupportedSpecifier {
        /// The format string.
        spec: String,
        /// What kind of value it was applied to.
        target: &'static str,
    },

    /// A character range does not lie within its buffer.
    #[error("character range {index}+{count} exceeds buffer of length {len}")]
    CharRange {
        /// Start of the range.
        index: usize,
        /// Number of characters requested.
        count: usize,
        /// Length of the buffer.
        len: usize,
    },
}

/// Main error type for scoped colored writes.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The requested color is not one of the console colors. Nothing was
    /// written and the backend was not touched.
    #[error("invalid console color: {0}")]
    InvalidColor(#[from] ParseColorError),

    /// The payload could not be rendered. Rendering happens before the color
    /// is set, so the backend was not touched.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// The backend failed during one phase of the write.
    #[error("console I/O error while {phase}: {source}")]
    Io {
        /// The phase that failed.
        phase: Phase,
        /// The backend's error.
        #[source]
        source: io::Error,
    },

    /// The write failed, and putting the saved color back failed as well.
    #[error("{primary}; restoring the foreground color also failed: {restore}")]
    RestoreFailed {
        /// The failure that ended the write.
        #[source]
        primary: Box<WriteError>,
        /// The failure from the restore that followed it.
        restore: io::Error,
    },
}

impl WriteError {
    pub(crate) fn io(phase: Phase, source: io::Error) -> WriteError {
        WriteError::Io { phase, source }
    }

    /// Returns the phase whose failure is reported first, if the backend
    /// failed at all.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            WriteError::Io { phase, .. } => Some(*phase),
            WriteError::RestoreFailed { primary, .. } => primary.phase(),
            WriteError::InvalidColor(_) | WriteError::Format(_) => None,
        }
    }
}

/// Result type alias using [`WriteError`].
pub type Result<T> = std::result::Result<T, WriteError>;
