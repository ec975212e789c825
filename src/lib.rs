/*!
This crate writes colored text to a console one call at a time, and puts the
console's previous foreground color back afterwards, whether the write
succeeded or not.

# Organization

The `ConsoleBackend` trait extends `io::Write` with a foreground color
register that can be read and set. Backends provided here:

* `StandardStream` writes to stdout or stderr, emitting ANSI escapes when the
  `ColorChoice` and the environment allow it.
* `Ansi` emits ANSI escapes into any `io::Write`, which makes it useful for
  in-memory buffers.
* `NoColor` tracks the register but never emits color information.

`ScopedColorWriter` is the main entry point. Each colored write saves the
current color, switches to the requested one, writes, and restores. Values
are given as a `Printable` (text, characters, numbers, booleans, character
ranges) and rendered with fixed, locale-independent rules. Composite
templates such as `"{0} of {1,4}"` are expanded with `format_composite`.

`ColorScope` is the same save-and-restore step on its own, for holding a
color across several writes.

`ScopedColorWriter` does not lock anything. `SharedColorWriter` serializes
whole operations for callers on several threads.

# Example

```rust,no_run
# fn test() -> Result<(), scopedcolor::WriteError> {
use scopedcolor::{ColorChoice, ConsoleColor, ScopedColorWriter, StandardStream};

let mut out = ScopedColorWriter::new(StandardStream::stdout(ColorChoice::Auto));
out.write_colored_line(ConsoleColor::Green, "all tests passed")?;
out.write_line("this line is in the original color")?;
# Ok(()) }
```
*/

#![deny(missing_docs)]

pub mod ansi;
mod error;
mod format;
mod scope;
mod traits;
mod types;
mod writer;
mod writers;

pub use error::{FormatError, Phase, Result, WriteError};
pub use format::{Printable, format_composite};
pub use scope::ColorScope;
pub use traits::{ConsoleBackend, LINE_TERMINATOR};
pub use types::{ColorChoice, ColorChoiceParseError, ConsoleColor, ParseColorError};
pub use writer::{ScopedColorWriter, SharedColorWriter};
pub use writers::{Ansi, DEFAULT_FOREGROUND, NoColor, StandardStream};
