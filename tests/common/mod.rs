#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use scopedcolor::{ConsoleBackend, ConsoleColor};

/// One call observed by a `FakeConsole`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Read(ConsoleColor),
    Set(ConsoleColor),
    Write { color: ConsoleColor, text: String },
}

/// Failures to inject.
#[derive(Debug, Default)]
pub struct Faults {
    pub read: bool,
    pub write: bool,
    /// Setting any of these colors fails.
    pub set_to: Vec<ConsoleColor>,
}

#[derive(Debug)]
struct State {
    fg: ConsoleColor,
    events: Vec<Event>,
    output: String,
    faults: Faults,
}

/// A console whose register and output are shared by every clone, like the
/// single console of a process. Each call locks only for its own duration.
#[derive(Clone, Debug)]
pub struct FakeConsole {
    state: Arc<Mutex<State>>,
}

impl FakeConsole {
    pub fn new(fg: ConsoleColor) -> FakeConsole {
        FakeConsole {
            state: Arc::new(Mutex::new(State {
                fg,
                events: Vec::new(),
                output: String::new(),
                faults: Faults::default(),
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn fail(&self, f: impl FnOnce(&mut Faults)) {
        f(&mut self.state().faults);
    }

    pub fn color(&self) -> ConsoleColor {
        self.state().fg
    }

    pub fn events(&self) -> Vec<Event> {
        self.state().events.clone()
    }

    pub fn output(&self) -> String {
        self.state().output.clone()
    }
}

impl io::Write for FakeConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state();
        if state.faults.write {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"));
        }
        let text = String::from_utf8_lossy(buf).into_owned();
        state.output.push_str(&text);
        let color = state.fg;
        state.events.push(Event::Write { color, text });
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ConsoleBackend for FakeConsole {
    fn foreground(&self) -> io::Result<ConsoleColor> {
        let mut state = self.state();
        if state.faults.read {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no console"));
        }
        let fg = state.fg;
        state.events.push(Event::Read(fg));
        Ok(fg)
    }

    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        let mut state = self.state();
        if state.faults.set_to.contains(&color) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"));
        }
        state.fg = color;
        state.events.push(Event::Set(color));
        Ok(())
    }

    fn line_terminator(&self) -> &'static str {
        "\n"
    }
}
