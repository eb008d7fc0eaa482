//! Core script text and the `main` trailer.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

/// `core.sh`, bound into the binary at build time.
pub static EMBEDDED: &str = include_str!("../core.sh");

/// Script text handed to the interpreter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    text: Cow<'static, str>,
    origin: Origin,
}

/// Where a [`Script`] came from; only used for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    Embedded,
    Inline,
    File(String),
}

impl Script {
    pub fn embedded() -> Self {
        Self {
            text: Cow::Borrowed(EMBEDDED),
            origin: Origin::Embedded,
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Cow::Owned(text.into()),
            origin: Origin::Inline,
        }
    }

    /// Load a script from disk in place of the embedded one (development override).
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(Self {
            text: Cow::Owned(text),
            origin: Origin::File(path.display().to_string()),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Script text followed by the call to `entry_point`.
    pub fn payload(&self, entry_point: &str) -> String {
        payload(&self.text, entry_point)
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Append the trailer: a newline, then a bare call to `entry_point`.
///
/// The newline is added unconditionally, so a script without a final newline
/// still ends its last command before the call.
pub fn payload(script: &str, entry_point: &str) -> String {
    let mut out = String::with_capacity(script.len() + 1 + entry_point.len());
    out.push_str(script);
    out.push('\n');
    out.push_str(entry_point);
    out
}
