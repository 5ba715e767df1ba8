//! Reading an encoded key from a text stream.
//!
//! `mungectl key set` takes the new key on stdin. When stdin is a character
//! device (a terminal, or `/dev/null` under a service manager) there is
//! nothing piped in, so scanning fails fast with
//! [`MungeError::NoInputError`] instead of waiting on an empty prompt or
//! reading an empty key.

use crate::error::{MungeError, Result};
use std::io::{self, BufRead, IsTerminal, Stdin, StdinLock};
use tracing::debug;

/// A text source together with whether it is interactive (a character device).
#[derive(Debug)]
pub struct InputSource<R> {
    reader: R,
    interactive: bool,
}

impl InputSource<StdinLock<'static>> {
    /// Standard input. Any character device counts as interactive.
    pub fn stdin() -> Self {
        let stdin = io::stdin();
        let interactive = is_char_device(&stdin).unwrap_or_else(|| stdin.is_terminal());
        Self {
            reader: stdin.lock(),
            interactive,
        }
    }
}

/// `None` when the file type of stdin cannot be determined.
#[cfg(unix)]
fn is_char_device(stdin: &Stdin) -> Option<bool> {
    use std::fs::File;
    use std::os::fd::AsFd;
    use std::os::unix::fs::FileTypeExt;

    // The duplicate descriptor is closed on drop; fd 0 stays open.
    let file = File::from(stdin.as_fd().try_clone_to_owned().ok()?);
    let metadata = file.metadata().ok()?;
    Some(metadata.file_type().is_char_device())
}

#[cfg(not(unix))]
fn is_char_device(_stdin: &Stdin) -> Option<bool> {
    None
}

impl<R: BufRead> InputSource<R> {
    /// A non-interactive source such as a pipe, file or in-memory buffer.
    pub fn piped(reader: R) -> Self {
        Self {
            reader,
            interactive: false,
        }
    }

    /// A source that behaves like a terminal.
    pub fn interactive(reader: R) -> Self {
        Self {
            reader,
            interactive: true,
        }
    }

    /// Whether scanning this source fails with [`MungeError::NoInputError`].
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Read all text from `source` until end of input.
///
/// Lines are concatenated without their separators and surrounding
/// whitespace is trimmed from the result.
///
/// # Example
///
/// ```
/// use mungectl::input::{scan_text, InputSource};
///
/// let source = InputSource::piped("d2UgYmUg\ndGVzdGluZw==\n".as_bytes());
/// assert_eq!(scan_text(source).unwrap(), "d2UgYmUgdGVzdGluZw==");
/// ```
pub fn scan_text<R: BufRead>(source: InputSource<R>) -> Result<String> {
    if source.interactive {
        return Err(MungeError::NoInputError);
    }

    let mut text = String::new();
    for line in source.reader.lines() {
        text.push_str(&line?);
    }

    let text = text.trim().to_string();
    debug!(len = text.len(), "scanned encoded munge key");
    Ok(text)
}
