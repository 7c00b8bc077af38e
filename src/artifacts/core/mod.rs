//! Core utilities and shared types
//!
//! - `logging`: `env_logger` setup; diagnostics go to stderr only
//! - `PagerWriter`: `Write` adapter feeding the minus pager

pub mod logging;

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that turns paging off, whatever the terminal.
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Page only when stdout is an interactive terminal and nobody opted out.
pub fn should_page(no_pager: bool) -> bool {
    !no_pager && std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal()
}

/// Wrapper that implements `Write` for the minus pager
///
/// The pager accepts text only, so bytes are forwarded once they form complete
/// UTF-8 sequences. A character split across two writes is held back until
/// its remaining bytes arrive.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "Some long diff...")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
    #[new(default)]
    pending: Vec<u8>,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);

        let valid = match std::str::from_utf8(&self.pending) {
            Ok(text) => text.len(),
            // an incomplete sequence at the end waits for the next write
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(e) => return Err(io::Error::new(io::ErrorKind::InvalidData, e)),
        };

        let rest = self.pending.split_off(valid);
        let text = String::from_utf8(std::mem::replace(&mut self.pending, rest))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if !text.is_empty() {
            self.pager.push_str(text).map_err(io::Error::other)?;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
