//! Raw-mode terminal session that puts the terminal back on drop, including
//! while unwinding from a panic.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, switches to the alternate screen and turns on mouse
    /// capture.
    pub fn enter(mut out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(TerminalGuard { out })
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn restores_screen_when_unwinding() {
        let mut out: Vec<u8> = Vec::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = TerminalGuard { out: &mut out };
            panic!("render failed");
        }));
        assert!(result.is_err());

        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049l"), "left alternate screen");
        assert!(written.contains("\x1b[?25h"), "cursor shown");
    }
}
