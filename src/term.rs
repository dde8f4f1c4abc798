use std::io;
use std::sync::OnceLock;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::tty::IsTty;

/// Original terminal attributes, saved before raw mode is entered.
/// The signal handler restores from here; the normal exit path goes
/// through crossterm's own saved state via `disable_raw_mode`.
static ORIGINAL_TERMIOS: OnceLock<libc::termios> = OnceLock::new();

pub fn stdin_is_tty() -> bool {
    io::stdin().is_tty()
}

/// Holds the terminal in raw mode for its lifetime and restores the
/// previous mode on drop. Held across the read loop, so propagated errors
/// restore the terminal the same as a normal return.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enter() -> io::Result<RawModeGuard> {
        unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) != 0 {
                return Err(io::Error::last_os_error());
            }
            let _ = ORIGINAL_TERMIOS.set(termios);
        }
        enable_raw_mode()?;
        install_signal_handlers();
        Ok(RawModeGuard { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// External termination must restore the terminal too. No SIGINT handler:
/// raw mode clears ISIG, so Ctrl+C arrives as byte 0x03 and the read loop
/// treats it as an exit byte.
fn install_signal_handlers() {
    unsafe {
        libc::signal(libc::SIGTERM, restore_and_exit as libc::sighandler_t);
        libc::signal(libc::SIGHUP, restore_and_exit as libc::sighandler_t);
        libc::signal(libc::SIGQUIT, restore_and_exit as libc::sighandler_t);
    }
}

extern "C" fn restore_and_exit(sig: libc::c_int) {
    unsafe {
        if let Some(termios) = ORIGINAL_TERMIOS.get() {
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSADRAIN, termios);
        }
        libc::_exit(128 + sig);
    }
}
