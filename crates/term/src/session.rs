//! TerminalSession: scoped raw mode.
//!
//! Raw mode is process-wide state. A session enables it on [`TerminalSession::enter`]
//! and restores cooked mode when dropped. Restoration also runs from a panic
//! hook and, on Unix, from a signal watcher thread handling SIGINT, SIGTERM
//! and SIGHUP, so every exit path leaves the terminal usable. A process-wide
//! flag makes sure the restore happens exactly once.
//!
//! While a board is on screen the renderer records the row below it with
//! [`set_exit_row`]; restoring moves the cursor there so the shell prompt
//! does not land inside the grid.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::OnceLock;

use anyhow::{bail, Context, Result};
use crossterm::{cursor, style::ResetColor, terminal};
use tracing::{info, warn};

static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

const NO_EXIT_ROW: u32 = u32::MAX;
static EXIT_ROW: AtomicU32 = AtomicU32::new(NO_EXIT_ROW);

/// Row to park the cursor on when the terminal is restored, `None` to leave
/// it where it is.
pub fn set_exit_row(row: Option<u16>) {
    EXIT_ROW.store(row.map_or(NO_EXIT_ROW, u32::from), Ordering::SeqCst);
}

pub fn exit_row() -> Option<u16> {
    u16::try_from(EXIT_ROW.load(Ordering::SeqCst)).ok()
}

#[derive(Debug)]
pub struct TerminalSession {
    #[cfg(unix)]
    _signals: SignalGuard,
}

impl TerminalSession {
    /// Switch the terminal to raw mode.
    ///
    /// Fails if another session is already active.
    pub fn enter() -> Result<Self> {
        if RAW_MODE_ACTIVE
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            bail!("terminal session already active");
        }

        install_panic_hook();
        if let Err(err) = terminal::enable_raw_mode() {
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
            return Err(err).context("failed to enable raw mode");
        }
        info!("terminal raw mode enabled");

        #[cfg(unix)]
        let signals = match SignalGuard::new() {
            Ok(guard) => guard,
            Err(err) => {
                restore();
                return Err(err).context("failed to install signal handlers");
            }
        };

        Ok(Self {
            #[cfg(unix)]
            _signals: signals,
        })
    }

    /// Whether raw mode is currently held by a session
    pub fn is_active() -> bool {
        RAW_MODE_ACTIVE.load(Ordering::SeqCst)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
    }
}

/// Restore cooked mode if a session still holds raw mode.
///
/// Safe to call from any thread and any number of times; only the first call
/// after [`TerminalSession::enter`] touches the terminal.
pub fn restore() {
    if !RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
        return;
    }

    let mut stdout = io::stdout();
    if let Some(row) = exit_row() {
        let _ = crossterm::execute!(stdout, cursor::MoveTo(0, row));
    }
    let _ = crossterm::execute!(stdout, ResetColor, cursor::Show);
    if let Err(err) = terminal::disable_raw_mode() {
        warn!(%err, "failed to disable raw mode");
    } else {
        info!("terminal raw mode disabled");
    }
    let _ = stdout.flush();
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore();
            previous(panic_info);
        }));
    });
}

#[cfg(unix)]
#[derive(Debug)]
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn new() -> io::Result<Self> {
        use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
        use signal_hook::iterator::Signals;

        let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            if let Some(signal) = signals.forever().next() {
                warn!(signal, "termination signal received, restoring terminal");
                restore();
                let _ = writeln!(io::stdout());
                std::process::exit(128 + signal);
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
