//! One-shot watcher for pipeline cancellation signals.

use std::fmt;

/// A cancellation signal recognized by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// SIGINT, typically Ctrl-C.
    Interrupt,
    /// SIGTERM, typically a supervisor asking the run to stop.
    Terminate,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Interrupt => write!(f, "SIGINT"),
            Signal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Arm a watcher that calls `on_signal` with the first SIGINT or SIGTERM
/// delivered to the process, then stands down.
///
/// SIGINT and SIGTERM are blocked on the calling thread before the watcher
/// starts; threads spawned afterwards inherit the mask, so only the watcher's
/// `sigwait` can consume them. The signals stay blocked after delivery, which
/// makes the watcher one-shot: a second Ctrl-C is never reported.
#[cfg(unix)]
pub(crate) fn watch_once<F>(on_signal: F)
where
    F: FnOnce(Signal) + Send + 'static,
{
    use tracing::debug;

    // SAFETY: the set is initialized by sigemptyset before use, and
    // pthread_sigmask only manipulates the calling thread's mask.
    let set = unsafe {
        let mut set: libc::sigset_t = std::mem::zeroed();
        libc::sigemptyset(&mut set);
        libc::sigaddset(&mut set, libc::SIGINT);
        libc::sigaddset(&mut set, libc::SIGTERM);
        libc::pthread_sigmask(libc::SIG_BLOCK, &set, std::ptr::null_mut());
        set
    };

    std::thread::spawn(move || {
        let mut sig: libc::c_int = 0;
        // SAFETY: `set` was built above and stays valid for this call.
        let rc = unsafe { libc::sigwait(&set, &mut sig) };
        if rc != 0 {
            return;
        }

        let signal = if sig == libc::SIGTERM {
            Signal::Terminate
        } else {
            Signal::Interrupt
        };
        debug!(%signal, "cancellation signal received");
        on_signal(signal);
    });
}

/// No signal support off unix; the watcher never fires.
#[cfg(not(unix))]
pub(crate) fn watch_once<F>(_on_signal: F)
where
    F: FnOnce(Signal) + Send + 'static,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_display_their_os_names() {
        assert_eq!(Signal::Interrupt.to_string(), "SIGINT");
        assert_eq!(Signal::Terminate.to_string(), "SIGTERM");
    }

    #[test]
    fn signals_compare_by_kind() {
        assert_eq!(Signal::Interrupt, Signal::Interrupt);
        assert_ne!(Signal::Interrupt, Signal::Terminate);
    }
}
