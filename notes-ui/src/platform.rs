//! Opening links in the platform's default handler.

use std::process::Command;

/// Opens an href outside the app. Fire-and-forget.
pub trait LinkOpener {
    fn open(&self, href: &str);
}

/// Hands links to `open` (macOS) or `xdg-open` (Linux).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, href: &str) {
        let mut cmd = open_command();
        cmd.arg(href);
        if let Err(err) = cmd.spawn() {
            tracing::warn!(%href, error = %err, "failed to launch link handler");
        }
    }
}

#[cfg(target_os = "macos")]
fn open_command() -> Command {
    Command::new("open")
}

#[cfg(target_os = "linux")]
fn open_command() -> Command {
    Command::new("xdg-open")
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn open_command() -> Command {
    Command::new("open")
}
