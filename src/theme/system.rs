//! Platform colour-scheme preference.
//!
//! The desktop colour scheme is read through `dark-light`, which has no
//! change notification, so the watcher polls the source and reports
//! transitions.

use log::*;
use std::{env, thread, time::Duration};

/// Explicit override, `dark` or `light`.
const SCHEME_VAR: &str = "FOLIO_COLOR_SCHEME";
/// `fg;bg` colour indices set by rxvt-style terminals.
const COLORFGBG_VAR: &str = "COLORFGBG";

/// Reports whether the platform prefers a dark scheme.
///
pub trait SystemPreference: Send {
    fn prefers_dark(&self) -> bool;
}

/// Reads the preference from the override variable, the desktop colour
/// scheme and finally the terminal's `COLORFGBG`.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformPreference;

impl SystemPreference for PlatformPreference {
    fn prefers_dark(&self) -> bool {
        let desktop = match dark_light::detect() {
            dark_light::Mode::Dark => Some(true),
            dark_light::Mode::Light => Some(false),
            dark_light::Mode::Default => None,
        };
        prefers_dark_from(
            env::var(SCHEME_VAR).ok().as_deref(),
            desktop,
            env::var(COLORFGBG_VAR).ok().as_deref(),
        )
    }
}

/// Decide from an explicit scheme, the desktop scheme and a `COLORFGBG`
/// value, in that order. Without any of them, dark is assumed since most
/// terminals default to a dark background.
///
pub fn prefers_dark_from(
    scheme: Option<&str>,
    desktop: Option<bool>,
    colorfgbg: Option<&str>,
) -> bool {
    if let Some(scheme) = scheme {
        match scheme.trim().to_ascii_lowercase().as_str() {
            "dark" => return true,
            "light" => return false,
            other => warn!("Ignoring unknown {} value '{}'", SCHEME_VAR, other),
        }
    }
    if let Some(is_dark) = desktop {
        return is_dark;
    }
    // Background is the last field; indices 0-6 and 8 are dark.
    let background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match background {
        Some(bg) => matches!(bg, 0..=6 | 8),
        None => true,
    }
}

/// Polls a preference source on its own thread.
///
pub struct PreferenceWatcher;

impl PreferenceWatcher {
    /// Spawn the polling thread. `notify` receives each new value and returns
    /// false once nobody is listening, which ends the thread.
    ///
    pub fn spawn<S, F>(source: S, interval: Duration, notify: F) -> thread::JoinHandle<()>
    where
        S: SystemPreference + 'static,
        F: Fn(bool) -> bool + Send + 'static,
    {
        let mut last = source.prefers_dark();
        thread::spawn(move || {
            loop {
                thread::sleep(interval);
                let current = source.prefers_dark();
                if current == last {
                    continue;
                }
                debug!("Platform prefers {} scheme now", if current { "dark" } else { "light" });
                last = current;
                if !notify(current) {
                    break;
                }
            }
        })
    }
}
