//! Theme context — light/dark preference published to independently mounted
//! subscribers (decorative backgrounds, listing pages).
//!
//! One `ThemeContext` lives in `AppState`; anything that renders differently
//! per theme takes a `ThemeSubscription` instead of reading shared state.

pub mod handlers;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}' (expected 'light' or 'dark')")),
        }
    }
}

/// Publisher side. Cloning shares the same channel.
#[derive(Clone)]
pub struct ThemeContext {
    sender: watch::Sender<Theme>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn current(&self) -> Theme {
        *self.sender.borrow()
    }

    /// Publishes `theme`. Subscribers are only woken when the value changes.
    pub fn set(&self, theme: Theme) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == theme {
                false
            } else {
                *current = theme;
                true
            }
        })
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    pub fn subscribe(&self) -> ThemeSubscription {
        ThemeSubscription {
            receiver: self.sender.subscribe(),
        }
    }
}

/// Subscriber side, held by anything that re-renders on a theme change.
pub struct ThemeSubscription {
    receiver: watch::Receiver<Theme>,
}

impl ThemeSubscription {
    pub fn current(&self) -> Theme {
        *self.receiver.borrow()
    }

    /// Waits for the next published change. `None` once the context is gone.
    pub async fn changed(&mut self) -> Option<Theme> {
        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }
}
