//! Decorative animated backgrounds.
//!
//! They carry no data from the catalog; all they need is the theme. Which ones
//! exist is decided once, at composition time, from the capability flag.

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::theme::{Theme, ThemeSubscription};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AmbientDescriptor {
    pub name: &'static str,
    pub section: &'static str,
    pub particle_count: u32,
    pub palette: Palette,
}

pub trait AmbientVisual: Send + Sync {
    fn name(&self) -> &'static str;
    /// Section the visual is mounted behind.
    fn section(&self) -> &'static str;
    fn particle_count(&self) -> u32;
    fn palette(&self, theme: Theme) -> Palette;

    fn describe(&self, theme: Theme) -> AmbientDescriptor {
        AmbientDescriptor {
            name: self.name(),
            section: self.section(),
            particle_count: self.particle_count(),
            palette: self.palette(theme),
        }
    }
}

/// Floating particles around a glowing sphere.
pub struct HeroBackground;

impl AmbientVisual for HeroBackground {
    fn name(&self) -> &'static str {
        "hero-particles"
    }

    fn section(&self) -> &'static str {
        "home"
    }

    fn particle_count(&self) -> u32 {
        150
    }

    fn palette(&self, theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Palette {
                primary: "#3b82f6",
                accent: "#06b6d4",
            },
            Theme::Light => Palette {
                primary: "#2563eb",
                accent: "#0284c7",
            },
        }
    }
}

/// Orbiting nodes over a star field.
pub struct AboutBackground;

impl AmbientVisual for AboutBackground {
    fn name(&self) -> &'static str {
        "about-orbit"
    }

    fn section(&self) -> &'static str {
        "about"
    }

    fn particle_count(&self) -> u32 {
        15
    }

    fn palette(&self, theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Palette {
                primary: "#a78bfa",
                accent: "#60a5fa",
            },
            Theme::Light => Palette {
                primary: "#4f46e5",
                accent: "#3b82f6",
            },
        }
    }
}

/// Waving lines behind the contact form.
pub struct ContactBackground;

impl AmbientVisual for ContactBackground {
    fn name(&self) -> &'static str {
        "contact-waves"
    }

    fn section(&self) -> &'static str {
        "contact"
    }

    fn particle_count(&self) -> u32 {
        20
    }

    fn palette(&self, theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Palette {
                primary: "#38bdf8",
                accent: "#38bdf8",
            },
            Theme::Light => Palette {
                primary: "#3b82f6",
                accent: "#3b82f6",
            },
        }
    }
}

pub struct AmbientRegistry {
    visuals: Vec<Box<dyn AmbientVisual>>,
    /// Theme the mounted visuals were last rendered in.
    applied: watch::Sender<Theme>,
}

impl AmbientRegistry {
    /// All backgrounds when the capability is on, none otherwise.
    pub fn compose(enabled: bool, initial: Theme) -> Self {
        let visuals: Vec<Box<dyn AmbientVisual>> = if enabled {
            vec![
                Box::new(HeroBackground),
                Box::new(AboutBackground),
                Box::new(ContactBackground),
            ]
        } else {
            Vec::new()
        };
        let (applied, _) = watch::channel(initial);
        Self { visuals, applied }
    }

    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    pub fn applied_theme(&self) -> Theme {
        *self.applied.borrow()
    }

    /// Descriptors in the theme the visuals currently show.
    pub fn describe(&self) -> Vec<AmbientDescriptor> {
        let theme = self.applied_theme();
        self.visuals.iter().map(|v| v.describe(theme)).collect()
    }

    /// Re-themes the mounted visuals on every published change until the
    /// theme context goes away. Returns how many changes were applied.
    pub async fn follow(&self, mut subscription: ThemeSubscription) -> usize {
        let mut applied = 0;
        self.applied.send_replace(subscription.current());
        info!("Ambient visuals mounted in {} theme", subscription.current());
        while let Some(theme) = subscription.changed().await {
            for visual in &self.visuals {
                let palette = visual.palette(theme);
                debug!(
                    visual = visual.name(),
                    primary = palette.primary,
                    "Ambient visual re-themed to {theme}"
                );
            }
            self.applied.send_replace(theme);
            applied += 1;
        }
        applied
    }
}
