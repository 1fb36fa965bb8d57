//! Light/dark color tokens. Read-only; the filter core only uses the chip tokens.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl FromStr for ColorScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => anyhow::bail!("unknown color scheme: {other}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub text: &'static str,
    pub background: &'static str,
    pub tint: &'static str,
    pub chip_active_background: &'static str,
    pub chip_active_text: &'static str,
    pub chip_inactive_background: &'static str,
    pub chip_inactive_text: &'static str,
    pub scrim: &'static str,
}

const LIGHT: Palette = Palette {
    text: "#11181C",
    background: "#FFFFFF",
    tint: "#0A7EA4",
    chip_active_background: "#0A7EA4",
    chip_active_text: "#FFFFFF",
    chip_inactive_background: "#F1F3F5",
    chip_inactive_text: "#687076",
    scrim: "rgba(0,0,0,0.4)",
};

const DARK: Palette = Palette {
    text: "#ECEDEE",
    background: "#151718",
    tint: "#FFFFFF",
    chip_active_background: "#ECEDEE",
    chip_active_text: "#151718",
    chip_inactive_background: "#262A2D",
    chip_inactive_text: "#9BA1A6",
    scrim: "rgba(0,0,0,0.6)",
};

impl Palette {
    pub fn for_scheme(scheme: ColorScheme) -> &'static Palette {
        match scheme {
            ColorScheme::Light => &LIGHT,
            ColorScheme::Dark => &DARK,
        }
    }

    /// `(background, text)` for a chip.
    pub fn chip(&self, active: bool) -> (&'static str, &'static str) {
        if active {
            (self.chip_active_background, self.chip_active_text)
        } else {
            (self.chip_inactive_background, self.chip_inactive_text)
        }
    }
}
