use serde::{Deserialize, Serialize};

use crate::util::cwarn;

pub const SETTINGS_KEY: &str = "sr_settings";
pub const DEFAULT_MASTER_VOLUME: f32 = 0.7;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
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

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SoundSettings {
    pub enabled: bool,
    pub master_volume: f32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            master_volume: DEFAULT_MASTER_VOLUME,
        }
    }
}

impl SoundSettings {
    pub fn clamp(mut self) -> Self {
        self.master_volume = if self.master_volume.is_finite() {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            DEFAULT_MASTER_VOLUME
        };
        self
    }

    pub fn effective_gain(self) -> f32 {
        if self.enabled { self.master_volume } else { 0.0 }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub sound: SoundSettings,
}

impl Settings {
    pub fn sanitized(mut self) -> Self {
        self.sound = self.sound.clamp();
        self
    }

    /// Falls back to defaults on anything unreadable.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str::<Settings>(raw)
            .map(Settings::sanitized)
            .unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load() -> Settings {
    local_storage()
        .and_then(|store| store.get_item(SETTINGS_KEY).ok().flatten())
        .map(|raw| Settings::from_json(&raw))
        .unwrap_or_default()
}

pub fn save(settings: &Settings) {
    let Some(store) = local_storage() else {
        return;
    };
    match settings.to_json() {
        Ok(raw) => {
            if store.set_item(SETTINGS_KEY, &raw).is_err() {
                cwarn("settings: local storage write failed");
            }
        }
        Err(err) => cwarn(&format!("settings: encode failed: {err}")),
    }
}
