use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum TimeFormat {
    #[serde(rename = "12")]
    #[value(name = "12")]
    H12,
    #[default]
    #[serde(rename = "24")]
    #[value(name = "24")]
    H24,
}

impl TimeFormat {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TimeFormat::H12 => "12",
            TimeFormat::H24 => "24",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "12" => Some(TimeFormat::H12),
            "24" => Some(TimeFormat::H24),
            _ => None,
        }
    }
}

/// The singleton preferences row (id is always 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: i64,
    pub theme: Theme,
    pub language: String,
    pub time_format: TimeFormat,
    pub custom_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub theme: Option<Theme>,
    pub language: Option<String>,
    pub time_format: Option<TimeFormat>,
    pub custom_url: Option<String>,
}

impl UpdateSettingsRequest {
    pub fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.language.is_none()
            && self.time_format.is_none()
            && self.custom_url.is_none()
    }
}
