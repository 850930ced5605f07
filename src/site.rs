use crate::config::Environment;
use anyhow::{bail, Result};
use serde::Serialize;
use tracing::warn;

/// Variables that must be set for a production deployment.
pub const REQUIRED_VARIABLES: [&str; 8] = [
    "PUBLIC_SITE_NAME",
    "PUBLIC_SITE_DESCRIPTION",
    "PUBLIC_WHATSAPP",
    "PUBLIC_ADDRESS",
    "PUBLIC_PHONE",
    "PUBLIC_EMAIL",
    "PUBLIC_MAP_LATITUDE",
    "PUBLIC_MAP_LONGITUDE",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

/// Public site details rendered by the pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_name: String,
    pub description: String,
    pub whatsapp: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub social: SocialLinks,
    pub map: MapLocation,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            site_name: text("PUBLIC_SITE_NAME", "Residence"),
            description: text("PUBLIC_SITE_DESCRIPTION", "Senior living community"),
            whatsapp: text("PUBLIC_WHATSAPP", "+1234567890"),
            address: text("PUBLIC_ADDRESS", "123 Main Street, City, State"),
            phone: text("PUBLIC_PHONE", "+1 (555) 123-4567"),
            email: text("PUBLIC_EMAIL", "info@residence.com"),
            social: SocialLinks {
                facebook: optional("PUBLIC_FACEBOOK_URL"),
                instagram: optional("PUBLIC_INSTAGRAM_URL"),
                twitter: optional("PUBLIC_TWITTER_URL"),
            },
            map: MapLocation {
                latitude: number("PUBLIC_MAP_LATITUDE", 40.7128),
                longitude: number("PUBLIC_MAP_LONGITUDE", -74.0060),
                zoom: number("PUBLIC_MAP_ZOOM", 15),
            },
        }
    }

    /// Names of required variables that are not set.
    pub fn missing_variables() -> Vec<&'static str> {
        REQUIRED_VARIABLES
            .iter()
            .copied()
            .filter(|name| optional(name).is_none())
            .collect()
    }

    /// Check the required variables. Missing ones fail in production and
    /// are only reported in development.
    pub fn validate(environment: Environment) -> Result<()> {
        let missing = Self::missing_variables();
        if missing.is_empty() {
            return Ok(());
        }

        match environment {
            Environment::Production => {
                bail!("Missing required environment variables: {}", missing.join(", "))
            }
            Environment::Development => {
                warn!(
                    "Missing environment variables (using defaults): {}",
                    missing.join(", ")
                );
                Ok(())
            }
        }
    }
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn text(name: &str, default: &str) -> String {
    optional(name).unwrap_or_else(|| default.to_string())
}

fn number<T: std::str::FromStr>(name: &str, default: T) -> T {
    optional(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
