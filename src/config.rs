use crate::contact::ContactPolicy;
use crate::site::SiteConfig;
use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub environment: Environment,
    pub static_dir: Option<PathBuf>,

    // Resend
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,

    // Contact form
    pub contact_from: String,
    pub contact_recipients: Vec<String>,
    pub contact_policy: ContactPolicy,

    // Testimonials
    pub testimonials_url: Option<String>,

    // Analytics
    pub ga_measurement_id: String,

    // Public site details
    pub site: SiteConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = ContactPolicy::default();

        let contact_recipients = parse_recipients(
            &std::env::var("CONTACT_RECIPIENTS")
                .unwrap_or_else(|_| "info@residencianuevaedad.es".to_string()),
        );
        if contact_recipients.is_empty() {
            bail!("CONTACT_RECIPIENTS must list at least one address");
        }

        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(8080),
            environment: Environment::parse(
                &std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            ),
            static_dir: optional("STATIC_DIR").map(PathBuf::from),

            // Resend
            resend_api_key: optional("RESEND_API_KEY"),
            resend_api_url: std::env::var("RESEND_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),

            // Contact form
            contact_from: std::env::var("CONTACT_FROM")
                .unwrap_or_else(|_| "Residencia Contact <onboarding@resend.dev>".to_string()),
            contact_recipients,
            contact_policy: ContactPolicy {
                name_min: number("CONTACT_NAME_MIN_LEN", defaults.name_min),
                phone_min: number("CONTACT_PHONE_MIN_LEN", defaults.phone_min),
                message_min: number("CONTACT_MESSAGE_MIN_LEN", defaults.message_min),
                message_max: number("CONTACT_MESSAGE_MAX_LEN", defaults.message_max),
            },

            // Testimonials
            testimonials_url: optional("PUBLIC_GOOGLE_TESTIMONIALS"),

            // Analytics
            ga_measurement_id: std::env::var("GA_MEASUREMENT_ID")
                .unwrap_or_else(|_| "G-MEASUREMENT_ID".to_string()),

            site: SiteConfig::from_env(),
        })
    }
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn number(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_recipients(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(String::from)
        .collect()
}
