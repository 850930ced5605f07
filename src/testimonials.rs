//! Testimonials shown in the carousel.
//!
//! Loaded from an optional remote JSON source (e.g. a published spreadsheet).
//! Each item is validated on its own and invalid ones are dropped. Without a
//! source, or when it fails, the built-in entries are used; their text fields
//! are message keys localized per request.

use crate::i18n::{Language, MessageKey, TranslationTable};
use anyhow::{bail, Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub year: String,
    pub content: String,
    pub image: String,
}

const CONTENT_MIN_LEN: usize = 10;

impl Testimonial {
    /// List of problems with this testimonial; empty when valid.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.name.is_empty() {
            problems.push("name is required".to_string());
        }
        if self.role.is_empty() {
            problems.push("role is required".to_string());
        }
        if self.content.chars().count() < CONTENT_MIN_LEN {
            problems.push(format!("content must be at least {} characters", CONTENT_MIN_LEN));
        }
        if Url::parse(&self.image).is_err() {
            problems.push("image is not a valid URL".to_string());
        }
        problems
    }

    pub fn is_valid(&self) -> bool {
        self.problems().is_empty()
    }

    /// Replace fields that hold a message key with their translation.
    pub fn localized(&self, table: &TranslationTable, language: Language) -> Testimonial {
        let translate = |value: &str| match value.parse::<MessageKey>() {
            Ok(key) => table.t(language, key).to_string(),
            Err(_) => value.to_string(),
        };

        Testimonial {
            id: self.id.clone(),
            name: translate(&self.name),
            role: translate(&self.role),
            year: self.year.clone(),
            content: translate(&self.content),
            image: self.image.clone(),
        }
    }
}

/// Built-in testimonials. Text fields are message keys.
pub fn builtin() -> Vec<Testimonial> {
    let entry = |id: &str, person: &str, year: &str, image: &str| Testimonial {
        id: id.to_string(),
        name: format!("testimonials.{}.name", person),
        role: format!("testimonials.{}.role", person),
        year: year.to_string(),
        content: format!("testimonials.{}.content", person),
        image: image.to_string(),
    };

    vec![
        entry("1", "margaret", "2021", "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400"),
        entry("2", "john", "2022", "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400"),
        entry("3", "david", "2022", "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400"),
        entry("4", "emily", "2023", "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400"),
    ]
}

/// Load testimonials from `source`, falling back to [`builtin`].
///
/// Never fails: an unset source, a transport error, a non-success status or
/// a body that is not a JSON array all yield the built-in list.
pub async fn fetch_testimonials(client: &reqwest::Client, source: Option<&str>) -> Vec<Testimonial> {
    let Some(url) = source.filter(|url| !url.trim().is_empty()) else {
        info!("Using built-in testimonials (no source configured)");
        return builtin();
    };

    match fetch_remote(client, url).await {
        Ok(testimonials) => {
            info!("Loaded {} testimonials from {}", testimonials.len(), url);
            testimonials
        }
        Err(e) => {
            warn!("Error fetching testimonials, using built-in list: {:#}", e);
            builtin()
        }
    }
}

async fn fetch_remote(client: &reqwest::Client, url: &str) -> Result<Vec<Testimonial>> {
    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to send request to testimonial source")?;

    if !response.status().is_success() {
        bail!("Testimonial source error ({})", response.status());
    }

    let body: Value = response
        .json()
        .await
        .context("Failed to parse testimonial source response")?;

    let Value::Array(items) = body else {
        bail!("Testimonial source did not return a JSON array");
    };

    Ok(parse_items(items))
}

/// Keep the items that deserialize and validate; log and drop the rest.
fn parse_items(items: Vec<Value>) -> Vec<Testimonial> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Testimonial>(item.clone()) {
            Ok(testimonial) if testimonial.is_valid() => Some(testimonial),
            Ok(testimonial) => {
                warn!(
                    "Invalid testimonial {}: {}",
                    testimonial.id,
                    testimonial.problems().join(", ")
                );
                None
            }
            Err(e) => {
                warn!("Invalid testimonial data {}: {}", item, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn valid_item(id: &str) -> Value {
        json!({
            "id": id,
            "name": "Rosa Gil",
            "role": "Residente",
            "year": "2024",
            "content": "Me siento como en casa desde el primer día.",
            "image": "https://example.com/rosa.jpg"
        })
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_builtin_entries_are_valid() {
        let entries = builtin();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(Testimonial::is_valid));
    }

    #[test]
    fn test_problems_reported() {
        let testimonial = Testimonial {
            id: "9".to_string(),
            name: String::new(),
            role: String::new(),
            year: "2020".to_string(),
            content: "short".to_string(),
            image: "not a url".to_string(),
        };
        assert_eq!(testimonial.problems().len(), 4);
    }

    #[test]
    fn test_parse_items_drops_invalid_individually() {
        let items = vec![
            valid_item("1"),
            json!({"id": "2", "name": "Sin imagen"}),
            json!({
                "id": "3", "name": "Luis", "role": "Residente", "year": 2020,
                "content": "El año no es texto.", "image": "https://example.com/l.jpg"
            }),
            json!({
                "id": "4", "name": "Eva", "role": "Hija", "year": "2023",
                "content": "corto", "image": "https://example.com/e.jpg"
            }),
            valid_item("5"),
        ];

        let parsed = parse_items(items);
        let ids: Vec<&str> = parsed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    // ==================== Localization Tests ====================

    #[test]
    fn test_localized_builtin() {
        let table = TranslationTable::builtin();
        let margaret = &builtin()[0];

        let english = margaret.localized(&table, Language::English);
        assert_eq!(english.name, "Margaret Thompson");
        assert_eq!(english.role, "Resident's daughter");
        assert_eq!(english.year, "2021");

        let spanish = margaret.localized(&table, Language::Spanish);
        assert_eq!(spanish.name, "Margarita Torres");
    }

    #[test]
    fn test_localized_leaves_plain_text() {
        let table = TranslationTable::builtin();
        let testimonial: Testimonial = serde_json::from_value(valid_item("1")).unwrap();
        assert_eq!(testimonial.localized(&table, Language::French), testimonial);
    }

    // ==================== fetch_testimonials Tests ====================

    #[tokio::test]
    async fn test_fetch_without_source_uses_builtin() {
        let client = reqwest::Client::new();
        assert_eq!(fetch_testimonials(&client, None).await, builtin());
        assert_eq!(fetch_testimonials(&client, Some("")).await, builtin());
    }

    #[tokio::test]
    async fn test_fetch_remote_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/testimonials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                valid_item("a"),
                {"id": "b"},
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/testimonials", mock_server.uri());
        let testimonials = fetch_testimonials(&reqwest::Client::new(), Some(&url)).await;

        assert_eq!(testimonials.len(), 1);
        assert_eq!(testimonials[0].id, "a");
    }

    #[tokio::test]
    async fn test_fetch_server_error_uses_builtin() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let testimonials = fetch_testimonials(&reqwest::Client::new(), Some(&mock_server.uri())).await;
        assert_eq!(testimonials, builtin());
    }

    #[tokio::test]
    async fn test_fetch_non_array_uses_builtin() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "quota"})))
            .mount(&mock_server)
            .await;

        let testimonials = fetch_testimonials(&reqwest::Client::new(), Some(&mock_server.uri())).await;
        assert_eq!(testimonials, builtin());
    }
}
