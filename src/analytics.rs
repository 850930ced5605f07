//! Consent-gated loading of the analytics script.

use crate::consent::{ConsentDecision, ConsentFlag, ConsentListener};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Presence marker of the injected analytics script.
pub const ANALYTICS_SCRIPT_ID: &str = "ga-script";

const GTAG_BASE_URL: &str = "https://www.googletagmanager.com/gtag/js";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptTag {
    pub id: String,
    pub src: String,
    #[serde(rename = "async")]
    pub is_async: bool,
}

/// A document head that scripts can be injected into.
pub trait ScriptHost: Send + Sync {
    fn has_script(&self, id: &str) -> bool;

    /// Insert `tag` unless a script with the same id exists. Returns whether it was inserted.
    fn insert_script(&self, tag: ScriptTag) -> bool;

    fn push_data_layer(&self, entry: Value);
}

/// In-memory document head, returned to the page as JSON by the server.
#[derive(Debug, Default)]
pub struct HeadDocument {
    scripts: Mutex<Vec<ScriptTag>>,
    data_layer: Mutex<Vec<Value>>,
}

impl HeadDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripts(&self) -> Vec<ScriptTag> {
        lock(&self.scripts).clone()
    }

    pub fn data_layer(&self) -> Vec<Value> {
        lock(&self.data_layer).clone()
    }
}

impl ScriptHost for HeadDocument {
    fn has_script(&self, id: &str) -> bool {
        lock(&self.scripts).iter().any(|tag| tag.id == id)
    }

    fn insert_script(&self, tag: ScriptTag) -> bool {
        let mut scripts = lock(&self.scripts);
        if scripts.iter().any(|existing| existing.id == tag.id) {
            return false;
        }
        scripts.push(tag);
        true
    }

    fn push_data_layer(&self, entry: Value) {
        lock(&self.data_layer).push(entry);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Injects the analytics script once consent is granted.
///
/// Loads immediately from [`AnalyticsLoader::init`] when the persisted flag
/// is already `Granted`; otherwise waits for a `Granted` consent signal.
/// Repeated loads are no-ops while the script marker is present.
pub struct AnalyticsLoader {
    host: Arc<dyn ScriptHost>,
    measurement_id: String,
}

impl AnalyticsLoader {
    pub fn new(host: Arc<dyn ScriptHost>, measurement_id: impl Into<String>) -> Self {
        Self {
            host,
            measurement_id: measurement_id.into(),
        }
    }

    /// Check the persisted consent flag at session start.
    pub fn init(&self, flag: ConsentFlag) {
        if flag == ConsentFlag::Granted {
            self.load();
        }
    }

    /// Inject the script. Returns `false` if it was already present.
    pub fn load(&self) -> bool {
        let tag = ScriptTag {
            id: ANALYTICS_SCRIPT_ID.to_string(),
            src: self.script_url(),
            is_async: true,
        };

        if !self.host.insert_script(tag) {
            debug!("Analytics script already present, skipping");
            return false;
        }

        self.host.push_data_layer(json!(["js", Utc::now().to_rfc3339()]));
        self.host.push_data_layer(json!(["config", self.measurement_id]));
        info!("Analytics script loaded ({})", self.measurement_id);
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.host.has_script(ANALYTICS_SCRIPT_ID)
    }

    pub fn script_url(&self) -> String {
        format!("{}?id={}", GTAG_BASE_URL, self.measurement_id)
    }
}

impl ConsentListener for AnalyticsLoader {
    fn on_consent(&self, decision: ConsentDecision) {
        if decision == ConsentDecision::Granted {
            self.load();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::ConsentSignal;

    fn loader() -> (AnalyticsLoader, Arc<HeadDocument>) {
        let head = Arc::new(HeadDocument::new());
        (AnalyticsLoader::new(head.clone(), "G-TEST123"), head)
    }

    #[test]
    fn test_load_injects_script_and_data_layer() {
        let (loader, head) = loader();
        assert!(loader.load());

        let scripts = head.scripts();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].id, ANALYTICS_SCRIPT_ID);
        assert_eq!(
            scripts[0].src,
            "https://www.googletagmanager.com/gtag/js?id=G-TEST123"
        );
        assert!(scripts[0].is_async);

        let data_layer = head.data_layer();
        assert_eq!(data_layer.len(), 2);
        assert_eq!(data_layer[0][0], "js");
        assert_eq!(data_layer[1], json!(["config", "G-TEST123"]));
    }

    #[test]
    fn test_load_twice_injects_once() {
        let (loader, head) = loader();
        assert!(loader.load());
        assert!(!loader.load());
        assert_eq!(head.scripts().len(), 1);
        assert_eq!(head.data_layer().len(), 2);
    }

    #[test]
    fn test_init_loads_only_when_granted() {
        for (flag, expected) in [
            (ConsentFlag::Granted, true),
            (ConsentFlag::EssentialOnly, false),
            (ConsentFlag::Unset, false),
        ] {
            let (loader, _) = loader();
            loader.init(flag);
            assert_eq!(loader.is_loaded(), expected, "flag {:?}", flag);
        }
    }

    #[test]
    fn test_signal_granted_loads_once() {
        let (loader, head) = loader();
        let signal = ConsentSignal::new();
        signal.subscribe(Arc::new(loader));

        signal.publish(ConsentDecision::Granted);
        signal.publish(ConsentDecision::Granted);

        assert_eq!(head.scripts().len(), 1);
    }

    #[test]
    fn test_signal_denied_never_loads() {
        let (loader, head) = loader();
        let signal = ConsentSignal::new();
        signal.subscribe(Arc::new(loader));

        signal.publish(ConsentDecision::Denied);

        assert!(head.scripts().is_empty());
    }
}
