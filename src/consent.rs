//! Cookie consent: the persisted flag, the decision signal and its manager.

use crate::storage::{PreferenceStore, CONSENT_KEY};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Persisted consent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentFlag {
    Unset,
    Granted,
    EssentialOnly,
}

impl ConsentFlag {
    /// Interpret a stored value. Anything but `"true"` / `"essential"` is undecided.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => ConsentFlag::Granted,
            Some("essential") => ConsentFlag::EssentialOnly,
            _ => ConsentFlag::Unset,
        }
    }

    /// Value written to the store, `None` for `Unset`.
    pub fn stored_value(&self) -> Option<&'static str> {
        match self {
            ConsentFlag::Unset => None,
            ConsentFlag::Granted => Some("true"),
            ConsentFlag::EssentialOnly => Some("essential"),
        }
    }
}

/// Payload of the consent signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentDecision {
    Granted,
    Denied,
}

impl ConsentDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentDecision::Granted => "granted",
            ConsentDecision::Denied => "denied",
        }
    }
}

pub trait ConsentListener: Send + Sync {
    fn on_consent(&self, decision: ConsentDecision);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Publish/subscribe hub for consent decisions, one per session.
#[derive(Default)]
pub struct ConsentSignal {
    listeners: Mutex<Vec<(SubscriptionId, Arc<dyn ConsentListener>)>>,
    next_id: AtomicU64,
}

impl ConsentSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: Arc<dyn ConsentListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, listener));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    /// Deliver `decision` to every current subscriber.
    pub fn publish(&self, decision: ConsentDecision) {
        // Listeners run outside the lock so they may subscribe or unsubscribe.
        let listeners: Vec<Arc<dyn ConsentListener>> =
            self.lock().iter().map(|(_, l)| Arc::clone(l)).collect();

        debug!(
            "Publishing consent '{}' to {} listener(s)",
            decision.as_str(),
            listeners.len()
        );
        for listener in listeners {
            listener.on_consent(decision);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, Arc<dyn ConsentListener>)>> {
        match self.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Reads and records the visitor's consent decision.
pub struct ConsentManager {
    store: Arc<dyn PreferenceStore>,
    signal: Arc<ConsentSignal>,
}

impl ConsentManager {
    pub fn new(store: Arc<dyn PreferenceStore>, signal: Arc<ConsentSignal>) -> Self {
        Self { store, signal }
    }

    /// Current flag. A failing store reads as `Unset`.
    pub fn flag(&self) -> ConsentFlag {
        match self.store.read(CONSENT_KEY) {
            Ok(value) => ConsentFlag::from_stored(value.as_deref()),
            Err(e) => {
                warn!("Error reading consent from store: {}", e);
                ConsentFlag::Unset
            }
        }
    }

    /// Whether the consent banner must be shown.
    pub fn should_prompt(&self) -> bool {
        self.flag() == ConsentFlag::Unset
    }

    /// Visitor accepted all cookies.
    pub fn accept_all(&self) {
        self.record(ConsentFlag::Granted, ConsentDecision::Granted);
    }

    /// Visitor accepted essential cookies only.
    pub fn accept_essential(&self) {
        self.record(ConsentFlag::EssentialOnly, ConsentDecision::Denied);
    }

    pub fn signal(&self) -> &Arc<ConsentSignal> {
        &self.signal
    }

    fn record(&self, flag: ConsentFlag, decision: ConsentDecision) {
        if let Some(value) = flag.stored_value() {
            if let Err(e) = self.store.write(CONSENT_KEY, value) {
                warn!("Error saving consent to store: {}", e);
            }
        }
        info!("Cookie consent recorded: {:?}", flag);
        self.signal.publish(decision);
    }
}
