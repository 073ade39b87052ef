//! First-visit route auto-registration.
//!
//! Interactive hosts call [`auto_register_path`] once per navigation with
//! the path being displayed. The routine consults a persisted set of
//! already-registered paths and only talks to the API for paths it has not
//! seen before. Two invocations racing before the set is persisted may both
//! issue a registration call — tolerated, the server endpoint is idempotent
//! for the same path/domain pair, so no local lock is taken.

use tracing::{debug, error};

use crate::client::{RegisterDestination, RegisterOutcome};
use crate::config::RouteKind;
use crate::registry::MosaicHandle;
use crate::store::PathStore;

/// Storage key under which the registered-path set is persisted, as a JSON
/// array of path strings.
pub const REGISTERED_ROUTES_KEY: &str = "mosaic_registered_routes";

/// Register `current_path` as a destination unless it is already known.
///
/// No-op (with an explanatory message) when auto-detection is disabled or
/// no API key is configured. The path is added to the persisted set only
/// when the API reports success, so a failed registration is retried on the
/// next visit.
pub async fn auto_register_path(
    handle: &MosaicHandle,
    store: &dyn PathStore,
    current_path: &str,
    kind: RouteKind,
) -> RegisterOutcome {
    let config = handle.config();
    if !config.auto_detect_routes {
        return RegisterOutcome::rejected("route auto-detection disabled");
    }
    if config.api_key.is_none() {
        return RegisterOutcome::rejected("API key required");
    }

    let mut registered = load_registered(store);
    if registered.iter().any(|path| path == current_path) {
        debug!(path = current_path, "route already registered, skipping");
        return RegisterOutcome {
            success: true,
            message: Some("already registered".to_owned()),
        };
    }

    let outcome = handle
        .client()
        .register_destination(RegisterDestination::new(current_path).with_kind(kind))
        .await;

    if outcome.success {
        registered.push(current_path.to_owned());
        match serde_json::to_string(&registered) {
            Ok(raw) => {
                if let Err(err) = store.set(REGISTERED_ROUTES_KEY, &raw) {
                    // The registration itself went through; the next visit
                    // will just issue one redundant call.
                    error!(%err, "failed to persist registered routes");
                }
            }
            Err(err) => error!(%err, "failed to encode registered routes"),
        }
    }
    outcome
}

fn load_registered(store: &dyn PathStore) -> Vec<String> {
    // Missing or corrupt payloads are treated as an empty set.
    store
        .get(REGISTERED_ROUTES_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}
