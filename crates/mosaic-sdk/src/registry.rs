//! Per-context client registry.
//!
//! Holds at most one live client/config pair for an execution context.
//! There is deliberately no process-wide implicit global: the host's
//! composition root owns a registry per context (server-side request
//! handling and interactive rendering each get their own, and the two share
//! nothing). `new` is const, so a `static MOSAIC: MosaicRegistry =
//! MosaicRegistry::new();` works where a default-accessible instance is
//! wanted — it still must be configured before use.

use std::sync::{Arc, RwLock};

use tracing::{error, warn};

use crate::client::{MosaicClient, RegisterDestination, RegisterOutcome};
use crate::config::{MosaicConfig, PartialConfig, RouteDefinition};
use crate::error::MosaicError;

struct Configured {
    client: MosaicClient,
    config: MosaicConfig,
}

/// Registry owning the configured client for one execution context.
#[derive(Default)]
pub struct MosaicRegistry {
    inner: RwLock<Option<Arc<Configured>>>,
}

impl MosaicRegistry {
    pub const fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Build the full configuration, replace any previously held pair, and
    /// return a handle over the new one.
    ///
    /// Replacement is total — nothing from a prior `configure` call is
    /// merged. When explicit routes are supplied alongside an API key, each
    /// is eagerly registered fire-and-forget on the current async runtime;
    /// registration failures are logged, never surfaced. Concurrent readers
    /// holding a handle from before keep the old pair (last configure wins
    /// silently for everyone asking afterwards).
    pub fn configure(&self, partial: PartialConfig) -> MosaicHandle {
        self.configure_with_origin(partial, None)
    }

    /// Like [`configure`](Self::configure), with an ambient origin backing
    /// the `site.domain` default for interactive hosts.
    pub fn configure_with_origin(
        &self,
        partial: PartialConfig,
        origin: Option<&str>,
    ) -> MosaicHandle {
        let config = MosaicConfig::build_with_origin(partial, origin);
        let client = MosaicClient::new(&config);
        let pair = Arc::new(Configured { client, config });

        *self.inner.write().expect("registry lock poisoned") = Some(pair.clone());

        if !pair.config.routes.is_empty() && pair.config.api_key.is_some() {
            match tokio::runtime::Handle::try_current() {
                Ok(runtime) => {
                    for route in pair.config.routes.clone() {
                        let client = pair.client.clone();
                        runtime.spawn(async move {
                            let outcome = client.register_destination(destination(&route)).await;
                            if !outcome.success {
                                error!(
                                    path = %route.path_pattern,
                                    message = outcome.message.as_deref().unwrap_or(""),
                                    "eager route registration failed"
                                );
                            }
                        });
                    }
                }
                Err(_) => {
                    warn!("no async runtime available, skipping eager route registration");
                }
            }
        }

        MosaicHandle { inner: pair }
    }

    /// Handle over the configured pair.
    ///
    /// Fails with [`MosaicError::NotConfigured`] before the first
    /// `configure` call — a call-order bug on the host's side, not a
    /// runtime condition to recover from.
    pub fn handle(&self) -> Result<MosaicHandle, MosaicError> {
        self.inner
            .read()
            .expect("registry lock poisoned")
            .as_ref()
            .map(|pair| MosaicHandle {
                inner: pair.clone(),
            })
            .ok_or(MosaicError::NotConfigured)
    }

    pub fn client(&self) -> Result<MosaicClient, MosaicError> {
        Ok(self.handle()?.client().clone())
    }

    pub fn config(&self) -> Result<MosaicConfig, MosaicError> {
        Ok(self.handle()?.config().clone())
    }
}

/// Accessors over the client/config pair captured at configure time.
///
/// Cloning is cheap; a handle keeps its pair alive even across a later
/// reconfigure of the registry it came from.
#[derive(Clone)]
pub struct MosaicHandle {
    inner: Arc<Configured>,
}

impl MosaicHandle {
    pub fn client(&self) -> &MosaicClient {
        &self.inner.client
    }

    pub fn config(&self) -> &MosaicConfig {
        &self.inner.config
    }

    /// Register one route as a destination through the captured client.
    pub async fn register_route(&self, route: &RouteDefinition) -> RegisterOutcome {
        self.inner.client.register_destination(destination(route)).await
    }
}

fn destination(route: &RouteDefinition) -> RegisterDestination {
    RegisterDestination {
        path: route.path_pattern.clone(),
        kind: route.kind,
        name: route.display_name.clone(),
    }
}
