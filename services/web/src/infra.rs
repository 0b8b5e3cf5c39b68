use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use vrn::registry::{CatalogError, ProviderCatalog};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the configured CSV catalog, or the built-in listings when none is set.
pub(crate) fn load_catalog(source: Option<&Path>) -> Result<ProviderCatalog, CatalogError> {
    match source {
        Some(path) => {
            let catalog = ProviderCatalog::from_path(path)?;
            info!(path = %path.display(), providers = catalog.len(), "provider catalog loaded");
            Ok(catalog)
        }
        None => Ok(ProviderCatalog::seed()),
    }
}
