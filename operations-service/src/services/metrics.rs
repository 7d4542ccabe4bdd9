use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Safe to call more than once; only the
/// first call installs anything.
pub fn init_metrics() {
    METRICS_HANDLE.get_or_init(|| {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        if metrics::set_global_recorder(recorder).is_err() {
            tracing::warn!("A global metrics recorder was already installed");
        }
        handle
    });
}

/// Prometheus text exposition, or `None` before [`init_metrics`] has run.
pub fn get_metrics() -> Option<String> {
    METRICS_HANDLE.get().map(PrometheusHandle::render)
}

/// Count one finished operation. `outcome` is `success` or an error kind.
pub fn record_operation(endpoint: &'static str, outcome: &'static str) {
    counter!("operations_total", "endpoint" => endpoint, "outcome" => outcome).increment(1);
}
