use axum::{routing::get, Router};
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::preferences::EventType;

pub const RECOMMENDATIONS_TOTAL: &str = "outfit_recommendations_total";
pub const REQUESTS_TOTAL: &str = "outfit_requests_total";

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Call once per process.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new().install_recorder()?;

        describe_counter!(
            RECOMMENDATIONS_TOTAL,
            "Outfits returned to callers, by event type"
        );
        describe_counter!(REQUESTS_TOTAL, "HTTP requests handled, by endpoint");

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// No-op until a recorder is installed, so library callers and tests pay nothing.
pub fn record_recommendations(event: EventType, returned: usize) {
    counter!(RECOMMENDATIONS_TOTAL, "event" => event.as_str()).increment(returned as u64);
}

pub fn record_request(endpoint: &'static str) {
    counter!(REQUESTS_TOTAL, "endpoint" => endpoint).increment(1);
}
