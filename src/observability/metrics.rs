use prometheus::{
    Encoder, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub suite_runs_total: IntCounter,
    pub scenario_validations_total: IntCounterVec,
    pub webhook_request_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let suite_runs_total =
            IntCounter::new("suite_runs_total", "Total validation suite runs")
                .expect("valid suite_runs_total metric");

        let scenario_validations_total = IntCounterVec::new(
            Opts::new(
                "scenario_validations_total",
                "Scenario validations by outcome",
            ),
            &["outcome"],
        )
        .expect("valid scenario_validations_total metric");

        let webhook_request_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "webhook_request_seconds",
                "Latency of outbound webhook calls in seconds",
            ),
            &["outcome"],
        )
        .expect("valid webhook_request_seconds metric");

        registry
            .register(Box::new(suite_runs_total.clone()))
            .expect("register suite_runs_total");
        registry
            .register(Box::new(scenario_validations_total.clone()))
            .expect("register scenario_validations_total");
        registry
            .register(Box::new(webhook_request_seconds.clone()))
            .expect("register webhook_request_seconds");

        Self {
            registry,
            suite_runs_total,
            scenario_validations_total,
            webhook_request_seconds,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
