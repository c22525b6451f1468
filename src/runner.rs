//! The benchmark driver: the fixed lineup of client configurations and
//! the loop that times each one against the shared report.

use serde_json::Value;
use tracing::info;

use crate::adapters::{
    AttohttpcAdapter, CurlAdapter, HttpAdapter, IsahcAdapter, PooledReqwestAdapter,
    ReqwestAdapter, UreqAdapter,
};
use crate::config::{RunConfig, RATE_LIMIT_PATH};
use crate::error::BenchResult;
use crate::report::Report;

type AdapterFactory = Box<dyn FnOnce(&RunConfig) -> BenchResult<Box<dyn HttpAdapter>>>;

/// One labelled client configuration waiting to be constructed and timed.
pub struct BenchCase {
    label: &'static str,
    factory: AdapterFactory,
    construct_untimed: bool,
}

impl BenchCase {
    /// Case whose adapter is built inside the timed section, so its report
    /// line includes client construction cost.
    pub fn new<F>(label: &'static str, factory: F) -> Self
    where
        F: FnOnce(&RunConfig) -> BenchResult<Box<dyn HttpAdapter>> + 'static,
    {
        Self {
            label,
            factory: Box::new(factory),
            construct_untimed: false,
        }
    }

    /// Case whose adapter is built before the clock starts.
    pub fn with_untimed_construction<F>(label: &'static str, factory: F) -> Self
    where
        F: FnOnce(&RunConfig) -> BenchResult<Box<dyn HttpAdapter>> + 'static,
    {
        Self {
            label,
            factory: Box::new(factory),
            construct_untimed: true,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn constructs_untimed(&self) -> bool {
        self.construct_untimed
    }

    /// Build the adapter for this case, consuming it.
    pub fn build(self, config: &RunConfig) -> BenchResult<Box<dyn HttpAdapter>> {
        (self.factory)(config)
    }
}

/// The six configurations of a standard run, in report order.
pub fn standard_lineup() -> Vec<BenchCase> {
    vec![
        BenchCase::new("reqwest:", |cfg| {
            Ok(Box::new(ReqwestAdapter::new(&cfg.base_url, cfg.tls_verify)?))
        }),
        // The pooled case is the one adapter built before its clock
        // starts, so its line excludes construction cost while the other
        // five include it. Kept that way on purpose; see README.
        BenchCase::with_untimed_construction("reqwest_pooled:", |cfg| {
            Ok(Box::new(PooledReqwestAdapter::new(
                &cfg.base_url,
                cfg.tls_verify,
                cfg.pool_size,
            )?))
        }),
        BenchCase::new("curl:", |cfg| {
            Ok(Box::new(CurlAdapter::new(&cfg.base_url, cfg.tls_verify)?))
        }),
        BenchCase::new("ureq:", |cfg| {
            Ok(Box::new(UreqAdapter::new(&cfg.base_url, cfg.tls_verify)?))
        }),
        BenchCase::new("isahc:", |cfg| {
            Ok(Box::new(IsahcAdapter::new(&cfg.base_url, cfg.tls_verify)?))
        }),
        BenchCase::new("attohttpc:", |cfg| {
            Ok(Box::new(AttohttpcAdapter::new(
                &cfg.base_url,
                cfg.tls_verify,
            )?))
        }),
    ]
}

/// Serialize `params` and POST it to the rate-limit path once.
pub fn post_request(adapter: &mut dyn HttpAdapter, params: &Value) -> BenchResult<u16> {
    let body = serde_json::to_string(params)?;
    adapter.post(RATE_LIMIT_PATH, &body)
}

/// Run every case in order, appending one report line per finished pass.
///
/// The first error anywhere, in a constructor, a request, or the report
/// file itself, aborts the whole run. Lines already written stay on disk;
/// the failed pass gets none.
pub fn run(config: &RunConfig, report: &mut Report, cases: Vec<BenchCase>) -> BenchResult<()> {
    for case in cases {
        let label = case.label();
        info!(
            adapter = label,
            iterations = config.iterations,
            "benchmark pass starting"
        );

        if case.constructs_untimed() {
            let mut adapter = case.build(config)?;
            report.measure(label, || issue_all(adapter.as_mut(), config))?;
        } else {
            report.measure(label, || {
                let mut adapter = case.build(config)?;
                issue_all(adapter.as_mut(), config)
            })?;
        }

        info!(adapter = label, "benchmark pass finished");
    }
    Ok(())
}

fn issue_all(adapter: &mut dyn HttpAdapter, config: &RunConfig) -> BenchResult<()> {
    for _ in 0..config.iterations {
        post_request(adapter, &config.params)?;
    }
    Ok(())
}
