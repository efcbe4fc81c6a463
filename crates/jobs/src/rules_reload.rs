use ferrous_cname_application::ports::CnameRuleSource;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

const DEFAULT_RELOAD_INTERVAL_SECS: u64 = 30;

/// Re-reads the CNAME rules file on a fixed interval.
pub struct RulesReloadJob {
    source: Arc<dyn CnameRuleSource>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl RulesReloadJob {
    pub fn new(source: Arc<dyn CnameRuleSource>) -> Self {
        Self {
            source,
            interval_secs: DEFAULT_RELOAD_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        if self.interval_secs == 0 {
            info!("RulesReloadJob: interval is 0, periodic reload disabled");
            return;
        }

        info!(interval_secs = self.interval_secs, "Starting CNAME rules reload job");

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        // The rules were loaded at startup; skip the immediate tick.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("RulesReloadJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    match self.source.reload().await {
                        Ok(outcome) if outcome.enabled => {
                            info!(
                                rules = outcome.rules,
                                rejected = outcome.rejected,
                                "CNAME rules reloaded"
                            );
                        }
                        Ok(_) => {
                            warn!("CNAME rules reloaded, injection disabled by rules file");
                        }
                        Err(e) => {
                            error!(error = %e, "CNAME rules reload failed");
                        }
                    }
                }
            }
        }
    }
}
