use moodcast_catalog::StateCatalog;
use moodcast_core::config::SimulatorConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::ws::publish::StatePublisher;

/// Drives the mood simulation: sleep a random interval, sample the catalog,
/// broadcast the drawn key, repeat.
pub struct Simulator {
    catalog: StateCatalog,
    publisher: StatePublisher,
    min_delay_ms: u64,
    max_delay_ms: u64,
}

impl Simulator {
    pub fn new(catalog: StateCatalog, publisher: StatePublisher, config: SimulatorConfig) -> Self {
        Self {
            catalog,
            publisher,
            min_delay_ms: config.min_delay_ms,
            max_delay_ms: config.max_delay_ms,
        }
    }

    /// Main loop. Runs until `shutdown` broadcasts `true`.
    ///
    /// The sleep is the only place shutdown is observed, so a broadcast in
    /// progress always completes. On the way out the baseline state is
    /// published once to settle connected clients.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut rng = StdRng::from_entropy();
        info!(
            min_delay_ms = self.min_delay_ms,
            max_delay_ms = self.max_delay_ms,
            "simulation loop started"
        );

        loop {
            let delay_ms = draw_delay_ms(&mut rng, self.min_delay_ms, self.max_delay_ms);
            debug!(delay_ms, "waiting before next state change");

            tokio::select! {
                _ = tokio::time::sleep(std::time::Duration::from_millis(delay_ms)) => {
                    let entry = self.catalog.sample(&mut rng);
                    info!(state = %entry.key, label = %entry.label, "state change");
                    self.publisher.publish(&entry.key);
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        let baseline = self.catalog.baseline();
        self.publisher.publish(&baseline.key);
        info!(state = %baseline.key, "simulation loop stopped");
    }
}

/// Uniform draw from the closed interval `[min_ms, max_ms]`.
fn draw_delay_ms<R: Rng>(rng: &mut R, min_ms: u64, max_ms: u64) -> u64 {
    rng.gen_range(min_ms..=max_ms)
}
