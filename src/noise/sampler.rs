//! Background worker that keeps drawing noise levels
//!
//! The worker owns its [`LevelSource`] and sends readings over a bounded
//! channel. Dropping the [`NoiseSampler`] stops and joins the thread.

use super::source::LevelSource;
use crate::error::{Result, SampleTaskError};
use crossbeam_channel::{bounded, select, Receiver, Sender, TrySendError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info};

/// Readings buffered while the UI is not polling
const READING_BUFFER: usize = 16;

/// One level drawn by the worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseReading {
    pub level: u8,
    /// 1-based draw counter of this sampler
    pub sequence: u64,
}

/// Handle to the running worker thread
pub struct NoiseSampler {
    readings_rx: Receiver<NoiseReading>,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl NoiseSampler {
    /// Start drawing from `source` every `cadence`. The first draw happens
    /// one cadence after the call.
    pub fn spawn(mut source: Box<dyn LevelSource>, cadence: Duration) -> Result<Self> {
        let (readings_tx, readings_rx) = bounded(READING_BUFFER);
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let handle = thread::Builder::new()
            .name("noise-sampler".to_string())
            .spawn(move || {
                debug!("Noise sampler started ({:?} cadence)", cadence);
                let mut sequence = 0u64;
                loop {
                    select! {
                        // a stop message or a dropped handle both end the loop
                        recv(stop_rx) -> _ => break,
                        default(cadence) => {
                            let level = source.next_level();
                            sequence += 1;
                            match readings_tx.try_send(NoiseReading { level, sequence }) {
                                Ok(()) => {}
                                Err(TrySendError::Full(_)) => {
                                    debug!("Noise reading {} dropped, buffer full", sequence);
                                }
                                Err(TrySendError::Disconnected(_)) => break,
                            }
                        }
                    }
                }
                debug!("Noise sampler stopped after {} draws", sequence);
            })
            .map_err(|e| SampleTaskError::SamplerError(e.to_string()))?;

        info!("Noise sampler running");
        Ok(Self {
            readings_rx,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Readings received since the last call, oldest first. Never blocks.
    pub fn drain(&self) -> Vec<NoiseReading> {
        self.readings_rx.try_iter().collect()
    }

    /// Whether the worker thread is still alive
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the worker and wait for it to exit
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("Noise sampler thread panicked");
            }
        }
    }
}

impl Drop for NoiseSampler {
    fn drop(&mut self) {
        self.stop();
    }
}
