//! Interval-driven sample collection.

use crate::sampling::config::SamplerConfig;
use crate::sampling::series::{Sample, Series, TickRecord};
use crate::sensors::reader::SensorReader;
use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::time::{self, Interval};

/// Drives a sensor reader on a fixed schedule, producing a series.
///
/// Each of `count` ticks polls the reader once. Failed or empty polls are
/// logged and skipped; elapsed time still advances by the configured
/// interval, so the nominal schedule is preserved and the resulting series
/// may be shorter than `count`.
pub struct Sampler<R> {
    reader: R,
    config: SamplerConfig,
}

struct StreamState<R> {
    reader: R,
    interval: Interval,
    interval_secs: f64,
    count: u32,
    tick: u32,
    target: Option<String>,
}

impl<R: SensorReader + Send + 'static> Sampler<R> {
    /// Create a sampler over a reader and a run configuration.
    pub fn new(reader: R, config: SamplerConfig) -> Self {
        Self { reader, config }
    }

    /// Turn the sampler into a stream of successful samples.
    ///
    /// The first tick fires immediately at elapsed time zero; the stream
    /// ends after `count` ticks with no trailing sleep. If no target sensor
    /// is configured, the first key of the first non-empty reading is bound
    /// permanently and never re-evaluated.
    pub fn into_stream(self) -> BoxStream<'static, Sample> {
        let state = StreamState {
            reader: self.reader,
            interval: time::interval(self.config.interval),
            interval_secs: self.config.interval.as_secs_f64(),
            count: self.config.count,
            tick: 0,
            target: self.config.target,
        };

        let stream = stream::unfold(state, |mut state| async move {
            loop {
                if state.tick >= state.count {
                    return None;
                }

                state.interval.tick().await;
                let tick = state.tick;
                state.tick += 1;
                let elapsed = tick as f64 * state.interval_secs;

                let readings = match state.reader.read() {
                    Ok(readings) => readings,
                    Err(err) => {
                        tracing::warn!(
                            "tick {}: failed to read {}: {}",
                            tick + 1,
                            state.reader.source(),
                            err
                        );
                        continue;
                    }
                };

                if readings.is_empty() {
                    tracing::warn!(
                        "tick {}: no {} available, skipping",
                        tick + 1,
                        state.reader.source()
                    );
                    continue;
                }

                if state.target.is_none() {
                    state.target = readings.first().map(|(name, _)| {
                        tracing::info!("tracking first observed sensor: {}", name);
                        name.to_string()
                    });
                }
                let Some(target) = state.target.clone() else {
                    continue;
                };

                match readings.get(&target) {
                    Some(value) => {
                        tracing::debug!("tick {}: {}s {} = {}", tick + 1, elapsed, target, value);
                        return Some((Sample::new(elapsed, value), state));
                    }
                    None => {
                        tracing::warn!("tick {}: {} not found, skipping", tick + 1, target);
                        continue;
                    }
                }
            }
        });

        Box::pin(stream)
    }

    /// Run the full schedule and collect the successful samples.
    pub async fn collect(self) -> Series {
        self.into_stream().collect::<Vec<Sample>>().await.into()
    }

    /// Run the full schedule, recording the entire mapping per tick.
    ///
    /// Used by the recording mode that dumps every sensor instead of
    /// tracking one; failed and empty polls are skipped the same way.
    pub async fn collect_readings(mut self) -> Vec<TickRecord> {
        let mut interval = time::interval(self.config.interval);
        let interval_secs = self.config.interval.as_secs_f64();
        let mut records = Vec::new();

        for tick in 0..self.config.count {
            interval.tick().await;

            let readings = self.reader.read_soft();
            if readings.is_empty() {
                tracing::warn!(
                    "tick {}: no {} available, skipping",
                    tick + 1,
                    self.reader.source()
                );
                continue;
            }

            tracing::info!("tick {}: recorded {} readings", tick + 1, readings.len());
            records.push(TickRecord {
                elapsed: tick as f64 * interval_secs,
                readings,
            });
        }

        records
    }
}
