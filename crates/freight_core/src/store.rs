//! Data access with a degraded-mode fallback.
//!
//! UI callers read loads and trucks through [`RecordStore`]. The concrete
//! backend is external (a hosted data service); this module supplies the
//! policy around it: on a failed **or empty** read, substitute the full fixed
//! sample set and flag the store as degraded. Live rows and sample rows are
//! never mixed in one collection.

use std::sync::Mutex;

use tracing::warn;

use crate::domain::{Load, Truck};
use crate::error::StoreError;
use crate::samples;

/// Where a collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Backend,
    SampleFallback,
}

/// Store health as observed by the UI (drives the offline banner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataHealth {
    #[default]
    Live,
    Degraded,
}

/// A collection tagged with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub records: Vec<T>,
    pub source: DataSource,
}

/// Query-by-table reads against the backing data service.
pub trait RecordStore: Send + Sync {
    fn fetch_loads(&self) -> Result<Vec<Load>, StoreError>;
    fn fetch_trucks(&self) -> Result<Vec<Truck>, StoreError>;
}

/// Wraps a [`RecordStore`] with the fallback-to-sample-data policy.
///
/// Health is sticky per store instance: once any read degrades, the store
/// reports [`DataHealth::Degraded`] until a later read succeeds with data.
pub struct FallbackStore<S> {
    inner: S,
    health: Mutex<DataHealth>,
}

impl<S: RecordStore> FallbackStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            health: Mutex::new(DataHealth::Live),
        }
    }

    pub fn health(&self) -> DataHealth {
        self.health
            .lock()
            .map(|h| *h)
            .unwrap_or(DataHealth::Degraded)
    }

    fn set_health(&self, health: DataHealth) {
        if let Ok(mut guard) = self.health.lock() {
            *guard = health;
        }
    }

    fn resolve<T>(
        &self,
        table: &'static str,
        result: Result<Vec<T>, StoreError>,
        fallback: fn() -> Vec<T>,
    ) -> Sourced<T> {
        match result {
            Ok(records) if !records.is_empty() => {
                self.set_health(DataHealth::Live);
                Sourced {
                    records,
                    source: DataSource::Backend,
                }
            }
            Ok(_) => {
                warn!(table, "backend returned no rows, serving sample data");
                self.set_health(DataHealth::Degraded);
                Sourced {
                    records: fallback(),
                    source: DataSource::SampleFallback,
                }
            }
            Err(err) => {
                warn!(table, %err, "backend read failed, serving sample data");
                self.set_health(DataHealth::Degraded);
                Sourced {
                    records: fallback(),
                    source: DataSource::SampleFallback,
                }
            }
        }
    }

    /// All loads, falling back to the sample set on failure or empty result.
    pub fn loads(&self) -> Sourced<Load> {
        self.resolve("loads", self.inner.fetch_loads(), samples::sample_loads)
    }

    /// All trucks, falling back to the sample set on failure or empty result.
    pub fn trucks(&self) -> Sourced<Truck> {
        self.resolve("trucks", self.inner.fetch_trucks(), samples::sample_trucks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticStore {
        loads: Result<Vec<Load>, StoreError>,
        trucks: Result<Vec<Truck>, StoreError>,
    }

    impl RecordStore for StaticStore {
        fn fetch_loads(&self) -> Result<Vec<Load>, StoreError> {
            match &self.loads {
                Ok(records) => Ok(records.clone()),
                Err(StoreError::Unavailable(msg)) => Err(StoreError::Unavailable(msg.clone())),
                Err(StoreError::Backend(msg)) => Err(StoreError::Backend(msg.clone())),
            }
        }

        fn fetch_trucks(&self) -> Result<Vec<Truck>, StoreError> {
            match &self.trucks {
                Ok(records) => Ok(records.clone()),
                Err(StoreError::Unavailable(msg)) => Err(StoreError::Unavailable(msg.clone())),
                Err(StoreError::Backend(msg)) => Err(StoreError::Backend(msg.clone())),
            }
        }
    }

    #[test]
    fn healthy_backend_serves_live_rows() {
        let store = FallbackStore::new(StaticStore {
            loads: Ok(samples::sample_loads()),
            trucks: Ok(samples::sample_trucks()),
        });

        let loads = store.loads();
        assert_eq!(loads.source, DataSource::Backend);
        assert_eq!(store.health(), DataHealth::Live);
    }

    #[test]
    fn failed_read_substitutes_full_sample_set_and_degrades() {
        let store = FallbackStore::new(StaticStore {
            loads: Err(StoreError::Unavailable("connection refused".into())),
            trucks: Ok(samples::sample_trucks()),
        });

        let loads = store.loads();
        assert_eq!(loads.source, DataSource::SampleFallback);
        assert_eq!(loads.records, samples::sample_loads(), "all-or-nothing");
        assert_eq!(store.health(), DataHealth::Degraded);
    }

    #[test]
    fn empty_result_also_degrades() {
        let store = FallbackStore::new(StaticStore {
            loads: Ok(Vec::new()),
            trucks: Ok(Vec::new()),
        });

        let trucks = store.trucks();
        assert_eq!(trucks.source, DataSource::SampleFallback);
        assert!(!trucks.records.is_empty());
        assert_eq!(store.health(), DataHealth::Degraded);
    }

    #[test]
    fn health_recovers_after_a_good_read() {
        let store = FallbackStore::new(StaticStore {
            loads: Err(StoreError::Backend("timeout".into())),
            trucks: Ok(samples::sample_trucks()),
        });

        store.loads();
        assert_eq!(store.health(), DataHealth::Degraded);
        store.trucks();
        assert_eq!(store.health(), DataHealth::Live);
    }
}
