//! Randovango Wizard Engine
//!
//! Platform-agnostic state for the Randovango trip-planning wizard: the
//! single-choice card groups, the services accumulator, the forecast panel
//! and the map marker bookkeeping. This crate has no DOM or browser
//! dependencies; the web front-end injects storage and map backends through
//! the traits defined here.

pub mod card;
pub mod city;
pub mod links;
pub mod map;
pub mod services;
pub mod store;
pub mod weather;
pub mod wizard;

// Re-export commonly used types
pub use card::{CardGroup, Choice, FollowUp, SelectOutcome};
pub use city::{CityChange, CityOption, CityRecord, CityStats, CitySummary};
pub use links::{POPUP_FEATURES, POPUP_TARGET, hiking_map_url, spot_map_url};
pub use map::{LatLon, MapAdapter, MapBackend, MapConfig};
pub use services::{SelectionKind, ServiceEntry, ServiceList};
pub use store::{MemoryStorage, Selection, SelectionKey, SelectionStore, StoreError};
pub use weather::{
    Advisory, CalendarNames, DayLabel, ForecastDay, Pictogram, WeatherCard, WeatherPanel,
    WeatherSeverity, advice_for, parse_forecast,
};
pub use wizard::{ServicesCopy, WizardState, WizardStep};

/// Trait for abstracting the key/value persistence behind the wizard.
/// Platform-specific implementations should provide this
pub trait SelectionStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

impl<T: SelectionStorage + ?Sized> SelectionStorage for &T {
    type Error = T::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }
}
