//! Core conversion logic: catalog, rate types, formatting and the controller

pub mod config;
pub mod controller;
pub mod currency;
pub mod format;
pub mod log;
pub mod rate;

// Re-export main types for cleaner imports
pub use controller::{ConversionController, ConversionState};
pub use currency::{Catalog, CurrencyRecord};
pub use format::{Decomposition, Summary, UnitRates, decompose, unit_rates};
pub use rate::{ConversionRequest, ConversionResult, RateError, RateProvider};
