//! Core module - generation primitives and run plumbing

pub mod calendar;
pub mod config;
pub mod dataset;
pub mod degrade;
pub mod failure;
pub mod renewal;
pub mod rng;

pub use calendar::CalendarError;
pub use config::Config;
pub use dataset::{DatasetOptions, HOURS_PER_MONTH};
pub use renewal::{RenewalOptions, RESET_PROBABILITY};
