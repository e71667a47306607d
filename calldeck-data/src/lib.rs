//! Shared data layer for the Calldeck voice-AI dashboard
//!
//! This crate provides the fixture store, domain types, remote response
//! shapes, the metrics reconciler, and the collection filter engine.
//! Used by calldeck-web (web dashboard).

pub mod filter;
pub mod fixtures;
pub mod metrics;
pub mod remote;
pub mod types;

pub use types::{
    ActionItem, ActionStatus, CallInteraction, Capability, DashboardMetrics, HourlyVolume,
    Outcome, PriceInterval, Priority, Sentiment, SentimentSlice,
};
