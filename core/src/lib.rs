//! rosterly-core — deterministic weekly shift generation.
//!
//! The assigner is a pure, in-memory computation: callers load the
//! roster and availability (usually through [`store::ScheduleStore`]),
//! invoke [`assigner::ShiftAssigner::generate`], and persist the
//! resulting assignments as a whole-week replacement. Concurrent runs
//! for the same week must be serialized by the caller — two
//! interleaved runs would both read stale assignment counts.

pub mod assigner;
pub mod availability;
pub mod config;
pub mod demand;
pub mod employee;
pub mod error;
pub mod rng;
pub mod roster;
pub mod store;
pub mod types;
