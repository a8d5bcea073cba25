//! This is the documentation for datebuilder-rs
//!
//! An ordered index of calendar dates mapped to payloads, with bulk insertion, deletion and
//! filtering by date range and weekday. See the [`scheduling`] module.
//!
//! The index has no internal synchronisation. All mutation goes through `&mut` access, so a
//! single owner mutates it at a time; share it across threads only behind a lock.


pub mod json;
pub mod scheduling;
