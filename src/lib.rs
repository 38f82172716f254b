//! Payment Analyzer
//!
//! This crate computes what a delivery driver should have been paid for each
//! day of a runsheet under a fixed rate and bonus table, compares it with
//! what was actually paid, groups the results into weeks, and checks them
//! against the payment rules.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
