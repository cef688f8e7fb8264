#![warn(missing_docs)]
//! Models and ports for seller performance analysis.
//!
//! This crate defines the data a sales analysis consumes and produces, along
//! with the strategy traits through which callers inject their own pricing
//! and bonus policies. It contains no analysis logic itself; see the
//! `sales-analysis` crate for the pipeline.

/// Core domain models for seller performance analysis.
///
/// This module contains the reference entities (sellers, products, customers),
/// the two accepted input shapes (the four-array dataset and the flat sale
/// array), the per-seller accumulator, and the output report.
///
/// The models in this module are primarily data structures with minimal business logic,
/// keeping the entities separate from the pipeline that processes them.
pub mod models;

/// Strategy traits for seller performance analysis.
///
/// These traits are the "ports" through which a caller supplies the revenue
/// and bonus formulas. The pipeline depends only on these contracts, never on
/// a concrete formula, so arbitrary policies can be plugged in without
/// touching the aggregation or ranking logic.
pub mod ports;
