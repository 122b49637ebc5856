//! sheetboard: a schema-tolerant ingestion and aggregation pipeline for
//! publicly shared spreadsheet dashboards.
//!
//! The pipeline is two pure steps: [`fetch::load`] resolves a sharing URL
//! to a CSV export, fetches it once, and returns a [`fetch::LoadOutcome`];
//! [`aggregate::aggregate`] turns a loaded table plus a declared
//! [`views::ViewSpec`] into an [`aggregate::AggregationResult`] that either
//! carries a summary table or names exactly which semantic columns the
//! current sheet revision is missing. Caching and periodic refresh belong
//! to whatever drives the render cycle, not to this crate.

pub mod aggregate;
pub mod config;
pub mod fetch;
pub mod render;
pub mod table;
pub mod views;
