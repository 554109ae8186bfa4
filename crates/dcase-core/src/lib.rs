//! # D-CASE Core
//!
//! Platform-independent library for the D-CASE legal practice dashboard.
//!
//! This crate holds everything that does not depend on a UI framework: the
//! entity model, the in-memory stores, filtering, detail resolution, calendar
//! math, report aggregates, and export rendering. The Dioxus application in
//! the `dcase` crate is a thin view layer over these types.
//!
//! ## Modules
//!
//! - [`model`] - Flat entity records (clients, cases, attorneys, invoices,
//!   appointments, documents) and their creation drafts
//! - [`store`] - Generic in-memory [`store::EntityStore`] with validated
//!   create, merge update, and no-op remove
//! - [`filter`] - Pure, order-preserving search/facet filtering
//! - [`controller`] - [`controller::ListController`], the one list-screen
//!   pattern instantiated per entity kind
//! - [`resolve`] - Detail resolution with name-equality joins
//! - [`calendar`] - Month grid computation and exact-date appointment lookup
//! - [`reports`] - Report aggregates and billing summaries
//! - [`export`] - CSV / pdf-text / excel-text payload rendering
//! - [`fixtures`] - The seed dataset loaded at application start
//! - [`config`] - Named constants shared across the workspace
//! - [`error`] - Error types for store and export operations
//!
//! All state lives in one browser session. There is no persistence layer and
//! no cross-session synchronization; every store has exactly one writer.

#![forbid(unsafe_code)]

pub mod calendar;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod filter;
pub mod fixtures;
pub mod model;
pub mod reports;
pub mod resolve;
pub mod store;
