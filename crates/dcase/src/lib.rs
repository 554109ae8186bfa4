//! D-CASE - legal practice management dashboard.
//!
//! A Dioxus application over the `dcase-core` domain library. All state is
//! held in memory for the lifetime of the session, seeded from fixtures at
//! startup: there is no backend, no persistence, and nothing leaves the
//! device except user-triggered report downloads.
//!
//! # Architecture
//!
//! - **State**: one [`dcase_core::controller::ListController`] per entity
//!   kind, owned by the app root and provided through Dioxus context
//! - **Navigation**: a [`components::View`] enum routed by the app root,
//!   with a single-level back action for detail views
//! - **Export**: report rendering in `dcase-core`, delivered through the
//!   platform download bridge after a simulated processing delay
//!
//! # Platform Support
//!
//! - **Web (WASM)**: downloads via a Blob and a temporary anchor element
//! - **Desktop**: downloads land in the system temp directory

#![forbid(unsafe_code)]

pub mod components;
pub mod download;
pub mod platform;
pub mod utils;
