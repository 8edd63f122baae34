#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # pgps-entities
//!
//! Reusable, agnostic domain entities for pharmagps.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod diagnostic;
pub mod geo;
pub mod pharmacy;
pub mod resolved;
pub mod table;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
