#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # rp-entities
//!
//! Reusable, agnostic domain entities for reviewpoints.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod id;
pub mod points;
pub mod restriction;
pub mod review;
pub mod review_token;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
