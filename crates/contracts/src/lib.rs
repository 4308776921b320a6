//! Shared data contracts for the tourism content admin console.
//!
//! Everything here is plain data and pure logic: record shapes for every
//! managed resource, their field schemas, form drafts, grouping helpers,
//! the API error taxonomy and the session gate. The `frontend` crate owns
//! all browser and network code.

pub mod domain;
pub mod shared;
pub mod system;
