//! Response normalization, request shaping and the query catalog.
//!
//! The layer between the raw GraphQL wire format and the flat values the
//! SDK returns:
//!
//! - [`normalize`]: collapses the response envelope (`data`, `user`,
//!   `node`, `edges`, single-id wrappers) into plain nested values
//! - [`shape`]: builds variables payloads and resolves the `{ok, err}`
//!   mutation envelope
//! - [`queries`]: the static query/mutation document catalog

pub mod queries;
pub mod shape;

mod normalize;

pub use normalize::normalize;
pub use shape::{input_variables, node_variables, unwrap_payload};
