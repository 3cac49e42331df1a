//! Per-call context types.
//!
//! The tenant id and active profile names travel with the call as an explicit
//! value instead of living in thread-local state.

pub mod request;

pub use request::{parse_profile_names, RequestContext};
