//! Split and join pipelines
//!
//! Each pipeline validates its request, performs the filesystem side
//! effects, and invokes the external tool through [`crate::exec`].

pub mod join;
pub mod split;

pub use join::JoinRequest;
pub use split::SplitRequest;
