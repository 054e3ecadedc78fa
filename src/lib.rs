//! Space travel simulator: approximate planet distances, AU conversion, travel times,
//! and transmission delays, driven by an interactive command loop.
//!
//! The arithmetic lives in the member crates so that other front-ends can reuse it;
//! this crate re-exports them and hosts the terminal session.

pub mod session;

pub use spacesim_config as config;
pub use spacesim_core as numeric;
pub use spacesim_navigation as navigation;
pub use spacesim_propulsion as propulsion;
