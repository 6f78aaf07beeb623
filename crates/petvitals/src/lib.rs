//! Top-level facade crate for petvitals.
//!
//! Re-exports the metrics engine and the gateway library so users can depend on a single crate.

pub mod core {
    pub use petvitals_core::*;
}

pub mod gateway {
    pub use petvitals_gateway::*;
}
