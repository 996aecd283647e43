//! Per-design cache latency tables for the cache simulator.
//!
//! [`build_design_configs`] maps design names (`csm`, `csm_par`, `ator`,
//! `ator_par`, `ator_p`, `ator_<N>p`) to an L1D and an L2 [`LatencyProfile`].
//! L2 latencies are given per way: the first `fast_ways` ways are fast, the
//! rest are slow.

pub mod bucket;
pub mod design;
pub mod error;
pub mod priority;
pub mod profile;

pub use bucket::WaySplit;
pub use design::{build_design_configs, Design};
pub use error::{DesignError, Result, SUPPORTED_DESIGNS};
pub use priority::parse_priority;
pub use profile::{ConfigTable, DesignEntry, LatencyProfile};
