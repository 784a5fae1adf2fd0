pub mod global_min_cut;
pub mod max_flow;

pub use global_min_cut::{global_min_cut, GlobalMinCut};
pub use max_flow::{max_flow, MaxFlow};
