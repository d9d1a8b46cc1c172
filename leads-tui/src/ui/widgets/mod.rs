//! Chart widgets rendered straight into the buffer.

pub mod donut;
pub mod funnel_bar;

pub use donut::Donut;
pub use funnel_bar::FunnelBar;
