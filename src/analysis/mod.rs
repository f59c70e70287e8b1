pub mod inflow;
pub mod probe;
pub mod report;
pub mod resilience;
