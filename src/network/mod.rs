pub mod edge;
pub mod error;
pub mod network;
pub mod station;
pub mod vertex;
