pub mod cost;
pub mod search;
pub mod solver;
pub mod state;
