pub mod solved_ac;

pub use solved_ac::{SolvedAcClient, SolvedAcConfig};
