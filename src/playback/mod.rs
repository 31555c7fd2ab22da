mod navigator;

pub use navigator::{step, step_index, Direction};
