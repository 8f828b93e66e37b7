//! Open knight's tours on the 8×8 board by depth-first backtracking with Warnsdorff move ordering.

pub mod chess;
pub mod config;
pub mod core;
pub mod report;
pub mod search;
pub mod topology;
pub mod validate;
