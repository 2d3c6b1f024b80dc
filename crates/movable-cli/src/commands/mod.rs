pub mod config;
pub mod geometry;
pub mod reorder;
pub mod run;
