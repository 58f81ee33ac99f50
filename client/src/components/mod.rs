//! Presentational components shared by pages.

pub mod result_grid;
