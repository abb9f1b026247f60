//! Constant step data for every walkthrough in the gallery

pub mod algorithms;
pub mod flows;
pub mod memory;
pub mod transactions;
