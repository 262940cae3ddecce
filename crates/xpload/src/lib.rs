//! Command line front end for the conditions catalog.

pub mod cli;
pub mod logging;
