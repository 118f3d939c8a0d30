pub mod df;
pub mod runner;
