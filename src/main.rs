use crate::cli::run;

pub mod cli;
mod config;
pub mod domain;
pub mod ingest;
pub mod report;

fn main() {
    run();
}
