pub mod analysis;
pub mod cli;
pub mod conf;
pub mod ingest;
pub mod logging;
