pub mod cli;
pub mod fetch;
pub mod logging;
pub mod manifest;
