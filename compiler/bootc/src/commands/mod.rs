//! Command handlers for the `bootc` CLI.

mod explain;
mod generate;

pub use explain::explain_error;
pub use generate::{
    load_snapshot, parse_generate_options, run_generate, write_units, DriverError,
    GenerateOptions, GenerateReport,
};
