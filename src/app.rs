use std::io::Write;

use crate::cli::output::Console;
use crate::config::RunConfig;
use crate::storage::{SaveFile, SaveOptions};
use crate::table;

pub const START_MESSAGE: &str = "Server running...";
pub const SUCCESS_MESSAGE: &str = "File Created!!";
pub const FAILURE_MESSAGE: &str = "File not created!";

/// Generate the table for `config`, optionally echo it, and save it.
pub fn run<O: Write, E: Write>(config: &RunConfig, console: &mut Console<O, E>) {
    console.log(START_MESSAGE);

    let table = table::generate(config.base, config.limit);
    tracing::debug!(
        base = config.base,
        limit = config.limit,
        rows = table::row_count(config.limit),
        "table generated"
    );

    if config.show_table {
        console.log(&table);
    }

    let options = SaveOptions::new(table)
        .destination(&config.file_destination)
        .name(&config.file_name);

    if SaveFile::new().execute(&options) {
        console.log(SUCCESS_MESSAGE);
    } else {
        console.error(FAILURE_MESSAGE);
    }
}
