pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod table;

use cli::output::Console;

pub fn run(cli_args: cli::Cli) -> i32 {
    logging::init_logging(cli_args.verbose);

    let config = cli_args.into_config();
    tracing::debug!(?config, "resolved configuration");

    app::run(&config, &mut Console::stdio());
    0
}
