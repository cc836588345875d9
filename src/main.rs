use clap::Parser;

fn main() {
    let cli = multable::cli::Cli::parse();
    let exit_code = multable::run(cli);
    std::process::exit(exit_code);
}
