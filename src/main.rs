use std::path::PathBuf;

use clap::Parser;
use datamode::AppError;

#[derive(Parser)]
#[command(name = "datamode")]
#[command(version)]
#[command(
    about = "Print the datum of the data source selected by `project.mode`",
    long_about = None
)]
struct Cli {
    /// Path to the properties file (defaults to ./datamode.toml when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Property override of the form key=value (repeatable)
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    define: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<String, AppError> = datamode::fetch(cli.config.as_deref(), &cli.define);

    match result {
        Ok(datum) => println!("{}", datum),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
