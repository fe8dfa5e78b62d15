use std::process::ExitCode;

use clap::Parser;
use convert_icon::convert::IconConverter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct CommandLine {
    /// Fail when the conversion tool cannot be launched or exits with an
    /// error, instead of assuming success
    #[clap(long, num_args = 0)]
    strict: bool,
}

pub fn main() -> ExitCode {
    let command_line = CommandLine::parse();

    // Configure logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match IconConverter::new(command_line.strict).and_then(|converter| converter.run()) {
        Ok(()) => {
            println!("Icons generated successfully!");
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("Error: {error}");
            if command_line.strict {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
