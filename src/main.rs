use clap::Parser;
use downsort::cli::{Cli, prompt_for_folder, run_cli};
use downsort::output::OutputFormatter;

fn main() {
    let cli = Cli::parse();

    let dir_path = match cli.path {
        Some(path) => path,
        None => match prompt_for_folder() {
            Ok(path) => path,
            Err(e) => {
                OutputFormatter::error(&format!("Could not read folder path: {}", e));
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = run_cli(&dir_path) {
        OutputFormatter::error(&e.to_string());
        std::process::exit(1);
    }
}
