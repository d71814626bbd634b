use std::env;
use std::process::ExitCode;

mod cli;
mod exits;
mod settings;
mod terminal;
mod tui;

use cli::{CliError, prompts, quiet};
use settings::Settings;

fn main() -> ExitCode {
    exits::install_handlers();

    env_logger::Builder::from_env(env_logger::Env::new().filter_or("GERASENHA_LOG", "warn"))
        .format_timestamp_secs()
        .init();

    let args: Vec<String> = env::args().collect();

    let result = match args.len() {
        1 if quiet::is_interactive() && quiet::stdout_is_terminal() => {
            tui::run(Settings::load_or_default())
        }
        _ => cli::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(e)) => e.exit(),
        Err(e) => {
            prompts::error(&e.to_string());
            e.exit_code()
        }
    }
}
