use clap::Parser;

use bundlecloak::cli::{self, Cli, Commands};

fn main() {
    let args = Cli::parse();

    cli::context::init(args.config.as_deref());
    let scheme = args.scheme.as_deref();

    let result = match &args.command {
        Commands::Init => cli::commands::init::execute(),
        Commands::Encrypt { file, output } => {
            cli::commands::encrypt::execute(file, output.as_deref(), scheme)
        }
        Commands::Restore { file, output } => {
            cli::commands::restore::execute(file, output.as_deref(), scheme)
        }
        Commands::Urls { file_name } => cli::commands::urls::execute(file_name),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
