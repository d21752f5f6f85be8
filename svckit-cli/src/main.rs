use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use svckit_cli::commands::generate::{self, GenerateOpts};
use svckit_cli::commands::routes::{self, RoutesOpts};
use svckit_cli::logging::{init_tracing, LogFormat};

#[derive(Parser)]
#[command(
    name = "svckit",
    version,
    about = "svckit: generate gRPC controller stubs from .proto services"
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create missing controller, module and handler files
    Generate {
        /// Project root containing go.mod (default: current directory)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Directory with <service>/<file>.proto definitions (default: ./api)
        #[arg(long)]
        api: Option<PathBuf>,
        /// Directory receiving one sub-directory per service (default: ./internal/controller)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Import path of the server package used by the generated modules
        #[arg(long = "server-pkg")]
        server_pkg: Option<String>,
    },
    /// List HTTP routes declared in .proto annotations
    Routes {
        /// Project root (default: current directory)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Directory with <service>/<file>.proto definitions (default: ./api)
        #[arg(long)]
        api: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);

    let result = match cli.command {
        Commands::Generate {
            root,
            api,
            output,
            server_pkg,
        } => generate::run(GenerateOpts {
            root,
            api,
            output,
            server_pkg,
        })
        .map(|_| ()),
        Commands::Routes { root, api } => routes::run(RoutesOpts { root, api }).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
