use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zhtw_locale_cli::{ConvertOptions, load_config, run_convert_command, run_voice_command};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file; command-line options override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Add the traditional Chinese locale from the simplified Chinese tables.
    Convert {
        /// Directory holding the simplified Chinese tables
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Directory to write the traditional Chinese tables to
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Path of the locale manifest to write
        #[arg(long)]
        header: Option<PathBuf>,
        /// Rule directory, lowest priority first (repeatable)
        #[arg(long = "rules-dir")]
        rules_dirs: Vec<PathBuf>,
    },

    /// Switch the traditional Chinese voice assets.
    Voice {
        /// Target voice language: `en` or `zh`
        lang: String,
        /// Table to patch
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = load_config(args.config.as_deref()).and_then(|config| match args.commands {
        Commands::Convert {
            input,
            output,
            header,
            rules_dirs,
        } => {
            let options = ConvertOptions {
                input,
                output,
                header,
                rules_dirs,
            };
            run_convert_command(&options.apply(config))
        }
        Commands::Voice { lang, file } => {
            let config = match file {
                Some(file) => config.with_patch_file(file),
                None => config,
            };
            run_voice_command(&config, &lang)
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
