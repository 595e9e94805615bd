//! inistore CLI
//!
//! Command-line interface for querying and editing INI files.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use inistore::config::DEFAULT_MAX_INPUT_SIZE;
use inistore::{Config, Ini, IniError};
use tracing_subscriber::{fmt, EnvFilter};

/// inistore CLI
#[derive(Parser, Debug)]
#[command(name = "inistore")]
#[command(about = "Query and edit INI configuration files")]
#[command(version)]
struct Args {
    /// Largest file accepted, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_SIZE)]
    max_size: u64,

    /// INI file to operate on
    #[arg(short, long)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the value of a key
    Get {
        /// The key to look up
        key: String,

        /// Section of the key (omit for sectionless keys)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Print the comment attached to a key
    Comment {
        /// The key to look up
        key: String,

        /// Section of the key (omit for sectionless keys)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Set a key to a value (creates the file if needed)
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,

        /// Section of the key (omit for sectionless keys)
        #[arg(short, long)]
        section: Option<String>,

        /// Comment written above the key
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,

        /// Section of the key (omit for sectionless keys)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Delete a whole section
    DelSection {
        /// The section to delete
        section: String,
    },

    /// Print the file as rewritten by the serializer
    Dump,
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,inistore=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> inistore::Result<ExitCode> {
    let config = Config::builder().max_input_size(args.max_size).build()?;
    let file = args.file.as_path();

    match args.command {
        Commands::Get { key, section } => {
            let ini = Ini::read_file_with_config(file, config)?;
            Ok(print_found(ini.get(section.as_deref(), &key)))
        }
        Commands::Comment { key, section } => {
            let ini = Ini::read_file_with_config(file, config)?;
            Ok(print_found(ini.get_comment(section.as_deref(), &key)))
        }
        Commands::Set {
            key,
            value,
            section,
            comment,
        } => {
            let mut ini = open_or_empty(file, config)?;
            ini.set(section.as_deref(), &key, &value, comment.as_deref())?;
            ini.write_file(file)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Del { key, section } => {
            let mut ini = Ini::read_file_with_config(file, config)?;
            let removed = ini.delete_key(section.as_deref(), &key);
            ini.write_file(file)?;
            println!("{}", removed);
            Ok(ExitCode::SUCCESS)
        }
        Commands::DelSection { section } => {
            let mut ini = Ini::read_file_with_config(file, config)?;
            let removed = ini.delete_section(Some(section.as_str()));
            ini.write_file(file)?;
            println!("{}", removed);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Dump => {
            let ini = Ini::read_file_with_config(file, config)?;
            print!("{}", ini.to_ini_string()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Missing file is an empty document; every other error is reported
fn open_or_empty(file: &Path, config: Config) -> inistore::Result<Ini> {
    match Ini::read_file_with_config(file, config.clone()) {
        Err(IniError::NotFound { .. }) => {
            tracing::info!("{} does not exist, starting empty", file.display());
            Ok(Ini::with_config(config))
        }
        other => other,
    }
}

fn print_found(found: Option<&str>) -> ExitCode {
    match found {
        Some(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}
