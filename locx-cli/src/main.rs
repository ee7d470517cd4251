use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use locx_diagnostics::{DiagnosticEngine, RuleErrorConsumer};
use locx_expander::LocationExpander;
use locx_lexer::Lexer;
use std::io::BufRead;
use std::path::{Path, PathBuf};

mod config;

use config::{Config, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "locx")]
#[command(version)]
#[command(about = "Expand $(name arg) placeholders in build-rule attribute values", long_about = None)]
struct Cli {
    /// Function table (default: nearest locx.json)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Define an expansion function, `{}` is replaced by the argument
    #[arg(short = 'D', long = "define", global = true, value_name = "NAME=TEMPLATE")]
    defines: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand placeholders in each TEXT, or in each line of a file or stdin
    Expand {
        #[arg(value_name = "TEXT")]
        texts: Vec<String>,

        /// Read values line by line from FILE
        #[arg(short, long, value_name = "FILE", conflicts_with = "texts")]
        file: Option<PathBuf>,

        /// Report problems against this attribute name
        #[arg(short, long, value_name = "NAME")]
        attr: Option<String>,

        /// Output diagnostics as JSON (for IDE integration)
        #[arg(long)]
        json: bool,
    },

    /// List the placeholders found in TEXT
    Placeholders {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Dump lexer tokens for TEXT
    Tokens {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Write an example locx.json
    Init {
        /// Directory to write into (default: current directory)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Expand {
            texts,
            file,
            attr,
            json,
        } => {
            let config = load_config(cli.config.as_deref(), &cli.defines)?;
            let inputs = read_inputs(texts, file.as_deref())?;
            log::info!(
                "Expanding {} value(s) with functions {:?}",
                inputs.len(),
                config.functions.keys().collect::<Vec<_>>()
            );

            let mut engine = DiagnosticEngine::new();
            let mut expander = LocationExpander::new(&mut engine, config.registry());

            for input in &inputs {
                let expanded = match &attr {
                    Some(attr) => expander.expand_attribute(attr, input),
                    None => expander.expand(input),
                };
                println!("{}", expanded);
            }

            if json {
                eprintln!("{}", engine.to_json()?);
            } else {
                engine.print_all();
                engine.print_summary();
            }

            if engine.has_errors() {
                anyhow::bail!("Expansion failed with {} error(s)", engine.error_count());
            }
            Ok(())
        }

        Commands::Placeholders { text } => {
            let found = locx_expander::placeholders(&text)?;
            for placeholder in found {
                println!(
                    "{}..{}\t{}\t{}",
                    placeholder.span.start, placeholder.span.end, placeholder.name, placeholder.arg
                );
            }
            Ok(())
        }

        Commands::Tokens { text } => {
            for (count, result) in Lexer::new(&text).enumerate() {
                match result {
                    Ok(token_span) => println!(
                        "Token {}: {:?} at {:?} '{}'",
                        count + 1,
                        token_span.token,
                        token_span.span,
                        token_span.text(&text)
                    ),
                    Err(e) => println!("Error: {}", e),
                }
            }
            Ok(())
        }

        Commands::Init { path } => {
            let dir = path.unwrap_or_else(|| PathBuf::from("."));
            let target = dir.join(CONFIG_FILE);
            if target.exists() {
                anyhow::bail!("{} already exists", target.display());
            }
            Config::example()
                .save(&target)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            println!("Created {}", target.display());
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>, defines: &[String]) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::from_dir(std::env::current_dir()?)?,
    };
    for definition in defines {
        config.define(definition)?;
    }
    Ok(config)
}

fn read_inputs(texts: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    if !texts.is_empty() {
        return Ok(texts);
    }

    match file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(content.lines().map(str::to_string).collect())
        }
        None => std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .context("Failed to read stdin"),
    }
}
