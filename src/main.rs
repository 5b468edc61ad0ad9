use clap::{Parser, Subcommand};
use ead_rio::{CompileOptions, LoaderConfig, compile_file, init_logger, render_component_styles};
use log::LevelFilter;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "rio-css")]
#[command(about = "Compiles EAD Rio component stylesheets")]
struct Cli {
    /// Write debug logs to this file.
    #[arg(long, global = true, value_name = "FILE")]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile one stylesheet to CSS.
    Compile {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Close unbalanced blocks instead of failing.
        #[arg(long)]
        auto_close: bool,
    },
    /// Print the inline style block for a set of theme components.
    Components {
        theme_root: PathBuf,
        #[arg(long = "use", value_name = "NAME", required = true)]
        components: Vec<String>,
        #[arg(long, default_value = "dist/css")]
        dist_dir: PathBuf,
    },
}

fn run(cli: Cli) -> ead_rio::Result<()> {
    if let Some(path) = cli.log {
        init_logger(path, LevelFilter::Debug)?;
    }

    match cli.command {
        Commands::Compile {
            input,
            output,
            auto_close,
        } => {
            let options = if auto_close {
                CompileOptions::lenient()
            } else {
                CompileOptions::default()
            };
            let css = compile_file(&input, &options)?;
            match output {
                Some(path) => fs::write(path, css)?,
                None => print!("{}", css),
            }
        }
        Commands::Components {
            theme_root,
            components,
            dist_dir,
        } => {
            let config = LoaderConfig::new(theme_root).with_dist_dir(dist_dir);
            print!("{}", render_component_styles(config, components.as_slice())?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
