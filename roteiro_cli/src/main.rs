use clap::{Parser, Subcommand};

use crate::{compare::CompareArgs, schema::SchemaKind, summarize::SummarizeArgs};

mod compare;
mod file_utils;
mod params;
mod schema;
mod summarize;
mod table;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the routes of a directions result for a route plan
    #[command(visible_alias = "s")]
    Summarize {
        #[command(flatten)]
        args: SummarizeArgs,
    },
    /// Compare a candidate route summary against a baseline
    #[command(visible_alias = "c")]
    Compare {
        #[command(flatten)]
        args: CompareArgs,
    },
    /// Print the JSON schema of the output files
    Schema {
        #[arg(value_enum, default_value_t = SchemaKind::Summary)]
        kind: SchemaKind,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Summarize { args }) => summarize::run(args)?,
        Some(Commands::Compare { args }) => compare::run(args)?,
        Some(Commands::Schema { kind }) => println!("{}", schema::generate_json_schema(kind)?),
        None => {
            // Handle no command provided
        }
    }

    Ok(())
}
