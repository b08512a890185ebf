use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::time::Instant;
use zushiki::prelude::*;

/// Compile a flow table into a process document and print it as JSON.
#[derive(Parser)]
#[command(name = "zushiki-cli", version)]
struct Cli {
    /// Path to a flow-table JSON file (`{id, name, rows}`). Omit to compile
    /// the bundled sample flow.
    #[arg(short, long)]
    flow: Option<String>,

    /// Skip the owner-column layout pass.
    #[arg(long)]
    no_layout: bool,

    /// Run the eager structural validation pass before compiling.
    #[arg(long)]
    validate: bool,
}

// Matches the flow-table JSON format; only used here for conversion.
#[derive(Deserialize)]
struct RawTable {
    id: String,
    name: String,
    rows: Vec<TableRow>,
}

fn main() -> zushiki::prelude::Result<()> {
    let cli = Cli::parse();

    let flow = match &cli.flow {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let raw: RawTable = serde_json::from_str(&content)?;
            FlowTable {
                id: raw.id,
                name: raw.name,
                rows: raw.rows,
            }
            .into_flow_model()?
        }
        None => zushiki::data::approval_flow(),
    };

    if cli.validate {
        zushiki::flow::validate(&flow)?;
    }

    let flow = if cli.no_layout { flow } else { layout(&flow) };

    let start = Instant::now();
    let document = Compiler::builder(flow).build().compile();
    eprintln!("Compiled in {:.2?}", start.elapsed());

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
