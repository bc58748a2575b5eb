use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cardslots", version)]
struct Cli {
    /// Increase stderr log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print raw slot edges, one `<key> <x1> <y2> <x2> <y1> 0` line per slot.
    Plain(PlainArgs),
    /// Print inclusive pixel boxes as a JavaScript object literal.
    Table(TableArgs),
    /// Print inclusive pixel boxes as JSON.
    Json(JsonArgs),
    /// Print the rank and suit glyph boxes inside each card slot.
    Regions(RegionsArgs),
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Built-in layout preset.
    #[arg(long, value_enum, conflicts_with = "layout_file")]
    layout: Option<PresetChoice>,

    /// Layout JSON file to use instead of a preset.
    #[arg(long)]
    layout_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlainArgs {
    #[command(flatten)]
    layout: LayoutArgs,
}

#[derive(Parser, Debug)]
struct TableArgs {
    #[command(flatten)]
    layout: LayoutArgs,

    /// Variable name of the emitted table (defaults to the layout's table name).
    #[arg(long)]
    name: Option<String>,
}

#[derive(Parser, Debug)]
struct JsonArgs {
    #[command(flatten)]
    layout: LayoutArgs,
}

#[derive(Parser, Debug)]
struct RegionsArgs {
    #[command(flatten)]
    layout: LayoutArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    Draft,
    Ibb6,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Plain(args) => cmd_plain(args),
        Command::Table(args) => cmd_table(args),
        Command::Json(args) => cmd_json(args),
        Command::Regions(args) => cmd_regions(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_layout(args: &LayoutArgs, default: PresetChoice) -> anyhow::Result<cardslots::Layout> {
    let layout = match &args.layout_file {
        Some(path) => cardslots::Layout::from_path(path)
            .with_context(|| format!("load layout '{}'", path.display()))?,
        None => match args.layout.unwrap_or(default) {
            PresetChoice::Draft => cardslots::Layout::draft(),
            PresetChoice::Ibb6 => cardslots::Layout::ibb6(),
        },
    };
    tracing::info!(layout = %layout.name, screen = %layout.screen, "using layout");
    Ok(layout)
}

fn emit(text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("write stdout")
}

fn cmd_plain(args: PlainArgs) -> anyhow::Result<()> {
    let layout = load_layout(&args.layout, PresetChoice::Draft)?;
    let table = layout.slots()?;
    emit(&cardslots::render_plain(&table)?)
}

fn cmd_table(args: TableArgs) -> anyhow::Result<()> {
    let layout = load_layout(&args.layout, PresetChoice::Ibb6)?;
    let table = layout.slots()?;
    let name = args.name.as_deref().unwrap_or(&table.table_name);
    emit(&cardslots::render_table(&table, name)?)
}

fn cmd_json(args: JsonArgs) -> anyhow::Result<()> {
    let layout = load_layout(&args.layout, PresetChoice::Ibb6)?;
    let table = layout.slots()?;
    emit(&cardslots::render_json(&table)?)
}

fn cmd_regions(args: RegionsArgs) -> anyhow::Result<()> {
    let layout = load_layout(&args.layout, PresetChoice::Ibb6)?;
    let table = layout.slots()?;
    emit(&cardslots::render_regions(&table)?)
}
