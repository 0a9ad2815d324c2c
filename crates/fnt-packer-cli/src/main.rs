use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use fnt_packer_core::prelude::*;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "fnt-packer",
    about = "Repack and inspect BMFont descriptions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a description, repack its glyph images and save it
    Repack(RepackArgs),
    /// Print a description's records (summary or JSON)
    Inspect(InspectArgs),
}

#[derive(Parser, Debug, Clone)]
struct RepackArgs {
    // Input/Output
    /// Input .fnt description (page textures resolve next to it)
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// Output base name (files will be name.fnt / name.png)
    #[arg(short, long, default_value = "font", help_heading = "Input/Output")]
    name: String,

    // Layout
    /// Max atlas width for the shelf packer
    #[arg(long, default_value_t = 512, help_heading = "Layout")]
    max_width: u32,
    /// Blank pixels between neighboring glyphs
    #[arg(long, default_value_t = 1, help_heading = "Layout")]
    padding: u32,
    /// Round atlas dimensions to powers of two
    #[arg(long, default_value_t = false, help_heading = "Layout")]
    pow2: bool,
}

#[derive(Parser, Debug, Clone)]
struct InspectArgs {
    /// Input .fnt description (page textures resolve next to it)
    input: PathBuf,
    /// Dump the full model as JSON instead of a summary
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Repack(args) => run_repack(args),
        Commands::Inspect(args) => run_inspect(args),
    }
}

fn run_repack(args: &RepackArgs) -> anyhow::Result<()> {
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create out_dir {}", args.out_dir.display()))?;

    let io = FsTextureIo;
    let mut font = BitmapFont::new();
    font.load_from_file(&args.input, &io)
        .with_context(|| format!("load {}", args.input.display()))?;

    let packer = ShelfPacker {
        max_width: args.max_width,
        padding: args.padding,
        power_of_two: args.pow2,
    };
    let fnt_path = args.out_dir.join(format!("{}.fnt", args.name));
    let texture_path = args.out_dir.join(format!("{}.png", args.name));
    font.save(&fnt_path, &texture_path, &packer, &io)
        .with_context(|| format!("save {}", fnt_path.display()))?;

    info!(
        "repacked {} chars across {} page(s) into {}",
        font.char_count(),
        font.pages().len(),
        fnt_path.display()
    );
    Ok(())
}

fn run_inspect(args: &InspectArgs) -> anyhow::Result<()> {
    let io = FsTextureIo;
    let mut font = BitmapFont::new();
    font.load_from_file(&args.input, &io)
        .with_context(|| format!("load {}", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&to_json(&font))?);
        return Ok(());
    }

    if let Some(info) = font.info() {
        info!("face \"{}\" size {}", info.face, info.size);
    }
    if let Some(common) = font.common() {
        info!(
            "lineHeight {} base {} atlas {}x{}",
            common.line_height, common.base, common.scale_w, common.scale_h
        );
    }
    for page in font.pages() {
        info!(
            "page {} file \"{}\": {} chars",
            page.id,
            page.file,
            page.chars.len()
        );
    }
    info!("{} chars total", font.char_count());
    Ok(())
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
