use std::{path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::Parser;
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(
    name = "placard",
    version,
    about = "Generate campaign art from department references"
)]
struct Cli {
    /// Department id (e.g. education, health).
    department: String,

    /// Material type (e.g. banner, poster).
    material: String,

    /// Theme or main message of the artwork.
    theme: String,

    /// Text overlaid on the final artwork.
    text: String,

    /// Directory holding the `department_<id>` reference folders.
    #[arg(long, default_value = "references")]
    root: PathBuf,

    /// Output PNG path (default: art_<department>_<material>.png).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Settings JSON overriding canvas size, margins and typography constants.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Bottom margin of the text block in pixels.
    #[arg(long)]
    margin: Option<u32>,

    /// Print diagnostics about font resolution (source + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    let req = placard::ArtRequest {
        department: cli.department.clone(),
        material: cli.material.clone(),
        theme: cli.theme.clone(),
        message: cli.text.clone(),
        root: cli.root.clone(),
    };

    let art = match placard::render_art(&req, &settings) {
        Ok(art) => art,
        Err(e) if e.is_not_found() => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    println!("Generated prompt:\n{}", art.prompt);

    if cli.dump_fonts {
        dump_font_diagnostics(&art.layout.font)?;
    }

    let out = cli
        .output
        .clone()
        .unwrap_or_else(|| placard::default_output_path(&cli.department, &cli.material));
    placard::save_png(&art.image, &out)?;

    println!("Art saved to: {}", out.display());
    Ok(ExitCode::SUCCESS)
}

fn load_settings(cli: &Cli) -> anyhow::Result<placard::PlacardSettings> {
    let mut settings = match &cli.settings {
        Some(path) => placard::PlacardSettings::from_path(path)?,
        None => placard::PlacardSettings::default(),
    };
    if let Some(w) = cli.width {
        settings.canvas_width = w;
    }
    if let Some(h) = cli.height {
        settings.canvas_height = h;
    }
    if let Some(m) = cli.margin {
        settings.bottom_margin = m;
    }
    settings.validate()?;
    Ok(settings)
}

fn dump_font_diagnostics(source: &placard::FontSource) -> anyhow::Result<()> {
    eprintln!("fonts:");
    match source {
        placard::FontSource::File(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read font '{}'", path.display()))?;
            eprintln!("  source: {}", path.display());
            eprintln!("  sha256: {}", sha256_hex(&bytes));
        }
        placard::FontSource::Builtin => {
            eprintln!("  source: built-in 8x8 bitmap");
        }
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
