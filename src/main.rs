use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::Parser;

use grooveview::{init_logging, preview_gcode, PreviewConfig, RenderMode};

/// Render an SVG preview of the groove a V-bit carves from a G-code
/// toolpath, assuming flat stock at Z=0.
#[derive(Parser, Debug)]
#[command(name = "grooveview", version, about)]
struct Cli {
    /// V-bit included angle in degrees, strictly between 0 and 180
    #[arg(default_value_t = grooveview::DEFAULT_TOOL_ANGLE_DEG)]
    tool_angle: f64,

    /// G-code input file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Stroke render mode
    #[arg(long, default_value_t = RenderMode::Trapezoids)]
    mode: RenderMode,

    /// One primitive per line instead of compact output
    #[arg(long)]
    pretty: bool,

    /// Output file; writes stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();

    let config = PreviewConfig {
        tool_angle_deg: cli.tool_angle,
        render_mode: cli.mode,
        pretty: cli.pretty,
        ..PreviewConfig::default()
    };
    // Reject a bad angle before touching the input.
    config.validate()?;

    let input = match &cli.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let svg = preview_gcode(&input, &config)?;

    match &cli.output {
        Some(path) => {
            let mut out = BufWriter::new(fs::File::create(path)?);
            out.write_all(svg.as_bytes())?;
            out.flush()?;
        }
        None => {
            io::stdout().write_all(svg.as_bytes())?;
        }
    }

    Ok(())
}
