use std::{
    fs,
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "marquee", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render slider configs to HTML.
    Render(RenderArgs),
    /// Print the derived animation and track of each slider as JSON.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input JSON: one slider config or an array of them.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Emit a standalone HTML document instead of a fragment.
    #[arg(long)]
    document: bool,

    /// Document title, used with `--document`.
    #[arg(long, default_value = "Marquee")]
    title: String,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input JSON: one slider config or an array of them.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn read_configs(path: &Path) -> anyhow::Result<Vec<marquee::SliderConfig>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config '{}'", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).with_context(|| "parse config JSON")?;

    let configs = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                serde_json::from_value(v).with_context(|| format!("slider config #{i}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?,
        other => vec![serde_json::from_value(other).with_context(|| "slider config")?],
    };
    Ok(configs)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut surface = marquee::Surface::new();
    for config in read_configs(&args.in_path)? {
        surface.mount(marquee::Slider::new(config))?;
    }

    let html = if args.document {
        surface.to_document(&args.title)
    } else {
        let mut fragment = surface.to_html();
        fragment.push('\n');
        fragment
    };

    match &args.out {
        Some(out) => {
            fs::write(out, html).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {} slider(s) to {}", surface.len(), out.display());
        }
        None => std::io::stdout()
            .write_all(html.as_bytes())
            .with_context(|| "write stdout")?,
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let mut report = Vec::new();
    for config in read_configs(&args.in_path)? {
        let mut slider = marquee::Slider::new(config);
        let rendered = slider.render();
        report.push(serde_json::json!({
            "animation": rendered.track.animation,
            "keyframes": rendered.style.css,
            "trackWidth": rendered.track.width,
            "occurrences": rendered.occurrence_count(),
            "pauseOnHover": rendered.wrapper.handlers.is_some(),
            "edgeFade": rendered.overlays.is_some(),
        }));
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
