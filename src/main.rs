use anyhow::Context;
use clap::{ArgAction, Parser};
use fingerpaint::config::Config;
use fingerpaint::draw::StrokeStyle;
use fingerpaint::export::{
    CommandMediaIndex, ExportDependencies, ExportOutcome, ExportRequest, FixedNamePrompt,
    LogMediaIndex, MediaIndex, NamePrompt, TerminalPrompt, export_drawing,
};
use fingerpaint::input::{DoodleState, script};
use fingerpaint::util;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fingerpaint")]
#[command(
    version,
    about = "Multi-touch finger painting with smoothed strokes and PNG export"
)]
struct Cli {
    /// Replay a recorded touch script (JSON array of steps)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Initial surface width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Initial surface height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Export after the replay even if the script does not ask for it
    #[arg(long, short = 'e', action = ArgAction::SetTrue)]
    export: bool,

    /// File name for the export (skips the interactive prompt)
    #[arg(long, short = 'n', value_name = "NAME")]
    name: Option<String>,

    /// Directory that holds the export folder (overrides the config file)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Use this config file instead of ~/.config/fingerpaint/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::get_config_path()?,
    };

    if cli.init_config {
        Config::create_default_file(&config_path)?;
        println!("Created config at {}", config_path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script.as_deref() else {
        // No script: show usage
        println!("fingerpaint: Multi-touch finger painting with smoothed strokes");
        println!();
        println!("Usage:");
        println!("  fingerpaint --script touches.json            Replay a touch session");
        println!("  fingerpaint --script touches.json --export   Replay and save as PNG");
        println!("  fingerpaint --init-config                    Write the default config");
        println!("  fingerpaint --help                           Show help");
        return Ok(());
    };

    let mut config = Config::load_from(&config_path)?;
    if let Some(dir) = &cli.output_dir {
        config.export.pictures_dir = Some(dir.clone());
    }

    let style = StrokeStyle::new(
        config.drawing.default_color.to_color(),
        config.drawing.default_width,
    );
    let mut state = DoodleState::new(style, config.drawing.touch_tolerance);
    state
        .resize(cli.width, cli.height)
        .context("Failed to allocate drawing surface")?;

    let steps = script::load_script(script_path)?;
    let summary = script::replay(&mut state, &steps).context("Touch replay failed")?;
    log::info!(
        "Final stroke: {} at {:.1}px",
        util::color_to_name(&state.drawing_color()),
        state.line_width()
    );

    if !(summary.export_requested || cli.export) {
        println!("Replayed {} touch events", summary.touch_events);
        return Ok(());
    }

    let request = ExportRequest::from_config(&config.export)?;
    let prompt: Box<dyn NamePrompt> = match cli.name {
        Some(name) => Box::new(FixedNamePrompt(name)),
        None => Box::new(TerminalPrompt),
    };
    let media_index: Box<dyn MediaIndex> = match &config.export.media_scan_command {
        Some(command) => Box::new(CommandMediaIndex::new(command.clone())),
        None => Box::new(LogMediaIndex),
    };
    let dependencies = ExportDependencies {
        prompt,
        media_index,
        ..ExportDependencies::default()
    };

    let snapshot = state.snapshot().context("Failed to read drawing buffer")?;
    match export_drawing(&snapshot, &request, &dependencies) {
        Ok(ExportOutcome::Saved(path)) => println!("Saved {}", path.display()),
        Ok(ExportOutcome::Cancelled) => println!("Export cancelled"),
        Err(err) => {
            log::error!("Export failed: {}", err);
            return Err(err).context("Failed to export drawing");
        }
    }

    Ok(())
}
