use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tool_wheel_core::{
    FrameProgress, Item, Placement, Point, Roster, SelectorConfig, ToolWheelError, Viewport,
    WheelSelector,
};
use tracing_subscriber::EnvFilter;

fn main() -> tool_wheel_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            script,
            output,
            config,
            fps,
            trace,
        } => run_replay(&script, output.as_deref(), config.as_deref(), fps, trace),
        Commands::Layout {
            select,
            width,
            height,
            radius,
        } => run_layout(select, width, height, radius),
    }
}

/// Replays a recorded interaction script through a fresh selector at a
/// fixed timestep and reports where the wheel ended up.
fn run_replay(
    script_path: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    fps: f64,
    trace: bool,
) -> tool_wheel_core::Result<()> {
    if !(fps > 0.0 && fps.is_finite()) {
        return Err(ToolWheelError::invalid_config(format!(
            "fps must be positive, got {fps}"
        )));
    }

    let config = match config_path {
        Some(path) => SelectorConfig::load(path)?,
        None => SelectorConfig::default(),
    };
    let mut selector = WheelSelector::new(Roster::default_tools(), config)?;

    let text = std::fs::read_to_string(script_path)?;
    let script: Script = serde_json::from_str(&text)?;
    let mut events = script.events;
    events.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));

    tracing::info!(
        events = events.len(),
        fps,
        "replaying interaction script"
    );

    let mut viewport = Viewport::bottom_center(script.width, script.height, script.radius);
    let frame_ms = 1000.0 / fps;
    let end_ms = events.last().map(|e| e.at_ms).unwrap_or(0.0) + script.settle_ms;

    let mut samples = Vec::new();
    let mut pending = events.iter();
    let mut next_event = pending.next();
    let mut frames_simulated = 0usize;
    let mut now_ms = 0.0;

    while now_ms <= end_ms {
        while let Some(timed) = next_event {
            if timed.at_ms > now_ms {
                break;
            }
            apply_event(&mut selector, &mut viewport, &timed.event, now_ms);
            next_event = pending.next();
        }

        let progress = selector.tick(now_ms);
        if trace {
            samples.push(FrameSample {
                at_ms: now_ms,
                rotation: selector.rotation(),
                velocity: selector.velocity(),
                index: selector.current_index(),
                progress,
            });
        }

        frames_simulated += 1;
        now_ms += frame_ms;
    }

    let report = ReplayReport {
        frames_simulated,
        final_rotation: selector.rotation(),
        final_index: selector.current_index(),
        at_first_boundary: selector.at_first_boundary(),
        at_last_boundary: selector.at_last_boundary(),
        trace: trace.then_some(samples),
    };

    tracing::info!(
        final_index = report.final_index,
        final_rotation = report.final_rotation,
        "replay finished"
    );

    emit_json(&report, output)
}

fn apply_event(
    selector: &mut WheelSelector,
    viewport: &mut Viewport,
    event: &Event,
    now_ms: f64,
) {
    tracing::debug!(?event, now_ms, "applying input event");
    match *event {
        Event::PointerDown { x, y } => {
            selector.pointer_down(Point::new(x, y), viewport.center, now_ms);
        }
        Event::PointerMove { x, y } => {
            selector.pointer_move(Point::new(x, y), viewport.center, now_ms);
        }
        Event::PointerUp => selector.pointer_up(now_ms),
        Event::Wheel { delta_y } => {
            selector.scroll(delta_y, now_ms);
        }
        Event::Key { ref key } => {
            selector.key(key, now_ms);
        }
        Event::Click { index } => {
            selector.activate(index, now_ms);
        }
        Event::Resize { width, height } => {
            // New center takes effect before the next frame is simulated.
            *viewport = Viewport::bottom_center(width, height, viewport.radius);
        }
    }
}

/// Prints the placement of every roster item, the data the presentation
/// layer would consume.
fn run_layout(select: usize, width: f64, height: f64, radius: f64) -> tool_wheel_core::Result<()> {
    let mut selector = WheelSelector::new(Roster::default_tools(), SelectorConfig::default())?;
    selector.activate(select, 0.0);

    let viewport = Viewport::bottom_center(width, height, radius);
    let placements = selector
        .roster()
        .items()
        .iter()
        .cloned()
        .zip(selector.placements(&viewport))
        .map(|(item, placement)| PlacedItem { item, placement })
        .collect();

    let report = LayoutReport {
        current_index: selector.current_index(),
        at_first_boundary: selector.at_first_boundary(),
        at_last_boundary: selector.at_last_boundary(),
        items: placements,
    };
    emit_json(&report, None)
}

fn emit_json<T: Serialize>(value: &T, output: Option<&Path>) -> tool_wheel_core::Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => std::fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Demo driver for the Tool Wheel selector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a recorded interaction script and report the final state.
    Replay {
        /// Path to the JSON interaction script.
        script: PathBuf,
        /// Write the report here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Optional tuning preset overriding the defaults.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Simulated frame rate.
        #[arg(long, default_value_t = 60.0)]
        fps: f64,
        /// Include a per-frame trace in the report.
        #[arg(long)]
        trace: bool,
    },
    /// Print the placement of every item for a given selection and
    /// container size.
    Layout {
        /// Item brought to the top before the layout is computed.
        #[arg(long, default_value_t = 0)]
        select: usize,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        #[arg(long, default_value_t = 300.0)]
        radius: f64,
    },
}

/// Recorded interaction session. Events may arrive unordered; the replay
/// sorts them by timestamp.
#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default = "default_width")]
    width: f64,
    #[serde(default = "default_height")]
    height: f64,
    #[serde(default = "default_radius")]
    radius: f64,
    /// Extra time simulated after the last event so the wheel can settle.
    #[serde(default = "default_settle_ms")]
    settle_ms: f64,
    events: Vec<TimedEvent>,
}

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    600.0
}

fn default_radius() -> f64 {
    300.0
}

fn default_settle_ms() -> f64 {
    4000.0
}

#[derive(Debug, Deserialize)]
struct TimedEvent {
    at_ms: f64,
    #[serde(flatten)]
    event: Event,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Event {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    Wheel { delta_y: f64 },
    Key { key: String },
    Click { index: usize },
    Resize { width: f64, height: f64 },
}

#[derive(Debug, Serialize)]
struct FrameSample {
    at_ms: f64,
    rotation: f64,
    velocity: f64,
    index: usize,
    progress: FrameProgress,
}

#[derive(Debug, Serialize)]
struct ReplayReport {
    frames_simulated: usize,
    final_rotation: f64,
    final_index: usize,
    at_first_boundary: bool,
    at_last_boundary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Vec<FrameSample>>,
}

#[derive(Debug, Serialize)]
struct PlacedItem {
    item: Item,
    placement: Placement,
}

#[derive(Debug, Serialize)]
struct LayoutReport {
    current_index: usize,
    at_first_boundary: bool,
    at_last_boundary: bool,
    items: Vec<PlacedItem>,
}
