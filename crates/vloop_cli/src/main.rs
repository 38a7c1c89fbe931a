//! vloop demo host
//!
//! Feeds a list of generated comments to a looping view and draws it in the
//! terminal until the run time is up.

mod config;
mod render;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vloop_core::clock::{Clock, SystemClock};
use vloop_widgets::{CommentBinder, LoopingView};

use crate::config::DemoFile;
use crate::render::{terminal_style, TextRenderer};

#[derive(Parser, Debug)]
#[command(name = "vloop", version, about = "Loop through comments in a one-line terminal view")]
struct Cli {
    /// Path to a vloop.toml configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of generated comments
    #[arg(long)]
    count: Option<usize>,

    /// Position to start at (out-of-range values start at 0)
    #[arg(long, allow_hyphen_values = true)]
    start: Option<i64>,

    /// Viewport width in columns
    #[arg(long)]
    width: Option<i32>,

    /// Redraw rate while sliding
    #[arg(long)]
    fps: Option<u32>,

    /// Stop after this many milliseconds instead of running forever
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Print one line per settled item instead of redrawing in place
    #[arg(long)]
    plain: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut file = match &cli.config {
        Some(path) => DemoFile::load(path)?,
        None => DemoFile::default(),
    };
    if let Some(count) = cli.count {
        file.demo.count = count;
    }
    if let Some(start) = cli.start {
        file.demo.start = start;
    }
    if let Some(width) = cli.width {
        file.demo.width = width;
    }
    if let Some(fps) = cli.fps {
        file.demo.fps = fps;
    }

    run(&file, cli.duration_ms, cli.plain).context("Demo failed")
}

fn run(file: &DemoFile, duration_ms: Option<u64>, plain: bool) -> Result<()> {
    let demo = &file.demo;
    let binder = CommentBinder::with_style(terminal_style(demo.width));
    let mut view = LoopingView::new(binder, file.looping.clone());

    let comments: Arc<[String]> = (0..demo.count).map(|i| format!("Comment {i}")).collect();
    view.set_data(Some(comments), demo.start);
    tracing::info!(
        count = demo.count,
        start = view.current_position(),
        "looping view started"
    );

    let frame_ms = 1000 / u64::from(demo.fps.max(1));
    let mut renderer = TextRenderer::new(demo.width, plain);
    let mut stdout = io::stdout().lock();
    let mut height = view.measure(demo.width).height;
    view.layout();
    draw(&mut renderer, &view, height, &mut stdout)?;

    loop {
        let outcome = view.tick();
        if outcome.layout_requested {
            height = view.measure(demo.width).height;
            view.layout();
            if !renderer.is_plain() {
                renderer.draw(&view, height, &mut stdout)?;
            }
        }
        if outcome.cycle_completed {
            tracing::debug!(position = view.current_position(), "cycle completed");
            if renderer.is_plain() {
                renderer.draw_settled(&view, &mut stdout)?;
            }
        }

        let now = view.clock().now_ms();
        let remaining = duration_ms.map(|limit| limit.saturating_sub(now));
        if remaining == Some(0) {
            break;
        }

        let sleep_ms = match (view.next_wakeup(), remaining) {
            (Some(wakeup), _) => wakeup.saturating_sub(now).max(frame_ms),
            (None, Some(remaining)) => remaining,
            // Nothing will ever change again
            (None, None) => break,
        };
        let sleep_ms = remaining.map_or(sleep_ms, |r| sleep_ms.min(r));
        thread::sleep(Duration::from_millis(sleep_ms));
    }

    view.detach();
    tracing::info!(position = view.current_position(), "looping view detached");
    Ok(())
}

fn draw<W: io::Write>(
    renderer: &mut TextRenderer,
    view: &LoopingView<CommentBinder, SystemClock>,
    height: i32,
    out: &mut W,
) -> io::Result<()> {
    if renderer.is_plain() {
        renderer.draw_settled(view, out)
    } else {
        renderer.draw(view, height, out)
    }
}
