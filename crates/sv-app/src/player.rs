//! Terminal renderer and the play/step drivers

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use sv_content::{render_text, Gallery, GalleryFrame, Visualization};
use sv_core::{
    AutoplayPolicy, NavigationChange, NavigationContext, NavigationEngine, NavigationSubscriber,
    PlayerConfig, StepPosition,
};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, Notify};
use tracing::{debug, info, warn};

use crate::commands::{StepCommand, HELP};

type Engine = NavigationEngine<GalleryFrame>;

/// Lines of input, read off the runtime
pub type InputLines = mpsc::Receiver<std::io::Result<String>>;

/// Prints every frame change to an output stream
pub struct Printer<W> {
    out: Mutex<W>,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn frame(&self, frame: &GalleryFrame, position: StepPosition) {
        self.line(&render_text(frame, position));
    }

    pub fn line(&self, text: &str) {
        let mut out = self.out.lock();
        // A closed stdout is not worth failing a walkthrough over
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            debug!("Failed to write output: {}", e);
        }
    }
}

impl<W: Write + Send> NavigationSubscriber<GalleryFrame> for Printer<W> {
    fn on_navigation_change(&self, context: &NavigationContext<GalleryFrame>) {
        match context.change {
            NavigationChange::PlaybackStarted => self.line("[playing]"),
            NavigationChange::PlaybackStopped => self.line("[paused]"),
            _ => self.frame(context.current(), context.position()),
        }
    }
}

/// Load the player configuration, falling back to defaults without a file
pub fn load_config(path: Option<&Path>) -> Result<PlayerConfig> {
    match path {
        Some(path) => PlayerConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(PlayerConfig::default()),
    }
}

/// Print the catalog grouped by category
pub fn list(gallery: &Gallery, out: &mut impl Write) -> Result<()> {
    for category in sv_content::Category::ALL {
        writeln!(out, "{}", category)?;
        writeln!(out, "  {}", category.description())?;
        for visualization in gallery.by_category(category) {
            writeln!(out, "  {:<26} {}", visualization.slug, visualization.name)?;
            writeln!(out, "  {:<26} {}", "", visualization.description)?;
            if visualization.variants.len() > 1 {
                for variant in visualization.variants {
                    writeln!(
                        out,
                        "  {:<26}   --variant {:<20} {}",
                        "", variant.key, variant.label
                    )?;
                }
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print every frame of a walkthrough without navigating
pub fn show(
    visualization: &Visualization,
    variant: Option<&str>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let sequence = visualization.sequence(variant)?;
    if !json {
        writeln!(out, "{}", visualization.name)?;
    }
    for (index, frame) in sequence.iter().enumerate() {
        let position = StepPosition { index, total: sequence.len() };
        if json {
            writeln!(out, "{}", serde_json::to_string(frame)?)?;
        } else {
            writeln!(out, "{}", render_text(frame, position))?;
        }
    }
    Ok(())
}

/// Autoplay a walkthrough until it reaches its last frame
pub async fn play(
    visualization: &Visualization,
    variant: Option<&str>,
    policy: AutoplayPolicy,
) -> Result<()> {
    let sequence = visualization.sequence(variant)?;
    let engine = Arc::new(Engine::new(sequence).with_autoplay(policy, Handle::current()));

    let printer = Arc::new(Printer::new(std::io::stdout()));
    engine.add_subscriber(printer.clone());

    let finished = Arc::new(Notify::new());
    let watcher: Arc<dyn NavigationSubscriber<GalleryFrame>> = {
        let finished = finished.clone();
        Arc::new(move |context: &NavigationContext<GalleryFrame>| {
            if !context.state.is_playing() {
                finished.notify_one();
            }
        })
    };
    engine.add_subscriber(watcher.clone());

    printer.line(visualization.name);
    printer.frame(&engine.current(), engine.position());
    if !engine.toggle_playing() {
        info!(slug = visualization.slug, "nothing to play");
        return Ok(());
    }

    tokio::select! {
        _ = finished.notified() => {}
        _ = tokio::signal::ctrl_c() => {
            engine.stop();
        }
    }
    Ok(())
}

/// Interactive session: stdin commands drive the engine while autoplay may run
pub async fn step(
    visualization: &Visualization,
    variant: Option<&str>,
    config: &PlayerConfig,
) -> Result<()> {
    let sequence = visualization.sequence(variant)?;
    let mut engine = Engine::new(sequence);
    match config.playback.policy()? {
        Some(policy) => engine = engine.with_autoplay(policy, Handle::current()),
        None => debug!("autoplay disabled by configuration"),
    }
    let engine = Arc::new(engine);

    let printer = Arc::new(Printer::new(std::io::stdout()));
    engine.add_subscriber(printer.clone());

    printer.line(&format!("{} (type 'help' for commands)", visualization.name));
    printer.frame(&engine.current(), engine.position());
    if config.start_playing {
        engine.toggle_playing();
    }

    let lines = spawn_line_reader(std::io::BufReader::new(std::io::stdin()))?;
    drive(visualization, &engine, &printer, lines).await
}

/// Read lines from `reader` on a dedicated thread
///
/// The thread ends at end of input or once the receiver is dropped. It is
/// never joined, so a read still blocked on a terminal does not keep the
/// process alive after the session ends.
pub fn spawn_line_reader<R>(reader: R) -> Result<InputLines>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);
    std::thread::Builder::new()
        .name("stepview-input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
        })
        .context("Failed to start the input thread")?;
    Ok(rx)
}

/// Apply input lines until quit, end of input or Ctrl-C
async fn drive<W: Write + Send>(
    visualization: &Visualization,
    engine: &Arc<Engine>,
    printer: &Printer<W>,
    mut lines: InputLines,
) -> Result<()> {
    loop {
        let line = tokio::select! {
            line = lines.recv() => line,
            _ = tokio::signal::ctrl_c() => {
                debug!("interrupted");
                None
            }
        };
        let Some(line) = line else { break };
        let line = line.context("Failed to read from stdin")?;

        match StepCommand::parse_line(&line) {
            Ok(Some(StepCommand::Quit)) => break,
            Ok(Some(command)) => apply(visualization, engine, printer, command),
            Ok(None) => {}
            Err(e) => printer.line(&e.to_string()),
        }
    }

    engine.stop();
    Ok(())
}

/// Run one command against the engine
fn apply<W: Write + Send>(
    visualization: &Visualization,
    engine: &Arc<Engine>,
    printer: &Printer<W>,
    command: StepCommand,
) {
    let before = engine.position();
    match command {
        StepCommand::Next => {
            if engine.advance().position() == before && before.is_last() {
                printer.line("Already at the last step");
            }
        }
        StepCommand::Prev => {
            if engine.retreat().position() == before && before.is_first() {
                printer.line("Already at the first step");
            }
        }
        StepCommand::Reset => {
            engine.reset();
        }
        StepCommand::End => {
            engine.skip_to_end();
        }
        StepCommand::Goto(index) => {
            if index >= before.total {
                printer.line(&format!("Only {} steps, showing the last one", before.total));
            }
            engine.seek(index);
        }
        StepCommand::TogglePlay => {
            if !engine.has_autoplay() {
                printer.line("Autoplay is disabled");
            } else if !engine.is_playing() && before.is_last() {
                printer.line("Already at the last step");
            } else {
                engine.toggle_playing();
            }
        }
        StepCommand::Variant(key) => match visualization.sequence(Some(&key)) {
            Ok(sequence) => {
                info!(slug = visualization.slug, variant = %key, "switching variant");
                engine.replace_sequence(sequence);
            }
            Err(e) => {
                warn!("{}", e);
                let keys: Vec<_> = visualization.variant_keys().collect();
                printer.line(&format!("{} (available: {})", e, keys.join(", ")));
            }
        },
        StepCommand::Stage(id) => match engine.current() {
            GalleryFrame::StageFlow(frame) => match frame.flow.frame_index_of(&id) {
                Some(index) => {
                    engine.seek(index);
                }
                None => {
                    let ids: Vec<_> = frame.flow.stages.iter().map(|stage| stage.id).collect();
                    printer.line(&format!("No stage '{}' (available: {})", id, ids.join(", ")));
                }
            },
            _ => printer.line(&format!("{} has no stages", visualization.name)),
        },
        StepCommand::Section(id) => match engine.current() {
            GalleryFrame::Memory(frame) => match frame.layout.section(&id) {
                Some(section) => printer.line(&section.detail_lines().join("\n")),
                None => {
                    let ids: Vec<_> =
                        frame.layout.sections.iter().map(|section| section.id).collect();
                    printer.line(&format!("No section '{}' (available: {})", id, ids.join(", ")));
                }
            },
            _ => printer.line(&format!("{} has no memory sections", visualization.name)),
        },
        StepCommand::Help => printer.line(HELP),
        StepCommand::Quit => {}
    }
    debug!(
        from = before.index,
        to = engine.position().index,
        "command applied"
    );
}
