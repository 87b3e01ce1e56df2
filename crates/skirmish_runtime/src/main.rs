//! Skirmish Runtime
//!
//! Opens the preferences dialog on a game window (or a headless display),
//! replays a scripted session through it and saves what changed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skirmish_audio::{MixerConfig, NullSound, SoundSystem};
use skirmish_render::winit::application::ApplicationHandler;
use skirmish_render::winit::event::WindowEvent;
use skirmish_render::winit::event_loop::ActiveEventLoop;
use skirmish_render::winit::window::WindowId;
use skirmish_render::window::{create_event_loop, window_attributes};
use skirmish_render::{
    HeadlessDisplay, HeadlessVideo, VideoBackend, WindowConfig, WindowDisplay, WindowMode,
    PREFERRED_BPP,
};
use skirmish_services::settings::{AudioSettings, GraphicsSettings, Settings};
use skirmish_services::{GameConfig, PreferenceStore};
use skirmish_ui::{
    show_preferences_dialog, DisplayManager, HostStep, Preferences, ScriptedHost, WidgetInput,
};

type Script = Vec<HostStep<WidgetInput>>;

/// Skirmish preferences dialog
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(version)]
struct Args {
    /// Preferences file, created on first save
    #[arg(long, value_name = "FILE", default_value = "preferences.json")]
    prefs: PathBuf,

    /// Game configuration listing the advanced preferences
    #[arg(long, value_name = "FILE")]
    game_config: Option<PathBuf>,

    /// JSON list of dialog steps to replay
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Run without opening a window
    #[arg(long)]
    headless: bool,
}

fn load_script(path: Option<&Path>) -> Result<Script> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse script {}", path.display()))
}

fn load_game_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load game config {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

/// Replay `script` in the preferences dialog; returns how many inputs no
/// control accepted.
fn run_dialog(prefs: &mut Preferences, game_cfg: &GameConfig, script: Script) -> Result<usize> {
    let mut host = ScriptedHost::new(script);
    show_preferences_dialog(&mut host, prefs, game_cfg)?;
    Ok(host.rejected())
}

/// Open the mixer for whichever channels start enabled. A machine without
/// audio runs with both channels silent.
fn open_mixer(audio: &AudioSettings) -> NullSound {
    let mut mixer = NullSound::new();
    if !audio.sound && !audio.music {
        return mixer;
    }
    let config = MixerConfig {
        sample_rate: audio.sample_rate,
        buffer_size: audio.buffer_size,
    };
    if let Err(err) = mixer.init(config) {
        tracing::warn!("Starting without sound: {}", err);
        return mixer;
    }
    mixer.set_sound_volume(audio.sound_volume);
    mixer.set_music_volume(audio.music_volume);
    if audio.music {
        mixer.play_music();
    }
    mixer
}

fn run_headless(
    prefs: &mut Preferences,
    game_cfg: &GameConfig,
    graphics: &GraphicsSettings,
    script: Script,
) -> Result<usize> {
    let res = graphics.resolution;
    let mut video = HeadlessVideo::default();
    if let Err(err) = video.set_mode(res.width, res.height, PREFERRED_BPP, WindowMode::Windowed) {
        tracing::warn!("Starting without a video mode: {}", err);
    }

    let mut manager = DisplayManager::new(prefs, Box::new(HeadlessDisplay::new(video)));
    run_dialog(&mut manager, game_cfg, script)
}

/// Runs the dialog once the event loop hands out a window
struct DialogApp<'a> {
    prefs: &'a mut Preferences,
    game_cfg: &'a GameConfig,
    graphics: &'a GraphicsSettings,
    script: Option<Script>,
    outcome: Result<usize>,
}

impl ApplicationHandler for DialogApp<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only the first resume runs the dialog
        let Some(script) = self.script.take() else {
            return;
        };

        let config = WindowConfig {
            resolution: self.graphics.resolution,
            ..WindowConfig::default()
        };
        self.outcome = match event_loop.create_window(window_attributes(&config)) {
            Ok(window) => {
                tracing::info!("Window created: {}", config.resolution);
                let display = Box::new(WindowDisplay::new(window));
                let mut manager = DisplayManager::new(&mut *self.prefs, display);
                run_dialog(&mut manager, self.game_cfg, script)
            }
            Err(err) => Err(anyhow::Error::new(err).context("Failed to create window")),
        };
        event_loop.exit();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            event_loop.exit();
        }
    }
}

fn run_windowed(
    prefs: &mut Preferences,
    game_cfg: &GameConfig,
    graphics: &GraphicsSettings,
    script: Script,
) -> Result<usize> {
    let event_loop = create_event_loop().context("Failed to create event loop")?;
    let mut app = DialogApp {
        prefs,
        game_cfg,
        graphics,
        script: Some(script),
        outcome: Ok(0),
    };
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated abnormally")?;
    app.outcome
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Skirmish v{}", skirmish_core::VERSION);

    let store = PreferenceStore::load(&args.prefs)
        .with_context(|| format!("Failed to load preferences {}", args.prefs.display()))?;
    let game_cfg = load_game_config(args.game_config.as_deref())?;
    let script = load_script(args.script.as_deref())?;
    tracing::info!(
        "{} advanced preferences, {} scripted steps",
        game_cfg.advanced_preferences.len(),
        script.len()
    );

    let settings = Settings::from_store(&store);
    let mixer = open_mixer(&settings.audio);

    let mut prefs = Preferences::new(store).with_sound(Box::new(mixer));
    let rejected = if args.headless {
        run_headless(&mut prefs, &game_cfg, &settings.graphics, script)?
    } else {
        run_windowed(&mut prefs, &game_cfg, &settings.graphics, script)?
    };
    if rejected > 0 {
        tracing::warn!("{} scripted inputs were not accepted", rejected);
    }

    let mut store = prefs.into_store();
    if store.is_dirty() {
        store
            .save(&args.prefs)
            .with_context(|| format!("Failed to save preferences {}", args.prefs.display()))?;
        tracing::info!("Preferences saved to {}", args.prefs.display());
    }
    Ok(())
}
