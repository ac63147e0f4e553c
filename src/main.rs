use sdl2::image::InitFlag;
use std::path::PathBuf;
use std::time::Instant;

mod assets;
mod config;
mod error;
mod game;
mod hit_region;
mod input_system;
mod layout;
mod story;
mod text;

use assets::{ImageLibrary, ImageManifest};
use config::GameConfig;
use error::GameError;
use game::{render_frame, CursorSet, FrameOutcome, GameController, Palette};
use input_system::{poll_system_events, sample_pointer, SystemEvent};
use story::build_story;
use text::BitmapFont;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    // Config path can be overridden by the first argument
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(GameConfig::default_path);
    let config = GameConfig::load_or_default(&config_path)?;

    let mut manifest = ImageManifest::new(&config.asset_dir);
    let story = build_story(&mut manifest)?;
    log::info!(
        "Story ready: {} nodes, {} endings, {} images",
        story.graph.len(),
        story.graph.terminal_nodes().len(),
        manifest.len()
    );

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(InitFlag::PNG | InitFlag::JPG)?;

    let mut window_builder = video_subsystem.window(
        &config.window.title,
        config.window.width,
        config.window.height,
    );
    window_builder.position_centered();
    if config.window.resizable {
        window_builder.resizable();
    }
    let window = window_builder.build().map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    // Missing or broken illustrations stop start-up here
    let images = ImageLibrary::load(&texture_creator, &manifest)?;
    log::info!("Loaded {} images from {}", images.len(), config.asset_dir.display());

    let font = BitmapFont::new(config.layout.font_scale);
    let palette = Palette::default();
    let frame_duration = config.frame_duration();

    let mut controller = GameController::new(story, &config);
    let mut cursors = CursorSet::new()?;
    let mut event_pump = sdl_context.event_pump()?;

    log::info!("Window {}x{}", config.window.width, config.window.height);

    // Frame cycle: layout → regions → draw → input
    'running: loop {
        let frame_start = Instant::now();

        for event in poll_system_events(&mut event_pump) {
            match event {
                SystemEvent::Quit => break 'running,
                SystemEvent::Resized(width, height) => {
                    log::debug!("Resized to {}x{}", width, height);
                    controller.resize(width, height);
                }
            }
        }

        let frame = controller.prepare_frame(&font, |id| images.size(id));
        render_frame(&mut canvas, &frame, &images, &font, &palette)?;

        let pointer = sample_pointer(&event_pump);
        let input = controller.handle_pointer(pointer, Instant::now());
        cursors.apply(input.cursor);

        canvas.present();

        if input.outcome == FrameOutcome::Quit {
            log::info!("Quit selected");
            break 'running;
        }

        // Cap framerate
        if let Some(remaining) = frame_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    Ok(())
}
