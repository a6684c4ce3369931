// FileScout - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Folder registry construction
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use filescout::app;
pub use filescout::core;
pub use filescout::platform;
pub use filescout::ui;
pub use filescout::util;

use clap::Parser;

/// FileScout - Find files by name and preview them.
///
/// Tick the folders to search, type part of a filename, and browse the
/// matches ranked by how often the term occurs in each name.
#[derive(Parser, Debug)]
#[command(name = "FileScout", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so `[logging] level` can take effect;
    // its warnings are replayed once the subscriber exists.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, load_warnings) = platform::config::load_config(&platform_paths.config_dir);
    let config_warnings: Vec<String> = platform_paths
        .warnings
        .iter()
        .cloned()
        .chain(load_warnings)
        .collect();

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %platform_paths.config_dir.display(),
        home = %platform_paths.home_dir.display(),
        "FileScout starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    // Build the folder registry
    let known = core::registry::KnownFolders {
        home: platform_paths.home_dir.clone(),
        desktop: platform_paths.desktop_dir.clone(),
        documents: platform_paths.document_dir.clone(),
        pictures: platform_paths.picture_dir.clone(),
        videos: platform_paths.video_dir.clone(),
        music: platform_paths.audio_dir.clone(),
    };
    let folders = core::registry::with_extra_folders(
        core::registry::default_folders(&known),
        &config.extra_folders,
    );

    tracing::info!(folders = folders.len(), "Ready to launch GUI");

    // Create application state
    let preview_config = core::preview::PreviewConfig {
        max_text_chars: config.max_preview_chars,
        ..Default::default()
    };
    let mut state = app::state::AppState::new(folders, config.max_results, preview_config);
    state.dark_mode = config.dark_mode;
    if !config_warnings.is_empty() {
        state.notice = Some(app::state::Notice::info(
            "Configuration",
            config_warnings.join("\n"),
        ));
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([800.0, 480.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::FileScoutApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch FileScout GUI: {e}");
        std::process::exit(1);
    }
}
