//! Entry point for the **cubefolio** daemon.
//!
//! Spawns the command source on a background thread, the text renderer on
//! another, and processes commands on the main thread.
//!
//! By default commands arrive on `$XDG_RUNTIME_DIR/cubefolio.sock`; with
//! `--stdin` they are read from standard input instead.

use cubefolio::catalog::StaticCatalog;
use cubefolio::command::Command;
use cubefolio::config::Config;
use cubefolio::ipc::listener::UnixSocketListener;
use cubefolio::ipc::stdin::StdinSource;
use cubefolio::navigation::NavigationController;
use cubefolio::render::text::TextRenderer;
use cubefolio::traits::{CommandSource, RenderEvent};
use log::{error, info, warn};
use std::sync::mpsc;

/// Default socket path for the command listener.
fn default_socket_path() -> String {
    let runtime = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".into());
    format!("{}/cubefolio.sock", runtime)
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/cubefolio`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("cubefolio")
}

/// Try to load the config from `$XDG_CONFIG_HOME/cubefolio/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

fn main() {
    env_logger::init();

    let use_stdin = std::env::args().any(|a| a == "--stdin");
    let config = load_config();

    let mut nav = NavigationController::new(
        StaticCatalog,
        config.gestures.clone(),
        config.swipe_axes,
    );

    let (render_tx, render_rx) = mpsc::channel::<RenderEvent>();
    nav.set_renderer(render_tx);
    let render_config = config.render.clone();
    let renderer = std::thread::spawn(move || {
        let mut renderer = TextRenderer::new(std::io::stdout(), StaticCatalog, render_config);
        if let Err(e) = renderer.run(render_rx) {
            error!("renderer error: {}", e);
        }
    });
    nav.publish();

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    spawn_command_source(cmd_tx, use_stdin);

    info!("cubefolio running");
    for cmd in cmd_rx {
        if let Err(e) = nav.handle(cmd) {
            warn!("command rejected: {}", e);
        }
    }
    info!("command source closed, exiting");

    // Dropping the controller closes the render channel.
    drop(nav);
    let _ = renderer.join();
}

fn spawn_command_source(tx: mpsc::Sender<Command>, use_stdin: bool) {
    std::thread::spawn(move || {
        if use_stdin {
            let mut source = StdinSource::new();
            if let Err(e) = source.run(tx) {
                error!("stdin source error: {}", e);
            }
        } else {
            let mut source = UnixSocketListener::new(default_socket_path());
            if let Err(e) = source.run(tx) {
                error!("socket listener error: {}", e);
            }
        }
    });
}
