use crate::{cli, configuration::Configuration, rest};
use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

mod wiring;

/// The main application state.
/// Built from an explicit `Configuration` so tests can skip CLI parsing.
pub struct App {
    config: Configuration,
    state: rest::AppState,
    shutdown: CancellationToken,
}

impl App {
    /// Parses the CLI, attaches the log file and prepares the data dir.
    pub fn from_cli() -> Result<App> {
        let cli = cli::parse();
        let config = Configuration::from_cli(&cli);

        crate::tracing::set_log_file(config.log_file.as_deref()).context("opening log file")?;
        log_startup_info(&config);

        App::new(config)
    }

    pub fn new(config: Configuration) -> Result<App> {
        wiring::init_data_dir(&config)?;
        let state = wiring::build_state(&config);
        Ok(Self {
            config,
            state,
            shutdown: CancellationToken::new(),
        })
    }

    /// Serves until Ctrl-C or until the REST task stops on its own.
    pub async fn run_server(&self) -> Result<()> {
        let mut rest_handle = self.spawn_rest_server();
        self.wait_for_shutdown(&mut rest_handle).await
    }

    fn spawn_rest_server(&self) -> JoinHandle<()> {
        let addr = self.config.api_listen;
        let state = self.state.clone();
        let token = self.shutdown.clone();

        tokio::spawn(async move {
            if let Err(e) = rest::serve(addr, state, token).await {
                log::error!("REST server failed: {:#}", e);
            }
        })
    }

    async fn wait_for_shutdown(&self, rest_task: &mut JoinHandle<()>) -> Result<()> {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => log::info!("🧨 Ctrl-C received, shutting down..."),
            _ = &mut *rest_task => log::error!("REST task exited unexpectedly"),
        }

        self.shutdown.cancel();

        // a finished JoinHandle must not be polled again
        if !rest_task.is_finished() {
            let _ = rest_task.await;
        }

        log::info!("✅ Shutdown complete");
        Ok(())
    }
}

fn log_startup_info(config: &Configuration) {
    log::info!("🚀 Starting skillsvc");
    log::info!("📂 Data dir: {}", config.data_dir.display());
    log::info!("📄 Topics file: {}", config.topics_path.display());
    log::info!("📄 Skills file: {}", config.skills_path.display());
    if let Some(path) = config.log_file.as_deref() {
        log::info!("📝 Log file: {}", path.display());
    }
}

pub async fn run() -> Result<()> {
    let app = App::from_cli()?;
    app.run_server().await
}
