use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Mutex;

use sublyme::config::{Cli, Config};
use sublyme::controller::{AppController, AppEvent};
use sublyme::logging;
use sublyme::model::{AppModel, Catalog};
use sublyme::view::{AppView, Palette};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::try_from(&cli)?;

    let catalog = match &config.catalog {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Could not load catalog {}", path.display()))?,
        None => Catalog::default(),
    };

    if cli.dump_catalog {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    let _log_guard = match logging::init_logging(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!(theme = ?config.theme, skip_intro = config.skip_intro, "=== Sublyme Starting ===");

    let model = Arc::new(Mutex::new(AppModel::new(catalog, config.skip_intro)));
    let (controller, events) = AppController::new(model.clone(), &config);
    controller.start_splash_timer().await;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let palette = Palette::for_theme(config.theme);
    let res = run_app(&mut terminal, model, controller, events, &palette).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Sublyme shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
    mut events: UnboundedReceiver<AppEvent>,
    palette: &Palette,
) -> io::Result<()> {
    loop {
        // Apply timer events queued since the last frame
        while let Ok(event) = events.try_recv() {
            controller.handle_app_event(event).await;
        }

        let should_quit = {
            let mut model_guard = model.lock().await;
            model_guard.auto_clear_old_notices();
            terminal.draw(|f| {
                AppView::render(f, &model_guard, palette);
            })?;
            model_guard.should_quit()
        };

        if should_quit {
            break;
        }

        // Short poll keeps the progress bar moving smoothly
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }
    }

    controller.shutdown().await;
    Ok(())
}
