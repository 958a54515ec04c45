use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use taproom::api::spawn_fetch;
use taproom::logger::init_logger;
use taproom::terminal::{Tui, restore_terminal, setup_terminal};
use taproom::{Beer, CatalogStore, CliArgs, Coordinator, HttpBeerSource, Settings, Surface};

const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let settings = Settings::resolve(&args).context("failed to load configuration")?;
    init_logger(settings.log_file.as_deref(), settings.verbose)
        .context("failed to open log file")?;

    // 组装：Source -> Store -> Surface -> Coordinator，再发起唯一一次拉取
    let source = HttpBeerSource::new(settings.endpoint.clone());
    tracing::info!("Starting taproom against {}", source.endpoint());

    let mut coordinator = Coordinator::new(CatalogStore::new(), Surface::new());
    let fetched = spawn_fetch(source).context("failed to start catalog fetch")?;

    // 设置终端
    let mut terminal = setup_terminal().context("failed to set up terminal")?;

    // 主循环
    let result = run_app(&mut terminal, &mut coordinator, &fetched);

    // 恢复终端
    let restored = restore_terminal(&mut terminal);

    tracing::info!("Exiting taproom");
    result.context("terminal event loop failed")?;
    restored.context("failed to restore terminal")
}

fn run_app(
    terminal: &mut Tui,
    coordinator: &mut Coordinator,
    fetched: &Receiver<taproom::Result<Vec<Beer>>>,
) -> io::Result<()> {
    let mut waiting = true;

    loop {
        if waiting {
            match fetched.try_recv() {
                Ok(outcome) => {
                    coordinator.complete_initialize(outcome);
                    waiting = false;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    tracing::error!("Catalog fetch worker stopped without a result");
                    waiting = false;
                }
            }
        }

        terminal.draw(|f| coordinator.draw(f))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && coordinator.handle_key(key) {
                    break;
                }
            }
        }
    }
    Ok(())
}
