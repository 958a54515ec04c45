//! 终端接管与恢复

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// 进入 raw mode 和备用屏幕；中途失败时回滚已做的步骤
pub fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;

    let entered = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

    if entered.is_err() {
        let rollback = first_error([
            execute!(io::stdout(), LeaveAlternateScreen),
            disable_raw_mode(),
        ]);
        if let Err(e) = rollback {
            tracing::warn!("Failed to roll back terminal setup: {}", e);
        }
    }
    entered
}

/// 恢复终端，每一步都会执行，返回第一个错误
pub fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        execute!(terminal.backend_mut(), LeaveAlternateScreen),
        terminal.show_cursor(),
    ])
}

/// 合并多个步骤的结果，保留第一个错误
pub fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().fold(Ok(()), |acc, result| acc.and(result))
}
