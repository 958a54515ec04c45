//! 键盘事件映射 (Input -> Action)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::{Action, Gesture};
use super::state::{Focus, Surface, SurfaceMode};

/// 根据当前模式、焦点和按键获取对应的 Action
pub fn get_action(mode: SurfaceMode, focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match mode {
        SurfaceMode::Loading | SurfaceMode::Error => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        SurfaceMode::Ready => match focus {
            Focus::Search => match key.code {
                KeyCode::Esc => Some(Action::LeaveSearch),
                KeyCode::Enter => Some(Action::Activate),
                KeyCode::Tab => Some(Action::FocusNext),
                KeyCode::BackTab => Some(Action::FocusPrevious),
                KeyCode::Backspace => Some(Action::DeleteChar),
                KeyCode::Char(c) => Some(Action::Input(c)),
                _ => None,
            },
            Focus::Available | Focus::Favourites => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
                KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::FocusNext),
                KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                    Some(Action::FocusPrevious)
                }
                KeyCode::Char('/') => Some(Action::FocusSearch),
                KeyCode::Enter => Some(Action::Activate),
                KeyCode::Char('f') => Some(Action::Favourite),
                KeyCode::Char('r') => Some(Action::Remove),
                _ => None,
            },
        },
    }
}

impl Surface {
    /// 处理按键事件
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Gesture> {
        let action = get_action(self.mode(), self.focus, key)?;
        self.dispatch(action)
    }
}
