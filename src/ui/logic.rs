//! 界面逻辑处理 (Update/Dispatch)
//!
//! render / show_error 等由 Coordinator 调用；dispatch 处理按键产生的 Action

use super::actions::{Action, Gesture};
use super::state::{ERROR_MESSAGE, Focus, Surface};
use crate::models::Beer;

impl Surface {
    // ============ 渲染契约 ============

    /// 用新列表整体替换显示内容
    pub fn render(&mut self, available: &[Beer], favourites: &[Beer]) {
        self.clear_loading_indicator();
        self.chrome_shown = true;
        self.available = available.to_vec();
        self.favourites = favourites.to_vec();
        self.clamp_selection();
    }

    /// 显示拉取失败提示，不清空列表
    pub fn show_error(&mut self) {
        self.clear_loading_indicator();
        self.error = Some(ERROR_MESSAGE);
    }

    pub fn show_loading_indicator(&mut self) {
        self.loading = true;
    }

    pub fn clear_loading_indicator(&mut self) {
        self.loading = false;
    }

    // ============ 分发 ============

    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> Option<Gesture> {
        match action {
            Action::Quit => return Some(Gesture::Quit),
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrevious => self.focus = self.focus.previous(),
            Action::FocusSearch => self.focus = Focus::Search,
            Action::LeaveSearch => self.focus = Focus::Available,

            Action::Activate => {
                return match self.focus {
                    Focus::Available => self.favourite_selected(),
                    Focus::Favourites => self.remove_selected(),
                    Focus::Search => Some(Gesture::Search(self.search_input.clone())),
                };
            }
            Action::Favourite if self.focus == Focus::Available => {
                return self.favourite_selected();
            }
            Action::Remove if self.focus == Focus::Favourites => {
                return self.remove_selected();
            }
            Action::Favourite | Action::Remove => {}

            Action::Input(c) => {
                if self.focus == Focus::Search {
                    self.search_input.push(c);
                }
            }
            Action::DeleteChar => {
                if self.focus == Focus::Search {
                    self.search_input.pop();
                }
            }
        }
        None
    }

    // ============ 导航相关 ============

    pub fn move_up(&mut self) {
        let selected = match self.focus {
            Focus::Available => &mut self.available_selected,
            Focus::Favourites => &mut self.favourites_selected,
            Focus::Search => return,
        };
        *selected = selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let (selected, len) = match self.focus {
            Focus::Available => (&mut self.available_selected, self.available.len()),
            Focus::Favourites => (&mut self.favourites_selected, self.favourites.len()),
            Focus::Search => return,
        };
        if *selected + 1 < len {
            *selected += 1;
        }
    }

    // ============ 手势 ============

    fn favourite_selected(&self) -> Option<Gesture> {
        self.selected_available().map(|beer| Gesture::Favourite(beer.id))
    }

    fn remove_selected(&self) -> Option<Gesture> {
        self.selected_favourite().map(|beer| Gesture::Remove(beer.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BeerId;
    use crate::ui::state::SurfaceMode;

    fn ready_surface() -> Surface {
        let mut surface = Surface::new();
        surface.render(
            &[Beer::new(1, "Lager"), Beer::new(3, "Porter")],
            &[Beer::new(2, "Stout")],
        );
        surface
    }

    #[test]
    fn starts_loading() {
        let surface = Surface::new();
        assert!(surface.loading);
        assert_eq!(surface.mode(), SurfaceMode::Loading);
    }

    #[test]
    fn render_clears_loader_and_shows_chrome() {
        let surface = ready_surface();
        assert!(!surface.loading);
        assert_eq!(surface.mode(), SurfaceMode::Ready);
        assert_eq!(surface.available.len(), 2);
        assert_eq!(surface.favourites.len(), 1);
    }

    #[test]
    fn error_clears_loader_without_lists() {
        let mut surface = Surface::new();
        surface.show_error();
        assert!(!surface.loading);
        assert_eq!(surface.mode(), SurfaceMode::Error);
        assert_eq!(surface.error, Some(ERROR_MESSAGE));
        assert!(!surface.chrome_shown);
    }

    #[test]
    fn enter_on_available_favourites_selected_row() {
        let mut surface = ready_surface();
        surface.dispatch(Action::MoveSelectionDown);
        assert_eq!(
            surface.dispatch(Action::Activate),
            Some(Gesture::Favourite(BeerId(3)))
        );
    }

    #[test]
    fn enter_on_favourites_removes_selected_row() {
        let mut surface = ready_surface();
        surface.dispatch(Action::FocusNext);
        assert_eq!(
            surface.dispatch(Action::Activate),
            Some(Gesture::Remove(BeerId(2)))
        );
    }

    #[test]
    fn shortcuts_only_apply_to_their_column() {
        let mut surface = ready_surface();
        assert_eq!(surface.dispatch(Action::Remove), None);
        surface.dispatch(Action::FocusNext);
        assert_eq!(surface.dispatch(Action::Favourite), None);
    }

    #[test]
    fn submitting_search_sends_current_input() {
        let mut surface = ready_surface();
        surface.dispatch(Action::FocusSearch);
        for c in "Lagx".chars() {
            assert_eq!(surface.dispatch(Action::Input(c)), None);
        }
        surface.dispatch(Action::DeleteChar);
        assert_eq!(
            surface.dispatch(Action::Activate),
            Some(Gesture::Search("Lag".to_string()))
        );
    }

    #[test]
    fn empty_list_produces_no_gesture() {
        let mut surface = Surface::new();
        surface.render(&[], &[]);
        assert_eq!(surface.dispatch(Action::Activate), None);
    }

    #[test]
    fn selection_is_clamped_after_render() {
        let mut surface = ready_surface();
        surface.dispatch(Action::MoveSelectionDown);
        assert_eq!(surface.available_selected, 1);

        surface.render(&[Beer::new(1, "Lager")], &[]);
        assert_eq!(surface.available_selected, 0);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut surface = ready_surface();
        for _ in 0..5 {
            surface.dispatch(Action::MoveSelectionDown);
        }
        assert_eq!(surface.available_selected, 1);
        for _ in 0..5 {
            surface.dispatch(Action::MoveSelectionUp);
        }
        assert_eq!(surface.available_selected, 0);
    }
}
