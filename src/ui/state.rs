//! Surface 状态定义 (Model)
//!
//! 只保存最近一次 render 传入的列表和纯界面状态，不含业务规则

use crate::models::Beer;

pub const ERROR_MESSAGE: &str = "Something went wrong during api fetch";

/// 展示层状态
pub struct Surface {
    pub available: Vec<Beer>,
    pub favourites: Vec<Beer>,
    pub focus: Focus,
    pub available_selected: usize,
    pub favourites_selected: usize,
    pub search_input: String,
    pub loading: bool,
    pub error: Option<&'static str>,
    pub chrome_shown: bool, // 首次 render 后才显示三栏
}

/// 界面模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceMode {
    Loading,
    Ready,
    Error,
}

/// 焦点所在栏
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Available,
    Favourites,
    Search,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Available => Focus::Favourites,
            Focus::Favourites => Focus::Search,
            Focus::Search => Focus::Available,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Available => Focus::Search,
            Focus::Favourites => Focus::Available,
            Focus::Search => Focus::Favourites,
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    /// 创建新的 Surface，初始显示加载提示
    pub fn new() -> Self {
        let mut surface = Self {
            available: Vec::new(),
            favourites: Vec::new(),
            focus: Focus::Available,
            available_selected: 0,
            favourites_selected: 0,
            search_input: String::new(),
            loading: false,
            error: None,
            chrome_shown: false,
        };
        surface.show_loading_indicator();
        surface
    }

    pub fn mode(&self) -> SurfaceMode {
        if self.error.is_some() {
            SurfaceMode::Error
        } else if self.chrome_shown {
            SurfaceMode::Ready
        } else {
            SurfaceMode::Loading
        }
    }

    /// 当前选中的可选条目
    pub fn selected_available(&self) -> Option<&Beer> {
        self.available.get(self.available_selected)
    }

    /// 当前选中的收藏条目
    pub fn selected_favourite(&self) -> Option<&Beer> {
        self.favourites.get(self.favourites_selected)
    }

    /// 确保选中索引有效
    pub(super) fn clamp_selection(&mut self) {
        self.available_selected = clamp(self.available_selected, self.available.len());
        self.favourites_selected = clamp(self.favourites_selected, self.favourites.len());
    }
}

fn clamp(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index.min(len - 1) }
}
