//! Action / Gesture 枚举定义 (Intent)
//!
//! 按键先转为界面内部的 Action，需要业务处理的再产出 Gesture

use crate::models::BeerId;

/// 界面内部操作
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    FocusNext,
    FocusPrevious,
    FocusSearch,
    LeaveSearch,

    Activate,  // Enter
    Favourite, // f
    Remove,    // r

    Input(char),
    DeleteChar,
}

/// 交给 Coordinator 的用户手势
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Favourite(BeerId),
    Remove(BeerId),
    Search(String),
    Quit,
}
