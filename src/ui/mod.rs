//! 展示层 (Presentation Surface)
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): Surface 结构体及其界面状态
//! - View (view/): 纯函数，将 Surface 映射为 UI
//! - Intent (actions.rs): 按键转化为 Action，再产出交给 Coordinator 的 Gesture

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use actions::Gesture;
pub use state::Surface;
pub use view::draw;
