//! Coordinator
//!
//! 把 Surface 的手势接到 CatalogStore，把 CatalogStore 的通知接回 Surface

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::api::BeerSource;
use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::models::Beer;
use crate::ui::{Gesture, Surface, draw};

pub struct Coordinator {
    store: CatalogStore,
    surface: Rc<RefCell<Surface>>,
}

impl Coordinator {
    pub fn new(mut store: CatalogStore, surface: Surface) -> Self {
        let surface = Rc::new(RefCell::new(surface));

        let view = Rc::clone(&surface);
        store.bind_changed(move |available, favourites| {
            view.borrow_mut().render(available, favourites);
        });
        let view = Rc::clone(&surface);
        store.bind_error(move || view.borrow_mut().show_error());

        Self { store, surface }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn surface(&self) -> Ref<'_, Surface> {
        self.surface.borrow()
    }

    /// 在当前异步上下文中拉取目录（嵌入/测试入口）
    pub async fn initialize<S: BeerSource>(&mut self, source: &S) {
        self.store.initialize(source).await;
    }

    /// 写入后台拉取的结果（终端主循环使用）
    pub fn complete_initialize(&mut self, outcome: Result<Vec<Beer>>) {
        self.store.complete_initialize(outcome);
    }

    /// 处理按键，返回是否退出
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let gesture = self.surface.borrow_mut().handle_key(key);
        match gesture {
            Some(gesture) => self.dispatch(gesture),
            None => false,
        }
    }

    /// 手势分发，返回是否退出
    pub fn dispatch(&mut self, gesture: Gesture) -> bool {
        tracing::debug!("Gesture: {:?}", gesture);
        match gesture {
            Gesture::Favourite(id) => self.store.add_to_favourites(id),
            Gesture::Remove(id) => self.store.remove_from_favourites(id),
            Gesture::Search(text) => self.store.search(&text),
            Gesture::Quit => return true,
        }
        false
    }

    pub fn draw(&self, frame: &mut Frame) {
        draw(frame, &self.surface.borrow());
    }
}
