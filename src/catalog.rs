//! 目录存储 (Catalog Store)
//!
//! 持有"可选列表"与"收藏列表"，负责首次拉取、三种变更操作，
//! 并通过单槽回调发布变化

use crate::api::BeerSource;
use crate::error::Result;
use crate::models::{Beer, BeerId, sort_by_id};

/// 变化回调：(可选列表, 收藏列表)
pub type ChangedCallback = Box<dyn FnMut(&[Beer], &[Beer])>;
/// 拉取失败回调
pub type ErrorCallback = Box<dyn FnMut()>;

/// 拉取状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Pending,
    Ready,
    Failed,
}

pub struct CatalogStore {
    available: Vec<Beer>,
    favourites: Vec<Beer>,
    state: FetchState,
    on_change: Option<ChangedCallback>,
    on_error: Option<ErrorCallback>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            available: Vec::new(),
            favourites: Vec::new(),
            state: FetchState::Pending,
            on_change: None,
            on_error: None,
        }
    }

    pub fn available(&self) -> &[Beer] {
        &self.available
    }

    pub fn favourites(&self) -> &[Beer] {
        &self.favourites
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    /// 注册变化回调（后注册的覆盖先注册的）
    pub fn bind_changed(&mut self, callback: impl FnMut(&[Beer], &[Beer]) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// 注册错误回调（后注册的覆盖先注册的）
    pub fn bind_error(&mut self, callback: impl FnMut() + 'static) {
        self.on_error = Some(Box::new(callback));
    }

    // ============ 初始化 ============

    /// 拉取目录并写入结果，只在首次调用时发起请求
    ///
    /// 供异步环境嵌入和测试使用；终端程序走 `api::spawn_fetch` + `complete_initialize`
    pub async fn initialize<S: BeerSource>(&mut self, source: &S) {
        if self.state != FetchState::Pending {
            tracing::warn!("Catalog already initialized, skipping fetch");
            return;
        }
        let outcome = source.fetch_beers().await;
        self.complete_initialize(outcome);
    }

    /// 写入拉取结果，只接受第一次
    pub fn complete_initialize(&mut self, outcome: Result<Vec<Beer>>) {
        if self.state != FetchState::Pending {
            tracing::warn!("Ignoring fetch outcome, catalog already {:?}", self.state);
            return;
        }

        match outcome {
            Ok(beers) => {
                tracing::info!("Catalog loaded with {} beers", beers.len());
                self.available = beers;
                self.favourites.clear();
                self.state = FetchState::Ready;
                self.publish_full();
            }
            Err(e) => {
                tracing::error!("Catalog fetch failed: {}", e);
                self.state = FetchState::Failed;
                if let Some(callback) = &mut self.on_error {
                    callback();
                }
            }
        }
    }

    // ============ 变更操作 ============

    /// 移入收藏
    pub fn add_to_favourites(&mut self, id: BeerId) {
        match self.available.iter().position(|beer| beer.id == id) {
            Some(index) => {
                let beer = self.available.remove(index);
                tracing::debug!("Favourited beer {} ({})", id, beer.name);
                self.favourites.push(beer);
            }
            None if self.favourites.iter().any(|beer| beer.id == id) => {
                tracing::debug!("Beer {} is already a favourite", id);
            }
            None => tracing::debug!("No beer with id {} to favourite", id),
        }
        self.commit();
    }

    /// 移出收藏，放回可选列表头部
    pub fn remove_from_favourites(&mut self, id: BeerId) {
        match self.favourites.iter().position(|beer| beer.id == id) {
            Some(index) => {
                let beer = self.favourites.remove(index);
                tracing::debug!("Unfavourited beer {} ({})", id, beer.name);
                self.available.insert(0, beer);
            }
            None => tracing::debug!("No favourite with id {} to remove", id),
        }
        self.commit();
    }

    /// 按名称过滤后发布，不修改列表本身
    pub fn search(&mut self, text: &str) {
        if text.is_empty() {
            self.commit();
            return;
        }

        let mut available = filter_by_name(&self.available, text);
        let mut favourites = filter_by_name(&self.favourites, text);
        sort_by_id(&mut available);
        sort_by_id(&mut favourites);

        tracing::debug!(
            "Search {:?} matched {} available, {} favourites",
            text,
            available.len(),
            favourites.len()
        );
        if let Some(callback) = &mut self.on_change {
            callback(&available, &favourites);
        }
    }

    // ============ 发布 ============

    fn commit(&mut self) {
        sort_by_id(&mut self.available);
        sort_by_id(&mut self.favourites);
        self.publish_full();
    }

    fn publish_full(&mut self) {
        if let Some(callback) = &mut self.on_change {
            callback(&self.available, &self.favourites);
        }
    }
}

fn filter_by_name(beers: &[Beer], text: &str) -> Vec<Beer> {
    beers
        .iter()
        .filter(|beer| beer.name_contains(text))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use proptest::prelude::*;

    use super::*;
    use crate::error::TaproomError;

    type Published = Rc<RefCell<Vec<(Vec<i64>, Vec<i64>)>>>;

    fn ids(beers: &[Beer]) -> Vec<i64> {
        beers.iter().map(|beer| beer.id.0).collect()
    }

    fn names(beers: &[Beer]) -> Vec<String> {
        beers.iter().map(|beer| beer.name.clone()).collect()
    }

    fn recording_store() -> (CatalogStore, Published, Rc<RefCell<usize>>) {
        let published: Published = Rc::default();
        let errors = Rc::new(RefCell::new(0));
        let mut store = CatalogStore::new();

        let sink = published.clone();
        store.bind_changed(move |available, favourites| {
            sink.borrow_mut().push((ids(available), ids(favourites)));
        });
        let error_sink = errors.clone();
        store.bind_error(move || *error_sink.borrow_mut() += 1);

        (store, published, errors)
    }

    fn lager_and_stout() -> Vec<Beer> {
        vec![Beer::new(1, "Lager"), Beer::new(2, "Stout")]
    }

    fn loaded_store() -> (CatalogStore, Published) {
        let (mut store, published, _) = recording_store();
        store.complete_initialize(Ok(lager_and_stout()));
        (store, published)
    }

    struct StubSource {
        beers: Option<Vec<Beer>>,
        calls: AtomicUsize,
    }

    impl BeerSource for StubSource {
        async fn fetch_beers(&self) -> Result<Vec<Beer>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.beers.clone().ok_or(TaproomError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }

    #[test]
    fn fetch_publishes_everything_as_available() {
        let (store, published) = loaded_store();

        assert_eq!(store.state(), FetchState::Ready);
        assert_eq!(names(store.available()), vec!["Lager", "Stout"]);
        assert!(store.favourites().is_empty());
        assert_eq!(*published.borrow(), vec![(vec![1, 2], vec![])]);
    }

    #[test]
    fn fetch_failure_fires_error_and_stays_empty() {
        let (mut store, published, errors) = recording_store();
        store.complete_initialize(Err(TaproomError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
        }));

        assert_eq!(store.state(), FetchState::Failed);
        assert_eq!(*errors.borrow(), 1);
        assert!(published.borrow().is_empty());
        assert!(store.available().is_empty());
        assert!(store.favourites().is_empty());
    }

    #[test]
    fn only_first_fetch_outcome_is_applied() {
        let (mut store, published) = loaded_store();
        store.complete_initialize(Ok(vec![Beer::new(9, "Porter")]));

        assert_eq!(ids(store.available()), vec![1, 2]);
        assert_eq!(published.borrow().len(), 1);
    }

    #[test]
    fn add_moves_beer_to_favourites() {
        let (mut store, published) = loaded_store();
        store.add_to_favourites(BeerId(2));

        assert_eq!(names(store.available()), vec!["Lager"]);
        assert_eq!(names(store.favourites()), vec!["Stout"]);
        assert_eq!(published.borrow().last(), Some(&(vec![1], vec![2])));
    }

    #[test]
    fn add_of_unknown_id_still_publishes() {
        let (mut store, published) = loaded_store();
        store.add_to_favourites(BeerId(42));

        assert_eq!(published.borrow().len(), 2);
        assert_eq!(published.borrow().last(), Some(&(vec![1, 2], vec![])));
    }

    #[test]
    fn add_of_existing_favourite_does_not_duplicate() {
        let (mut store, _) = loaded_store();
        store.add_to_favourites(BeerId(1));
        store.add_to_favourites(BeerId(1));

        assert_eq!(ids(store.favourites()), vec![1]);
        assert_eq!(ids(store.available()), vec![2]);
    }

    #[test]
    fn remove_restores_sorted_order() {
        let (mut store, published, _) = recording_store();
        store.complete_initialize(Ok(vec![
            Beer::new(1, "Lager"),
            Beer::new(2, "Stout"),
            Beer::new(3, "Porter"),
        ]));
        store.add_to_favourites(BeerId(3));
        store.add_to_favourites(BeerId(1));
        assert_eq!(ids(store.favourites()), vec![1, 3]);

        store.remove_from_favourites(BeerId(3));
        assert_eq!(ids(store.available()), vec![2, 3]);
        assert_eq!(ids(store.favourites()), vec![1]);
        assert_eq!(published.borrow().last(), Some(&(vec![2, 3], vec![1])));
    }

    #[test]
    fn remove_of_non_favourite_is_noop() {
        let (mut store, published) = loaded_store();
        store.remove_from_favourites(BeerId(1));

        assert_eq!(ids(store.available()), vec![1, 2]);
        assert!(store.favourites().is_empty());
        assert_eq!(published.borrow().len(), 2);
    }

    #[test]
    fn search_filters_both_lists() {
        let (mut store, published) = loaded_store();
        store.add_to_favourites(BeerId(2));
        store.search("La");
        assert_eq!(published.borrow().last(), Some(&(vec![1], vec![])));

        store.search("out");
        assert_eq!(published.borrow().last(), Some(&(vec![], vec![2])));
    }

    #[test]
    fn search_is_case_sensitive() {
        let (mut store, published) = loaded_store();
        store.search("lager");
        assert_eq!(published.borrow().last(), Some(&(vec![], vec![])));
    }

    #[test]
    fn empty_search_publishes_full_lists() {
        let (mut store, published) = loaded_store();
        store.search("Stout");
        store.search("");
        assert_eq!(published.borrow().last(), Some(&(vec![1, 2], vec![])));
    }

    #[test]
    fn search_does_not_mutate() {
        let (mut store, _) = loaded_store();
        store.add_to_favourites(BeerId(1));
        for text in ["La", "x", "Stout", ""] {
            store.search(text);
        }
        assert_eq!(ids(store.available()), vec![2]);
        assert_eq!(ids(store.favourites()), vec![1]);
    }

    #[test]
    fn rebinding_replaces_previous_observer() {
        let (mut store, first) = loaded_store();
        let second: Published = Rc::default();
        let sink = second.clone();
        store.bind_changed(move |a, f| sink.borrow_mut().push((ids(a), ids(f))));

        store.add_to_favourites(BeerId(1));
        assert_eq!(first.borrow().len(), 1);
        assert_eq!(second.borrow().len(), 1);
    }

    #[tokio::test]
    async fn initialize_fetches_exactly_once() {
        let source = StubSource {
            beers: Some(lager_and_stout()),
            calls: AtomicUsize::new(0),
        };
        let (mut store, published, _) = recording_store();

        store.initialize(&source).await;
        store.initialize(&source).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(published.borrow().len(), 1);
        assert_eq!(ids(store.available()), vec![1, 2]);
    }

    #[tokio::test]
    async fn initialize_reports_source_failure() {
        let source = StubSource {
            beers: None,
            calls: AtomicUsize::new(0),
        };
        let (mut store, published, errors) = recording_store();

        store.initialize(&source).await;

        assert_eq!(*errors.borrow(), 1);
        assert!(published.borrow().is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(i64),
        Remove(i64),
        Search(String),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0i64..12).prop_map(Op::Add),
            (0i64..12).prop_map(Op::Remove),
            "[A-Za-z]{0,2}".prop_map(Op::Search),
        ]
    }

    proptest! {
        #[test]
        fn lists_stay_disjoint_and_sorted(
            fetched in proptest::collection::btree_set(0i64..10, 0..8),
            ops in proptest::collection::vec(op_strategy(), 0..24),
        ) {
            let beers: Vec<Beer> = fetched
                .iter()
                .map(|id| Beer::new(*id, format!("Beer{}", id)))
                .collect();
            let (mut store, published, _) = recording_store();
            store.complete_initialize(Ok(beers));

            for op in ops {
                let mutation = !matches!(op, Op::Search(_));
                match op {
                    Op::Add(id) => store.add_to_favourites(BeerId(id)),
                    Op::Remove(id) => store.remove_from_favourites(BeerId(id)),
                    Op::Search(text) => store.search(&text),
                }

                let available: BTreeSet<i64> = ids(store.available()).into_iter().collect();
                let favourites: BTreeSet<i64> = ids(store.favourites()).into_iter().collect();
                prop_assert!(available.is_disjoint(&favourites));
                let union: BTreeSet<i64> = available.union(&favourites).copied().collect();
                prop_assert_eq!(&union, &fetched);

                if mutation {
                    let last = published.borrow().last().cloned().unwrap();
                    prop_assert!(last.0.windows(2).all(|w| w[0] <= w[1]));
                    prop_assert!(last.1.windows(2).all(|w| w[0] <= w[1]));
                }
            }
        }

        #[test]
        fn add_then_remove_round_trips(
            fetched in proptest::collection::btree_set(0i64..10, 1..8),
            pick in any::<prop::sample::Index>(),
        ) {
            let ordered: Vec<i64> = fetched.iter().copied().collect();
            let id = ordered[pick.index(ordered.len())];
            let beers: Vec<Beer> = ordered.iter().map(|id| Beer::new(*id, "x")).collect();
            let (mut store, _, _) = recording_store();
            store.complete_initialize(Ok(beers));

            store.add_to_favourites(BeerId(id));
            store.remove_from_favourites(BeerId(id));

            prop_assert_eq!(ids(store.available()), ordered);
            prop_assert!(store.favourites().is_empty());
        }

        #[test]
        fn search_has_no_false_matches(
            names in proptest::collection::vec("[a-cA-C]{0,4}", 0..8),
            favourite_mask in proptest::collection::vec(any::<bool>(), 8),
            text in "[a-cA-C]{1,2}",
        ) {
            let beers: Vec<Beer> = names
                .iter()
                .enumerate()
                .map(|(i, name)| Beer::new(i as i64, name.clone()))
                .collect();
            let (mut store, published, _) = recording_store();
            store.complete_initialize(Ok(beers));
            for (i, favourite) in favourite_mask.iter().enumerate().take(names.len()) {
                if *favourite {
                    store.add_to_favourites(BeerId(i as i64));
                }
            }

            store.search(&text);
            let (shown_available, shown_favourites) = published.borrow().last().cloned().unwrap();

            let expect = |beers: &[Beer]| -> Vec<i64> {
                beers.iter().filter(|b| b.name.contains(text.as_str())).map(|b| b.id.0).collect()
            };
            prop_assert_eq!(shown_available, expect(store.available()));
            prop_assert_eq!(shown_favourites, expect(store.favourites()));
        }
    }
}
