//! Catalog filter state.
//!
//! The URL is the only source of truth. The controller remembers the last
//! URL the router reported and derives the selection from it; mutators
//! compute the next URL and hand it to the navigator without touching the
//! remembered URL. The new state comes back through `on_external_change`.

use contracts::domain::a001_catalog::filter::{FilterSelection, PriceRange};
use contracts::shared::query_string::join_path_and_query;

use crate::shared::navigator::Navigator;

pub struct FilterController<N: Navigator> {
    navigator: N,
    pathname: String,
    search: String,
}

impl<N: Navigator> FilterController<N> {
    pub fn new(navigator: N, pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            navigator,
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    /// Called whenever the router reports a URL change, including the ones
    /// this controller requested.
    pub fn on_external_change(&mut self, pathname: &str, search: &str) {
        self.pathname = pathname.to_string();
        self.search = search.to_string();
    }

    pub fn selection(&self) -> FilterSelection {
        FilterSelection::from_query(&self.search)
    }

    pub fn toggle_category(&self, id: &str) {
        let mut next = self.selection();
        next.toggle_category(id);
        self.write(&next);
    }

    pub fn toggle_seller(&self, id: &str) {
        let mut next = self.selection();
        next.toggle_seller(id);
        self.write(&next);
    }

    /// `None` clears the price filter.
    pub fn set_price(&self, price: Option<PriceRange>) {
        let mut next = self.selection();
        next.set_price(price);
        self.write(&next);
    }

    /// Drop the whole query string, unrelated keys included.
    pub fn clear(&self) {
        log::debug!("Clearing catalog filters");
        self.navigator.replace(&self.pathname);
    }

    fn write(&self, selection: &FilterSelection) {
        let query = selection.merge_into_query(&self.search);
        self.navigator
            .replace(&join_path_and_query(&self.pathname, &query));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::navigator::testing::{NavCall, RecordingNavigator};
    use std::collections::BTreeSet;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    /// Feed the last requested URL back, as the router would.
    fn follow(controller: &mut FilterController<&RecordingNavigator>, nav: &RecordingNavigator) {
        let url = nav.last_replace().expect("no navigation requested");
        let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
        controller.on_external_change(path, query);
    }

    #[test]
    fn test_selection_is_derived_from_url() {
        let nav = RecordingNavigator::default();
        let controller =
            FilterController::new(&nav, "/catalog", "?categories=c1&categories=c2&price=75-150");
        let selection = controller.selection();
        assert_eq!(selection.categories, set(&["c1", "c2"]));
        assert!(selection.sellers.is_empty());
        assert_eq!(selection.price, Some(PriceRange::From75To150));
        assert!(nav.calls().is_empty());
    }

    #[test]
    fn test_each_mutator_replaces_once() {
        let nav = RecordingNavigator::default();
        let controller = FilterController::new(&nav, "/catalog", "");

        controller.toggle_category("pottery");
        assert_eq!(nav.calls().len(), 1);
        controller.toggle_seller("s1");
        assert_eq!(nav.calls().len(), 2);
        controller.set_price(Some(PriceRange::Under25));
        assert_eq!(nav.calls().len(), 3);
        controller.clear();
        assert_eq!(nav.calls().len(), 4);

        assert!(nav
            .calls()
            .iter()
            .all(|call| matches!(call, NavCall::Replace(_))));
    }

    #[test]
    fn test_mutators_do_not_touch_local_state() {
        let nav = RecordingNavigator::default();
        let controller = FilterController::new(&nav, "/catalog", "");
        controller.toggle_category("pottery");
        assert!(controller.selection().is_empty());
        assert_eq!(nav.last_replace().as_deref(), Some("/catalog?categories=pottery"));
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let nav = RecordingNavigator::default();
        let mut controller = FilterController::new(&nav, "/catalog", "categories=a");
        let original = controller.selection();

        controller.toggle_category("b");
        follow(&mut controller, &nav);
        assert_eq!(controller.selection().categories, set(&["a", "b"]));

        controller.toggle_category("b");
        follow(&mut controller, &nav);
        assert_eq!(controller.selection(), original);

        controller.toggle_seller("s1");
        follow(&mut controller, &nav);
        controller.toggle_seller("s1");
        follow(&mut controller, &nav);
        assert_eq!(controller.selection(), original);
    }

    #[test]
    fn test_on_external_change_is_idempotent() {
        let nav = RecordingNavigator::default();
        let mut controller = FilterController::new(&nav, "/catalog", "");

        controller.on_external_change("/catalog", "sellers=s1&price=under-25");
        let first = controller.selection();
        controller.on_external_change("/catalog", "sellers=s1&price=under-25");
        assert_eq!(controller.selection(), first);
        assert_eq!(first.sellers, set(&["s1"]));
    }

    #[test]
    fn test_external_change_replaces_state_wholesale() {
        let nav = RecordingNavigator::default();
        let mut controller = FilterController::new(&nav, "/catalog", "categories=a&price=above-150");
        controller.on_external_change("/catalog", "sellers=s2");
        let selection = controller.selection();
        assert!(selection.categories.is_empty());
        assert_eq!(selection.price, None);
        assert_eq!(selection.sellers, set(&["s2"]));
    }

    #[test]
    fn test_url_projection_tracks_every_navigation() {
        let nav = RecordingNavigator::default();
        let mut controller = FilterController::new(&nav, "/catalog", "");

        controller.toggle_category("pottery");
        controller.set_price(Some(PriceRange::Under25));
        let url = nav.last_replace().expect("no navigation requested");
        let (_, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
        follow(&mut controller, &nav);

        let from_url = FilterSelection::from_query(query);
        assert_eq!(from_url, controller.selection());
        assert_eq!(from_url.price, Some(PriceRange::Under25));
        assert!(from_url.categories.is_empty());

        assert_eq!(
            FilterSelection::from_query("categories=b&categories=a"),
            FilterSelection::from_query("categories=a&categories=b")
        );
    }

    #[test]
    fn test_unrelated_params_pass_through() {
        let nav = RecordingNavigator::default();
        let controller = FilterController::new(&nav, "/catalog", "?page=2&categories=a&q=mug");
        controller.toggle_seller("s1");
        assert_eq!(
            nav.last_replace().as_deref(),
            Some("/catalog?page=2&q=mug&categories=a&sellers=s1")
        );
    }

    #[test]
    fn test_set_price_and_clear_price() {
        let nav = RecordingNavigator::default();
        let mut controller = FilterController::new(&nav, "/catalog", "");

        controller.set_price(Some(PriceRange::From25To75));
        assert_eq!(nav.last_replace().as_deref(), Some("/catalog?price=25-75"));
        follow(&mut controller, &nav);

        controller.set_price(Some(PriceRange::Above150));
        assert_eq!(nav.last_replace().as_deref(), Some("/catalog?price=above-150"));
        follow(&mut controller, &nav);

        controller.set_price(None);
        assert_eq!(nav.last_replace().as_deref(), Some("/catalog"));
    }

    #[test]
    fn test_clear_drops_every_key() {
        let nav = RecordingNavigator::default();
        let mut controller = FilterController::new(
            &nav,
            "/catalog",
            "categories=a&sellers=s1&price=under-25&page=3",
        );
        controller.clear();
        assert_eq!(nav.last_replace().as_deref(), Some("/catalog"));

        follow(&mut controller, &nav);
        assert!(controller.selection().is_empty());
    }
}
