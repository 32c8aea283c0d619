//! Catalog State
//!
//! The client-side state that survives reloads: like/dislike marks, cart
//! membership and the browse history. Mutations go through [`Action`] so the
//! caller knows which persisted slice to rewrite afterwards.

use std::collections::BTreeMap;

use crate::config::{PreferenceMode, Rules};
use crate::models::{HistoryEntry, Mark, ProductId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub marks: BTreeMap<ProductId, Mark>,
    /// Insertion-ordered, no duplicates
    pub cart: Vec<ProductId>,
    /// Most recent first
    pub history: Vec<HistoryEntry>,
}

/// Persisted slice of [`CatalogState`], one storage key each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    Marks,
    Cart,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleLike(ProductId),
    ToggleDislike(ProductId),
    ToggleCart(ProductId),
    RemoveFromCart(ProductId),
    /// `at` is epoch milliseconds
    RecordView { id: ProductId, at: i64 },
    ClearHistory,
}

impl Action {
    pub fn slice(&self) -> Slice {
        match self {
            Action::ToggleLike(_) | Action::ToggleDislike(_) => Slice::Marks,
            Action::ToggleCart(_) | Action::RemoveFromCart(_) => Slice::Cart,
            Action::RecordView { .. } | Action::ClearHistory => Slice::History,
        }
    }
}

impl CatalogState {
    /// Apply an action. Returns true when the state changed.
    pub fn apply(&mut self, action: Action, rules: &Rules) -> bool {
        match action {
            Action::ToggleLike(id) => self.toggle_mark(id, true, rules.preference_mode),
            Action::ToggleDislike(id) => self.toggle_mark(id, false, rules.preference_mode),
            Action::ToggleCart(id) => {
                if !self.remove_from_cart(id) {
                    self.cart.push(id);
                }
                true
            }
            Action::RemoveFromCart(id) => self.remove_from_cart(id),
            Action::RecordView { id, at } => {
                self.history.insert(0, HistoryEntry { id, ts: at });
                self.history.truncate(rules.history_limit);
                true
            }
            Action::ClearHistory => {
                let changed = !self.history.is_empty();
                self.history.clear();
                changed
            }
        }
    }

    pub fn mark(&self, id: ProductId) -> Option<Mark> {
        self.marks.get(&id).copied()
    }

    pub fn is_liked(&self, id: ProductId) -> bool {
        self.mark(id).is_some_and(Mark::liked)
    }

    pub fn in_cart(&self, id: ProductId) -> bool {
        self.cart.contains(&id)
    }

    fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let before = self.cart.len();
        self.cart.retain(|&c| c != id);
        self.cart.len() != before
    }

    fn toggle_mark(&mut self, id: ProductId, like: bool, mode: PreferenceMode) -> bool {
        let current = self.mark(id);
        let liked = current.is_some_and(Mark::liked);
        let disliked = current.is_some_and(Mark::disliked);

        let next = match (mode, like) {
            (PreferenceMode::Exclusive, true) => Mark::from_flags(!liked, false),
            (PreferenceMode::Exclusive, false) => Mark::from_flags(false, !disliked),
            (PreferenceMode::Independent, true) => Mark::from_flags(!liked, disliked),
            (PreferenceMode::Independent, false) => Mark::from_flags(liked, !disliked),
        };

        match next {
            Some(mark) => {
                self.marks.insert(id, mark);
            }
            None => {
                self.marks.remove(&id);
            }
        }
        current != next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Rules {
        Rules::default()
    }

    fn independent() -> Rules {
        Rules {
            preference_mode: PreferenceMode::Independent,
            ..Rules::default()
        }
    }

    #[test]
    fn test_toggle_like_twice_restores() {
        let mut state = CatalogState::default();
        assert!(state.apply(Action::ToggleLike(3), &rules()));
        assert_eq!(state.mark(3), Some(Mark::Like));
        assert!(state.apply(Action::ToggleLike(3), &rules()));
        assert_eq!(state, CatalogState::default());
    }

    #[test]
    fn test_toggle_like_from_disliked() {
        let mut state = CatalogState::default();
        state.apply(Action::ToggleDislike(3), &rules());
        state.apply(Action::ToggleLike(3), &rules());
        assert_eq!(state.mark(3), Some(Mark::Like));
        assert!(!state.mark(3).is_some_and(Mark::disliked));
        // and back: liked -> toggled off clears everything
        state.apply(Action::ToggleLike(3), &rules());
        assert_eq!(state.mark(3), None);
    }

    #[test]
    fn test_like_then_dislike_leaves_disliked_only() {
        let mut state = CatalogState::default();
        state.apply(Action::ToggleLike(8), &rules());
        state.apply(Action::ToggleDislike(8), &rules());
        assert_eq!(state.mark(8), Some(Mark::Dislike));
        assert!(!state.is_liked(8));
    }

    #[test]
    fn test_independent_marks() {
        let mut state = CatalogState::default();
        state.apply(Action::ToggleLike(8), &independent());
        state.apply(Action::ToggleDislike(8), &independent());
        assert_eq!(state.mark(8), Some(Mark::Both));
        state.apply(Action::ToggleLike(8), &independent());
        assert_eq!(state.mark(8), Some(Mark::Dislike));
        state.apply(Action::ToggleDislike(8), &independent());
        assert!(state.marks.is_empty());
    }

    #[test]
    fn test_exclusive_clears_loaded_both() {
        let mut state = CatalogState::default();
        state.marks.insert(4, Mark::Both);
        state.apply(Action::ToggleLike(4), &rules());
        assert_eq!(state.mark(4), None);
    }

    #[test]
    fn test_toggle_cart_scenario() {
        let mut state = CatalogState::default();
        state.apply(Action::ToggleCart(42), &rules());
        assert_eq!(state.cart, vec![42]);
        state.apply(Action::ToggleCart(42), &rules());
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_toggle_cart_keeps_order() {
        let mut state = CatalogState::default();
        for id in [5, 1, 9] {
            state.apply(Action::ToggleCart(id), &rules());
        }
        state.apply(Action::ToggleCart(1), &rules());
        assert_eq!(state.cart, vec![5, 9]);
        state.apply(Action::ToggleCart(1), &rules());
        assert_eq!(state.cart, vec![5, 9, 1]);
    }

    #[test]
    fn test_remove_from_cart() {
        let mut state = CatalogState::default();
        state.apply(Action::ToggleCart(7), &rules());
        assert!(state.apply(Action::RemoveFromCart(7), &rules()));
        assert!(!state.in_cart(7));
        // unconditional: removing again is a no-op, not an add
        assert!(!state.apply(Action::RemoveFromCart(7), &rules()));
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_record_view_caps_history() {
        let mut state = CatalogState::default();
        for i in 0..201 {
            state.apply(Action::RecordView { id: i, at: 1_000 + i as i64 }, &rules());
        }
        assert_eq!(state.history.len(), 200);
        assert_eq!(state.history[0], HistoryEntry { id: 200, ts: 1_200 });
        assert_eq!(state.history[199].id, 1);
        assert!(state.history.windows(2).all(|w| w[0].ts > w[1].ts));
    }

    #[test]
    fn test_record_view_custom_limit() {
        let rules = Rules {
            history_limit: 2,
            ..Rules::default()
        };
        let mut state = CatalogState::default();
        for id in [1, 2, 3] {
            state.apply(Action::RecordView { id, at: id as i64 }, &rules);
        }
        let ids: Vec<_> = state.history.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_clear_history() {
        let mut state = CatalogState::default();
        assert!(!state.apply(Action::ClearHistory, &rules()));
        state.apply(Action::RecordView { id: 1, at: 10 }, &rules());
        assert!(state.apply(Action::ClearHistory, &rules()));
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_action_slices() {
        assert_eq!(Action::ToggleDislike(1).slice(), Slice::Marks);
        assert_eq!(Action::RemoveFromCart(1).slice(), Slice::Cart);
        assert_eq!(Action::ClearHistory.slice(), Slice::History);
    }
}
