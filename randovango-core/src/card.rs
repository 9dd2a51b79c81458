//! Single-choice card groups (hiking routes, overnight spots).
//!
//! A group is built once when a step renders, from the identifiers of its
//! cards. Selection clears every card before marking the chosen one, so at
//! most one card of a group (or its "none" option) is ever marked.
use std::collections::HashMap;

use crate::SelectionStorage;
use crate::store::{Selection, SelectionKey, SelectionStore};

/// What is currently marked in a group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    Unset,
    Card(String),
    NoneOption,
}

/// Dependent panel change to run once a selection has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowUp {
    #[default]
    Nothing,
    ShowNightWeather,
    HideNightWeather,
}

/// Result of applying a selection to a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOutcome {
    /// Index of the card now marked, `None` when the identifier matched no card
    /// or the "none" option was chosen.
    pub marked: Option<usize>,
    pub continue_revealed: bool,
    pub follow_up: FollowUp,
}

impl SelectOutcome {
    /// Nothing marked, nothing revealed.
    #[must_use]
    pub const fn unchanged() -> Self {
        Self {
            marked: None,
            continue_revealed: false,
            follow_up: FollowUp::Nothing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGroup {
    key: SelectionKey,
    cards: Vec<String>,
    index: HashMap<String, usize>,
    has_none_option: bool,
    choice: Choice,
    on_select: FollowUp,
    on_select_none: FollowUp,
}

impl CardGroup {
    #[must_use]
    pub fn new<I, T>(key: SelectionKey, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let cards: Vec<String> = ids.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(cards.len());
        for (i, id) in cards.iter().enumerate() {
            // First card wins when the markup repeats an identifier.
            index.entry(id.clone()).or_insert(i);
        }
        Self {
            key,
            cards,
            index,
            has_none_option: false,
            choice: Choice::Unset,
            on_select: FollowUp::Nothing,
            on_select_none: FollowUp::Nothing,
        }
    }

    /// Hiking routes, with the "no hiking" card.
    #[must_use]
    pub fn hiking<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(SelectionKey::Hiking, ids).with_none_option()
    }

    /// Overnight spots, with the "other accommodation" option. Choosing a spot
    /// shows the night-weather panel and choosing none hides it.
    #[must_use]
    pub fn spot<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(SelectionKey::Spot, ids)
            .with_none_option()
            .with_follow_ups(FollowUp::ShowNightWeather, FollowUp::HideNightWeather)
    }

    #[must_use]
    pub const fn with_none_option(mut self) -> Self {
        self.has_none_option = true;
        self
    }

    #[must_use]
    pub const fn with_follow_ups(mut self, on_select: FollowUp, on_select_none: FollowUp) -> Self {
        self.on_select = on_select;
        self.on_select_none = on_select_none;
        self
    }

    #[must_use]
    pub const fn key(&self) -> SelectionKey {
        self.key
    }

    #[must_use]
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    #[must_use]
    pub const fn choice(&self) -> &Choice {
        &self.choice
    }

    #[must_use]
    pub const fn has_none_option(&self) -> bool {
        self.has_none_option
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        matches!(&self.choice, Choice::Card(current) if current == id)
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<&str> {
        match &self.choice {
            Choice::Card(id) => Some(id),
            Choice::Unset | Choice::NoneOption => None,
        }
    }

    #[must_use]
    pub const fn none_selected(&self) -> bool {
        matches!(self.choice, Choice::NoneOption)
    }

    /// Number of marked elements in the group, the "none" option included.
    #[must_use]
    pub const fn marked_count(&self) -> usize {
        match self.choice {
            Choice::Unset => 0,
            Choice::Card(_) | Choice::NoneOption => 1,
        }
    }

    /// Mark the card for `id`, clear the "none" option and persist `id`.
    ///
    /// An identifier with no matching card leaves every card cleared; the value
    /// is still persisted and the continue control still revealed.
    pub fn select<S: SelectionStorage>(
        &mut self,
        id: &str,
        store: &SelectionStore<S>,
    ) -> SelectOutcome {
        self.choice = Choice::Unset;
        let marked = self.position(id);
        if marked.is_some() {
            self.choice = Choice::Card(id.to_string());
        } else {
            log::debug!("no {} card for id {id}", self.key.as_str());
        }
        store.record(self.key, id);
        SelectOutcome {
            marked,
            continue_revealed: true,
            follow_up: self.on_select,
        }
    }

    /// Mark the "none" option, clear every card and persist the sentinel.
    pub fn select_none<S: SelectionStorage>(&mut self, store: &SelectionStore<S>) -> SelectOutcome {
        self.choice = if self.has_none_option {
            Choice::NoneOption
        } else {
            Choice::Unset
        };
        store.record_none(self.key);
        SelectOutcome {
            marked: None,
            continue_revealed: true,
            follow_up: self.on_select_none,
        }
    }

    /// Re-mark whatever was stored on a previous visit. Returns whether a
    /// choice was restored.
    pub fn restore<S: SelectionStorage>(&mut self, store: &SelectionStore<S>) -> bool {
        self.choice = match store.stored(self.key) {
            Some(Selection::Card(id)) if self.index.contains_key(&id) => Choice::Card(id),
            Some(Selection::None) if self.has_none_option => Choice::NoneOption,
            _ => Choice::Unset,
        };
        self.choice != Choice::Unset
    }
}
