//! Services step: a multi-select accumulator rather than a single value.
use crate::SelectionStorage;
use crate::card::{CardGroup, FollowUp, SelectOutcome};
use crate::store::{SelectionKey, SelectionStore};

/// One row of the "selected services" list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub id: String,
    pub label: String,
}

impl ServiceEntry {
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: format!("✅ {id}"),
        }
    }
}

/// Ordered, non de-duplicated list of chosen services.
///
/// Only the "no services" sentinel is persisted; the list itself lives with
/// the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceList {
    entries: Vec<ServiceEntry>,
    none_selected: bool,
    panel_visible: bool,
}

impl ServiceList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn none_selected(&self) -> bool {
        self.none_selected
    }

    #[must_use]
    pub const fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `id` and clear the "no services" marker. Returns whether the
    /// continue control should be revealed (always).
    ///
    /// A previously stored `aucun_service` sentinel is left in storage.
    pub fn add(&mut self, id: &str) -> bool {
        self.none_selected = false;
        self.entries.push(ServiceEntry::new(id));
        self.panel_visible = true;
        true
    }

    /// Remove every entry whose label contains `id`.
    ///
    /// This is a substring match: removing `"1"` also removes `"12"`. Only the
    /// `"✅ {id}"` label is searched, not the caption of the entry's remove
    /// button, so a caption fragment such as `"Retirer"` matches nothing.
    /// Returns the number of entries removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.label.contains(id));
        before - self.entries.len()
    }

    /// Remove the entries added for exactly `id`.
    pub fn remove_exact(&mut self, id: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before - self.entries.len()
    }

    /// Drop every entry, hide the list, mark "no services" and persist the
    /// sentinel. Returns whether the continue control should be revealed.
    pub fn select_none<S: SelectionStorage>(&mut self, store: &SelectionStore<S>) -> bool {
        self.none_selected = true;
        self.entries.clear();
        self.panel_visible = false;
        store.record_none(SelectionKey::Services);
        true
    }
}

/// The selection held by a wizard step: one card of a group, or an
/// accumulated list of services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionKind {
    Single(CardGroup),
    Multi(ServiceList),
}

impl SelectionKind {
    #[must_use]
    pub const fn key(&self) -> SelectionKey {
        match self {
            Self::Single(group) => group.key(),
            Self::Multi(_) => SelectionKey::Services,
        }
    }

    /// Whether the user has made any choice, "none" included.
    #[must_use]
    pub fn has_choice(&self) -> bool {
        match self {
            Self::Single(group) => group.marked_count() > 0,
            Self::Multi(list) => list.none_selected() || !list.is_empty(),
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        match self {
            Self::Single(group) => group.is_selected(id),
            Self::Multi(list) => list.entries().iter().any(|entry| entry.id == id),
        }
    }

    #[must_use]
    pub const fn none_selected(&self) -> bool {
        match self {
            Self::Single(group) => group.none_selected(),
            Self::Multi(list) => list.none_selected(),
        }
    }

    /// The marked card of a single-choice group.
    #[must_use]
    pub fn selected_card(&self) -> Option<&str> {
        match self {
            Self::Single(group) => group.selected_card(),
            Self::Multi(_) => None,
        }
    }

    /// Select a card, or append a service.
    pub fn choose<S: SelectionStorage>(
        &mut self,
        id: &str,
        store: &SelectionStore<S>,
    ) -> SelectOutcome {
        match self {
            Self::Single(group) => group.select(id, store),
            Self::Multi(list) => {
                let marked = Some(list.len());
                SelectOutcome {
                    marked,
                    continue_revealed: list.add(id),
                    follow_up: FollowUp::Nothing,
                }
            }
        }
    }

    /// Pick the step's "none" option and persist its sentinel.
    pub fn choose_none<S: SelectionStorage>(&mut self, store: &SelectionStore<S>) -> SelectOutcome {
        match self {
            Self::Single(group) => group.select_none(store),
            Self::Multi(list) => SelectOutcome {
                marked: None,
                continue_revealed: list.select_none(store),
                follow_up: FollowUp::Nothing,
            },
        }
    }

    /// Re-mark a stored choice. Returns whether the step now has one.
    ///
    /// The services list is not persisted, so a multi selection always
    /// starts empty.
    pub fn restore<S: SelectionStorage>(&mut self, store: &SelectionStore<S>) -> bool {
        if let Self::Single(group) = self {
            group.restore(store);
        }
        self.has_choice()
    }
}
