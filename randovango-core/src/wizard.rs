//! Explicit wizard state passed to every step.
use crate::SelectionStorage;
use crate::card::{CardGroup, FollowUp, SelectOutcome};
use crate::city::{CityChange, CityOption};
use crate::links;
use crate::services::{SelectionKind, ServiceList};
use crate::store::{SelectionKey, SelectionStore};

/// Screens of the wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    #[default]
    City,
    Hiking,
    Spot,
    Services,
    Results,
}

impl WizardStep {
    pub const ALL: [Self; 5] = [
        Self::City,
        Self::Hiking,
        Self::Spot,
        Self::Services,
        Self::Results,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::City => "/step1",
            Self::Hiking => "/step2",
            Self::Spot => "/step3",
            Self::Services => "/step4",
            Self::Results => "/results",
        }
    }

    /// 1-based position, `None` for the results page.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::City => Some(1),
            Self::Hiking => Some(2),
            Self::Spot => Some(3),
            Self::Services => Some(4),
            Self::Results => None,
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::City => Some(Self::Hiking),
            Self::Hiking => Some(Self::Spot),
            Self::Spot => Some(Self::Services),
            Self::Services => Some(Self::Results),
            Self::Results => None,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::City => None,
            Self::Hiking => Some(Self::City),
            Self::Spot => Some(Self::Hiking),
            Self::Services => Some(Self::Spot),
            Self::Results => Some(Self::Services),
        }
    }
}

/// Heading variants of the services step, picked from earlier choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicesCopy {
    /// Stored hiking is "no hiking": the day is a rest day.
    pub rest_day: bool,
    /// Stored spot is "other accommodation".
    pub own_stay: bool,
}

impl ServicesCopy {
    pub fn for_store<S: SelectionStorage>(store: &SelectionStore<S>) -> Self {
        Self {
            rest_day: store.is_none_sentinel(SelectionKey::Hiking),
            own_stay: store.is_none_sentinel(SelectionKey::Spot),
        }
    }

    #[must_use]
    pub const fn title_key(self) -> &'static str {
        if self.rest_day {
            "services.title_rest_day"
        } else {
            "services.title"
        }
    }

    #[must_use]
    pub const fn subtitle_key(self) -> &'static str {
        if self.own_stay {
            "services.subtitle_stay"
        } else {
            "services.subtitle"
        }
    }
}

impl SelectionKind {
    /// The selection a step works on; the city and results pages have none.
    fn for_step<I, T>(step: WizardStep, card_ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        match step {
            WizardStep::Hiking => Some(Self::Single(CardGroup::hiking(card_ids))),
            WizardStep::Spot => Some(Self::Single(CardGroup::spot(card_ids))),
            WizardStep::Services => Some(Self::Multi(ServiceList::new())),
            WizardStep::City | WizardStep::Results => None,
        }
    }
}

/// State of one wizard page, with persistence behind `S`.
#[derive(Debug, Clone)]
pub struct WizardState<S: SelectionStorage> {
    store: SelectionStore<S>,
    step: WizardStep,
    city: Option<CityOption>,
    selection: Option<SelectionKind>,
    continue_visible: bool,
    night_weather_visible: bool,
}

impl<S: SelectionStorage> WizardState<S> {
    pub fn new(storage: S, step: WizardStep) -> Self {
        Self {
            store: SelectionStore::new(storage),
            step,
            city: None,
            selection: SelectionKind::for_step(step, Vec::<String>::new()),
            continue_visible: false,
            night_weather_visible: false,
        }
    }

    /// Open `step` with the card identifiers it renders, re-marking whatever
    /// a previous visit stored.
    pub fn load<I, T>(storage: S, step: WizardStep, card_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut state = Self::new(storage, step);
        state.selection = SelectionKind::for_step(step, card_ids);
        if let Some(selection) = state.selection.as_mut() {
            state.continue_visible = selection.restore(&state.store);
        }
        state.night_weather_visible = step == WizardStep::Spot && state.selected_card().is_some();
        state
    }

    pub const fn store(&self) -> &SelectionStore<S> {
        &self.store
    }

    pub const fn step(&self) -> WizardStep {
        self.step
    }

    pub const fn city(&self) -> Option<&CityOption> {
        self.city.as_ref()
    }

    pub const fn selection(&self) -> Option<&SelectionKind> {
        self.selection.as_ref()
    }

    /// The hiking group, on the hiking step.
    pub fn hiking(&self) -> Option<&CardGroup> {
        self.card_group(SelectionKey::Hiking)
    }

    /// The spot group, on the spot step.
    pub fn spot(&self) -> Option<&CardGroup> {
        self.card_group(SelectionKey::Spot)
    }

    pub const fn services(&self) -> Option<&ServiceList> {
        match &self.selection {
            Some(SelectionKind::Multi(list)) => Some(list),
            _ => None,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.as_ref().is_some_and(|s| s.is_selected(id))
    }

    pub fn none_selected(&self) -> bool {
        self.selection.as_ref().is_some_and(SelectionKind::none_selected)
    }

    pub fn selected_card(&self) -> Option<&str> {
        self.selection.as_ref().and_then(SelectionKind::selected_card)
    }

    /// Whether the step's selection holds a choice. The city step counts once
    /// a city is current.
    pub fn has_choice(&self) -> bool {
        match &self.selection {
            Some(selection) => selection.has_choice(),
            None => self.city.is_some(),
        }
    }

    pub const fn continue_visible(&self) -> bool {
        self.continue_visible
    }

    pub const fn night_weather_visible(&self) -> bool {
        self.night_weather_visible
    }

    /// Make `option` the current city. A city is always chosen once the
    /// selector exists, so the continue control is shown.
    pub fn select_city(&mut self, option: CityOption) -> CityChange {
        let change = option.change();
        self.city = Some(option);
        self.continue_visible = true;
        change
    }

    pub fn select_hiking(&mut self, id: &str) -> SelectOutcome {
        self.choose(SelectionKey::Hiking, Some(id))
    }

    pub fn select_no_hiking(&mut self) -> SelectOutcome {
        self.choose(SelectionKey::Hiking, None)
    }

    pub fn select_spot(&mut self, id: &str) -> SelectOutcome {
        self.choose(SelectionKey::Spot, Some(id))
    }

    pub fn select_no_spot(&mut self) -> SelectOutcome {
        self.choose(SelectionKey::Spot, None)
    }

    pub fn add_service(&mut self, id: &str) -> SelectOutcome {
        self.choose(SelectionKey::Services, Some(id))
    }

    /// Substring removal, see [`ServiceList::remove`].
    ///
    /// The page does not call this; its remove buttons go through
    /// [`WizardState::remove_service_exact`].
    pub fn remove_service(&mut self, id: &str) -> usize {
        self.services_mut().map_or(0, |list| list.remove(id))
    }

    /// Remove the entries added for exactly `id`, as the entry's own remove
    /// button does.
    pub fn remove_service_exact(&mut self, id: &str) -> usize {
        self.services_mut().map_or(0, |list| list.remove_exact(id))
    }

    pub fn select_no_service(&mut self) -> SelectOutcome {
        self.choose(SelectionKey::Services, None)
    }

    #[must_use]
    pub fn services_copy(&self) -> ServicesCopy {
        ServicesCopy::for_store(&self.store)
    }

    #[must_use]
    pub fn hiking_map_url(&self, id: &str) -> String {
        links::hiking_map_url(id)
    }

    /// Spot detail map paired with the stored hiking.
    #[must_use]
    pub fn spot_map_url(&self, spot_id: &str) -> String {
        let hiking = self.store.raw(SelectionKey::Hiking);
        links::spot_map_url(spot_id, hiking.as_deref())
    }

    /// Step to navigate to, once the continue control is shown.
    #[must_use]
    pub fn next_step(&self) -> Option<WizardStep> {
        if self.continue_visible {
            self.step.next()
        } else {
            None
        }
    }

    fn card_group(&self, key: SelectionKey) -> Option<&CardGroup> {
        match &self.selection {
            Some(SelectionKind::Single(group)) if group.key() == key => Some(group),
            _ => None,
        }
    }

    fn services_mut(&mut self) -> Option<&mut ServiceList> {
        match &mut self.selection {
            Some(SelectionKind::Multi(list)) => Some(list),
            _ => None,
        }
    }

    /// Apply a choice (`None` for the "none" option) to the step's selection
    /// when it is stored under `key`.
    fn choose(&mut self, key: SelectionKey, id: Option<&str>) -> SelectOutcome {
        let outcome = match self.selection.as_mut() {
            Some(selection) if selection.key() == key => match id {
                Some(id) => selection.choose(id, &self.store),
                None => selection.choose_none(&self.store),
            },
            _ => {
                log::warn!(
                    "ignoring {} selection on the {:?} step",
                    key.as_str(),
                    self.step
                );
                SelectOutcome::unchanged()
            }
        };
        self.continue_visible |= outcome.continue_revealed;
        match outcome.follow_up {
            FollowUp::ShowNightWeather => self.night_weather_visible = true,
            FollowUp::HideNightWeather => self.night_weather_visible = false,
            FollowUp::Nothing => {}
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    #[test]
    fn steps_chain_in_order() {
        let mut step = WizardStep::City;
        let mut paths = vec![step.path()];
        while let Some(next) = step.next() {
            assert_eq!(next.previous(), Some(step));
            step = next;
            paths.push(step.path());
        }
        assert_eq!(paths, ["/step1", "/step2", "/step3", "/step4", "/results"]);
    }

    #[test]
    fn continue_hidden_until_a_choice_is_made() {
        let mut state = WizardState::load(MemoryStorage::new(), WizardStep::Hiking, ["1", "2"]);
        assert!(!state.continue_visible());
        assert_eq!(state.next_step(), None);
        state.select_hiking("2");
        assert!(state.continue_visible());
        assert_eq!(state.next_step(), Some(WizardStep::Spot));
    }

    #[test]
    fn load_restores_a_stored_spot() {
        let storage = MemoryStorage::new().with_entry(SelectionKey::Spot, "12");
        let state = WizardState::load(storage, WizardStep::Spot, ["11", "12"]);
        assert!(state.is_selected("12"));
        assert_eq!(state.spot().and_then(CardGroup::selected_card), Some("12"));
        assert!(state.has_choice());
        assert!(state.continue_visible());
        assert!(state.night_weather_visible());
    }

    #[test]
    fn each_step_holds_its_own_selection_kind() {
        let hiking = WizardState::new(MemoryStorage::new(), WizardStep::Hiking);
        assert_eq!(
            hiking.selection().map(SelectionKind::key),
            Some(SelectionKey::Hiking)
        );
        assert!(hiking.spot().is_none());
        let services = WizardState::new(MemoryStorage::new(), WizardStep::Services);
        assert!(matches!(services.selection(), Some(SelectionKind::Multi(_))));
        let mut city = WizardState::new(MemoryStorage::new(), WizardStep::City);
        assert!(city.selection().is_none());
        assert!(!city.has_choice());
        city.select_city(CityOption::default());
        assert!(city.has_choice());
    }

    #[test]
    fn choices_for_another_step_are_ignored() {
        let storage = MemoryStorage::new();
        let mut state = WizardState::load(&storage, WizardStep::Hiking, ["1"]);
        let outcome = state.select_spot("1");
        assert_eq!(outcome, SelectOutcome::unchanged());
        assert!(!state.continue_visible());
        assert_eq!(state.store().raw(SelectionKey::Spot), None);
        assert_eq!(state.remove_service("1"), 0);
    }

    #[test]
    fn services_copy_follows_earlier_sentinels() {
        let storage = MemoryStorage::new()
            .with_entry(SelectionKey::Hiking, "no-hiking")
            .with_entry(SelectionKey::Spot, "5");
        let state = WizardState::load(storage, WizardStep::Services, Vec::<String>::new());
        let copy = state.services_copy();
        assert_eq!(copy.title_key(), "services.title_rest_day");
        assert_eq!(copy.subtitle_key(), "services.subtitle");
    }

    #[test]
    fn spot_map_url_uses_stored_hiking() {
        let storage = MemoryStorage::new().with_entry(SelectionKey::Hiking, "9");
        let state = WizardState::new(storage, WizardStep::Spot);
        assert_eq!(state.spot_map_url("3"), "/map/spot/3?hiking=9");
        let state = WizardState::new(MemoryStorage::new(), WizardStep::Spot);
        assert_eq!(state.spot_map_url("3"), "/map/spot/3?hiking=1");
        assert_eq!(state.hiking_map_url("3"), "/map/randonnee/3");
    }
}
