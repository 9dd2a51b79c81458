use randovango_core::card::{CardGroup, FollowUp};
use randovango_core::store::{MemoryStorage, Selection, SelectionKey, SelectionStore};
use randovango_core::wizard::{WizardState, WizardStep};

#[test]
fn every_identifier_in_a_group_selects_only_itself() {
    let ids = ["1", "2", "12", "21", "120"];
    let store = SelectionStore::new(MemoryStorage::new());
    let mut group = CardGroup::hiking(ids);
    for chosen in ids {
        let outcome = group.select(chosen, &store);
        assert!(outcome.continue_revealed);
        assert_eq!(group.marked_count(), 1, "after selecting {chosen}");
        for other in ids {
            assert_eq!(group.is_selected(other), other == chosen);
        }
        assert_eq!(store.raw(SelectionKey::Hiking).as_deref(), Some(chosen));
    }
}

#[test]
fn spot_then_other_accommodation_scenario() {
    let storage = MemoryStorage::new();
    let mut state = WizardState::load(&storage, WizardStep::Spot, ["11", "12", "13"]);

    let picked = state.select_spot("12");
    assert_eq!(picked.follow_up, FollowUp::ShowNightWeather);
    assert!(state.is_selected("12"));
    assert!(state.night_weather_visible());

    let none = state.select_no_spot();
    assert_eq!(none.follow_up, FollowUp::HideNightWeather);
    assert!(!state.is_selected("12"));
    assert!(state.none_selected());
    assert!(!state.night_weather_visible());
    assert!(state.continue_visible());
    assert_eq!(
        state.store().raw(SelectionKey::Spot).as_deref(),
        Some("autre_hebergement")
    );
}

#[test]
fn no_hiking_then_card_clears_the_none_option() {
    let storage = MemoryStorage::new();
    let mut state = WizardState::load(&storage, WizardStep::Hiking, ["5", "6"]);
    state.select_no_hiking();
    assert!(state.none_selected());
    assert_eq!(
        state.store().stored(SelectionKey::Hiking),
        Some(Selection::None)
    );

    state.select_hiking("6");
    assert!(!state.none_selected());
    assert_eq!(state.selected_card(), Some("6"));
}

#[test]
fn later_steps_read_what_earlier_steps_stored() {
    let storage = MemoryStorage::new();

    let mut hiking = WizardState::load(&storage, WizardStep::Hiking, ["5", "6"]);
    hiking.select_no_hiking();
    assert_eq!(hiking.next_step(), Some(WizardStep::Spot));

    let mut spot = WizardState::load(&storage, WizardStep::Spot, ["40"]);
    assert!(!spot.continue_visible());
    spot.select_no_spot();
    assert_eq!(spot.spot_map_url("40"), "/map/spot/40?hiking=no-hiking");

    let services = WizardState::load(&storage, WizardStep::Services, Vec::<String>::new());
    let copy = services.services_copy();
    assert!(copy.rest_day);
    assert!(copy.own_stay);
    assert_eq!(copy.title_key(), "services.title_rest_day");
    assert_eq!(copy.subtitle_key(), "services.subtitle_stay");
}

#[test]
fn services_accumulate_and_none_resets() {
    let storage = MemoryStorage::new();
    let mut state = WizardState::load(&storage, WizardStep::Services, Vec::<String>::new());
    state.add_service("boulangerie");
    state.add_service("boulangerie");
    state.add_service("laverie");
    assert_eq!(state.services().expect("services step").len(), 3);
    assert!(state.continue_visible());

    assert_eq!(state.remove_service("boulangerie"), 2);
    assert_eq!(state.services().expect("services step").len(), 1);

    state.select_no_service();
    assert!(state.services().expect("services step").is_empty());
    assert_eq!(
        storage.len(),
        1,
        "only the services sentinel is persisted by this step"
    );
    assert_eq!(state.next_step(), Some(WizardStep::Results));
}

#[test]
fn storage_failures_do_not_block_the_step() {
    let mut state = WizardState::load(MemoryStorage::read_only(), WizardStep::Hiking, ["1"]);
    let outcome = state.select_hiking("1");
    assert_eq!(outcome.marked, Some(0));
    assert!(state.continue_visible());
    assert_eq!(state.store().raw(SelectionKey::Hiking), None);
}
