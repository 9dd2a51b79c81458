#![cfg(target_arch = "wasm32")]

use randovango_core::{SelectionKey, SelectionStorage, SelectionStore, WizardState, WizardStep};
use randovango_web::dom;
use randovango_web::storage::LocalSelectionStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear() {
    let storage = dom::local_storage().expect("localStorage");
    for key in SelectionKey::ALL {
        storage.remove_item(key.as_str()).expect("remove item");
    }
}

#[wasm_bindgen_test]
fn selections_persist_in_local_storage() {
    clear();
    let mut state = WizardState::load(LocalSelectionStorage, WizardStep::Spot, ["11", "12"]);
    state.select_spot("12");
    assert_eq!(
        LocalSelectionStorage.get("selectedSpot").expect("read"),
        Some("12".to_string())
    );

    state.select_no_spot();
    let store = SelectionStore::new(LocalSelectionStorage);
    assert_eq!(
        store.raw(SelectionKey::Spot).as_deref(),
        Some("autre_hebergement")
    );
}

#[wasm_bindgen_test]
fn later_steps_restore_earlier_choices() {
    clear();
    LocalSelectionStorage
        .set("selectedHiking", "no-hiking")
        .expect("write");
    let state = WizardState::load(LocalSelectionStorage, WizardStep::Services, Vec::<String>::new());
    assert!(state.services_copy().rest_day);

    let state = WizardState::load(LocalSelectionStorage, WizardStep::Hiking, ["3"]);
    assert!(state.none_selected());
    assert!(state.continue_visible());
}
