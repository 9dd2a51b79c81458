use randovango_core::{Selection, SelectionKey, SelectionStore, WizardStep};
use yew::prelude::*;

use super::StepProps;
use crate::i18n::t;
use crate::markup::WizardData;
use crate::paths::step_href;
use crate::storage::LocalSelectionStorage;

/// Label of what was stored under `key`, resolved against the page data.
fn describe(data: &WizardData, key: SelectionKey, selection: Option<Selection>) -> String {
    match selection {
        None => t("results.not_chosen"),
        Some(Selection::None) => match key {
            SelectionKey::Hiking => t("results.no_hiking"),
            SelectionKey::Spot => t("results.other_stay"),
            SelectionKey::Services => t("results.no_services"),
        },
        Some(Selection::Card(id)) => {
            let name = match key {
                SelectionKey::Hiking => data
                    .hikes
                    .iter()
                    .find(|h| h.id.to_string() == id)
                    .map(|h| h.name.clone()),
                SelectionKey::Spot => data.spot(&id).map(|s| s.name.clone()),
                SelectionKey::Services => None,
            };
            name.unwrap_or(id)
        }
    }
}

/// Summary of the choices stored during the wizard.
#[function_component(Results)]
pub fn results(p: &StepProps) -> Html {
    let store = SelectionStore::new(LocalSelectionStorage);
    let rows = [
        (SelectionKey::Hiking, "results.hiking"),
        (SelectionKey::Spot, "results.spot"),
        (SelectionKey::Services, "results.services"),
    ];

    html! {
        <section class="step step-results">
            <h2>{ t("results.title") }</h2>
            <dl class="results-summary">
                { for rows.iter().map(|(key, label)| html! {
                    <>
                        <dt>{ t(label) }</dt>
                        <dd data-key={key.as_str()}>{ describe(&p.data, *key, store.stored(*key)) }</dd>
                    </>
                }) }
            </dl>
            <a class="btn btn-outline" href={step_href(WizardStep::City.path())}>{ t("results.restart") }</a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::HikeCard;

    #[test]
    fn describe_resolves_names_and_sentinels() {
        crate::i18n::set_lang("fr");
        let data = WizardData {
            hikes: vec![HikeCard {
                id: 4,
                name: "Phare du Minou".to_string(),
                distance_km: 6.0,
                denivele_m: None,
                difficulte: None,
            }],
            ..WizardData::default()
        };
        assert_eq!(
            describe(&data, SelectionKey::Hiking, Some(Selection::Card("4".into()))),
            "Phare du Minou"
        );
        assert_eq!(
            describe(&data, SelectionKey::Spot, Some(Selection::Card("99".into()))),
            "99"
        );
        assert_eq!(
            describe(&data, SelectionKey::Spot, Some(Selection::None)),
            "Autre hébergement"
        );
        assert_eq!(describe(&data, SelectionKey::Services, None), "Non choisi");
    }
}
