use randovango_core::WizardStep;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/step1")]
    City,
    #[at("/step2")]
    Hiking,
    #[at("/step3")]
    Spot,
    #[at("/step4")]
    Services,
    #[at("/results")]
    Results,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_step(step: WizardStep) -> Self {
        match step {
            WizardStep::City => Self::City,
            WizardStep::Hiking => Self::Hiking,
            WizardStep::Spot => Self::Spot,
            WizardStep::Services => Self::Services,
            WizardStep::Results => Self::Results,
        }
    }

    #[must_use]
    pub const fn to_step(&self) -> Option<WizardStep> {
        match self {
            // The wizard opens on the city step.
            Self::Home | Self::City => Some(WizardStep::City),
            Self::Hiking => Some(WizardStep::Hiking),
            Self::Spot => Some(WizardStep::Spot),
            Self::Services => Some(WizardStep::Services),
            Self::Results => Some(WizardStep::Results),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_step_mappings_cover_all_steps() {
        for step in WizardStep::ALL {
            let route = Route::from_step(step);
            assert_eq!(route.to_step(), Some(step));
            assert_eq!(route.to_path(), step.path());
        }
        assert_eq!(Route::Home.to_step(), Some(WizardStep::City));
        assert_eq!(Route::NotFound.to_step(), None);
    }
}
