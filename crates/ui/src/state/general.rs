//! General app state
//!
//! Shared reference data (countries, states, cities, membership plans),
//! the plan the visitor picked on the pricing page, and which landing
//! section is active. Persisted wholesale so a reload mid-signup keeps
//! the chosen plan.

use dioxus::prelude::*;
use esp_api::models::{City, Country, StateRecord};
use esp_core::{AsyncStatus, MembershipPlan};
use serde::{Deserialize, Serialize};

use super::persist;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralState {
    pub countries: Vec<Country>,
    pub states: Vec<StateRecord>,
    pub cities: Vec<City>,
    pub plans: Vec<MembershipPlan>,
    /// Plan picked on the pricing page, carried into signup
    pub selected_plan: Option<MembershipPlan>,
    /// Landing page section highlighted in the navbar
    pub active_section: String,
    #[serde(skip)]
    pub status: AsyncStatus,
    #[serde(skip)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeneralAction {
    FetchPending,
    FetchFailed(String),
    CountriesLoaded(Vec<Country>),
    StatesLoaded(Vec<StateRecord>),
    CitiesLoaded(Vec<City>),
    PlansLoaded(Vec<MembershipPlan>),
    SelectPlan(MembershipPlan),
    ClearSelectedPlan,
    SetActiveSection(String),
}

impl GeneralState {
    pub fn apply(&mut self, action: GeneralAction) {
        match action {
            GeneralAction::FetchPending => {
                self.status = AsyncStatus::Loading;
                self.error = None;
            }
            GeneralAction::FetchFailed(message) => {
                self.status = AsyncStatus::Failed;
                self.error = Some(message);
            }
            GeneralAction::CountriesLoaded(countries) => {
                self.status = AsyncStatus::Succeeded;
                self.countries = countries;
            }
            GeneralAction::StatesLoaded(states) => {
                self.status = AsyncStatus::Succeeded;
                self.states = states;
            }
            GeneralAction::CitiesLoaded(cities) => {
                self.status = AsyncStatus::Succeeded;
                self.cities = cities;
            }
            GeneralAction::PlansLoaded(plans) => {
                self.status = AsyncStatus::Succeeded;
                self.plans = plans;
            }
            GeneralAction::SelectPlan(plan) => self.selected_plan = Some(plan),
            GeneralAction::ClearSelectedPlan => self.selected_plan = None,
            GeneralAction::SetActiveSection(section) => self.active_section = section,
        }
    }
}

/// Global general store
pub static GENERAL: GlobalSignal<GeneralState> = Signal::global(GeneralState::default);

/// Rehydrate general state from local storage. Call once at startup.
pub fn restore_general() {
    if let Some(snapshot) = persist::load::<GeneralState>(persist::GENERAL_KEY) {
        *GENERAL.write() = snapshot;
    }
}

/// Apply a transition through the global store and persist the result.
pub fn dispatch_general(action: GeneralAction) {
    let mut general = GENERAL.write();
    general.apply(action);
    let snapshot = general.clone();
    drop(general);
    if let Err(err) = persist::save(persist::GENERAL_KEY, &snapshot) {
        tracing::warn!(error = %err, "failed to persist general state");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_loads_settle_status() {
        let mut state = GeneralState::default();
        state.apply(GeneralAction::FetchPending);
        assert_eq!(state.status, AsyncStatus::Loading);

        state.apply(GeneralAction::CountriesLoaded(vec![Country {
            country_id: 1,
            country_name: "Germany".into(),
        }]));
        assert_eq!(state.status, AsyncStatus::Succeeded);
        assert_eq!(state.countries.len(), 1);
    }

    #[test]
    fn test_selected_plan_survives_serialization() {
        let mut state = GeneralState::default();
        state.apply(GeneralAction::SelectPlan(MembershipPlan {
            plan_id: 3,
            plan_name: "Gold".into(),
            ..Default::default()
        }));
        state.apply(GeneralAction::FetchFailed("offline".into()));

        let json = serde_json::to_string(&state).unwrap();
        let restored: GeneralState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.selected_plan.unwrap().plan_name, "Gold");
        // Transient fields do not persist.
        assert_eq!(restored.status, AsyncStatus::Idle);
        assert_eq!(restored.error, None);
    }
}
