//! Global Application State
//!
//! Reactive state management using Leptos signals. The panel owns the prompt
//! and the session; sections only ever see the derived dashboard.

use leptos::*;
use roameo::map::MapSettings;
use roameo::plan::{PlanError, PlanResult, TripPlan};
use roameo::render::Dashboard;
use roameo::session::PlannerSession;
use wasm_bindgen::JsValue;

use crate::api;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Text in the prompt box; kept across requests
    pub prompt: RwSignal<String>,
    /// Last result plus request tickets
    pub session: RwSignal<PlannerSession>,
    /// Map defaults for the attractions section
    pub map_settings: StoredValue<MapSettings>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        prompt: create_rw_signal(String::new()),
        session: create_rw_signal(PlannerSession::new()),
        map_settings: store_value(MapSettings::default()),
    };

    provide_context(state);
}

/// Fetch the state provided by [`provide_global_state`]
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Whether the newest request is still outstanding
    pub fn loading(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(PlannerSession::is_loading))
    }

    /// Dashboard for the current result
    pub fn dashboard(&self) -> Memo<Dashboard> {
        let session = self.session;
        let settings = self.map_settings;
        create_memo(move |_| {
            session.with(|s| settings.with_value(|m| Dashboard::from_result(s.result(), m)))
        })
    }

    /// Send the current prompt; a later submit supersedes this one
    pub fn submit(&self) {
        let prompt = self.prompt.get_untracked();
        let request = self.session.try_update(|s| s.begin(&prompt));
        let Some(request) = request else {
            return;
        };

        let session = self.session;
        spawn_local(async move {
            let outcome = api::fetch_plan(&request.body).await;
            let result = settle_outcome(outcome);

            session.update(|s| {
                s.complete(request.ticket, result);
            });
        });
    }
}

/// Collapse a fetch outcome and report the cause to the console
fn settle_outcome(outcome: Result<TripPlan, PlanError>) -> PlanResult {
    if let Err(e) = &outcome {
        web_sys::console::error_1(&JsValue::from_str(&format!(
            "Fetch or parse error: {}",
            e
        )));
    }
    PlanResult::from_outcome(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roameo::plan::parse_response;

    #[test]
    fn test_dashboard_follows_latest_ticket() {
        let mut session = PlannerSession::new();
        let first = session.begin("Chicago");
        let second = session.begin("Boston");

        let boston = parse_response(r#"{"result": "Boston plan"}"#).unwrap();
        session.complete(second.ticket, PlanResult::Success(boston));
        session.complete(first.ticket, PlanResult::failed());

        let dashboard = Dashboard::from_result(session.result(), &MapSettings::default());
        assert_eq!(dashboard.summary.as_deref(), Some("Boston plan"));
        assert!(dashboard.error.is_none());
    }

    // The console is only reachable from a browser
    #[cfg(target_arch = "wasm32")]
    mod browser {
        use super::*;
        use wasm_bindgen_test::*;

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        fn test_settle_outcome_logs_and_collapses() {
            let result = settle_outcome(Err(PlanError::Status(502)));
            assert_eq!(result, PlanResult::failed());
        }
    }
}
