//! Scripted filter sessions: a recorded sequence of taps, dialog input and
//! waits, replayed against a [`FilterCoordinator`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::coordinator::FilterCoordinator;
use crate::dialogs::{DialogAction, DialogEvent, DialogKind, DismissReason};
use crate::filter::{ListingType, SetField, TextField};
use crate::tabs::Tab;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    Tap { tab: Tab },
    Open { dialog: DialogKind },
    Dialog { input: DialogAction },
    Wait { ms: u64 },
    Reset,
}

pub fn load(path: &Path) -> Result<Vec<ScriptStep>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse script {}", path.display()))
}

/// Replays `steps` and returns every event the coordinator emitted.
pub fn run(coordinator: &mut FilterCoordinator, steps: &[ScriptStep]) -> Vec<DialogEvent> {
    let mut events = Vec::new();
    for step in steps {
        debug!(?step, "script step");
        match step {
            ScriptStep::Tap { tab } => events.extend(coordinator.tap_tab(*tab)),
            ScriptStep::Open { dialog } => events.extend(coordinator.open(*dialog)),
            ScriptStep::Dialog { input } => events.extend(coordinator.dispatch(input.clone())),
            ScriptStep::Wait { ms } => {
                events.extend(coordinator.advance(Duration::from_millis(*ms)))
            }
            ScriptStep::Reset => events.extend(coordinator.reset()),
        }
    }
    events
}

fn input(action: DialogAction) -> ScriptStep {
    ScriptStep::Dialog { input: action }
}

fn toggle(field: SetField, value: &str) -> ScriptStep {
    input(DialogAction::Toggle {
        field,
        value: value.to_string(),
    })
}

fn dismiss(reason: DismissReason) -> ScriptStep {
    input(DialogAction::Dismiss { reason })
}

/// A short session through the tab strip, used when no script is given.
pub fn demo() -> Vec<ScriptStep> {
    let settle = ScriptStep::Wait { ms: 300 };
    vec![
        ScriptStep::Tap { tab: Tab::Category },
        settle.clone(),
        input(DialogAction::SelectCategory {
            listing_type: ListingType::Rent,
        }),
        dismiss(DismissReason::Apply),
        settle.clone(),
        ScriptStep::Tap { tab: Tab::BedsAndBaths },
        settle.clone(),
        toggle(SetField::Bedrooms, "2"),
        toggle(SetField::Bedrooms, "Studio"),
        dismiss(DismissReason::Scrim),
        settle.clone(),
        ScriptStep::Tap { tab: Tab::Price },
        settle.clone(),
        input(DialogAction::EditText {
            field: TextField::MaxPrice,
            value: "10000".to_string(),
        }),
        dismiss(DismissReason::CloseIcon),
        settle.clone(),
        ScriptStep::Tap { tab: Tab::Amenities },
        settle.clone(),
        toggle(SetField::Amenities, "pool"),
        toggle(SetField::Amenities, "gym"),
        toggle(SetField::Amenities, "pool"),
        dismiss(DismissReason::Apply),
        settle,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterState;

    #[test]
    fn demo_session_result() {
        let mut c = FilterCoordinator::seeded();
        let events = run(&mut c, &demo());

        let f = c.filter();
        assert_eq!(f.bedrooms.as_slice(), &["2".to_string(), "Studio".to_string()]);
        assert_eq!(f.max_price.as_deref(), Some("10000"));
        assert_eq!(f.amenities.as_slice(), &["gym".to_string()]);
        assert!(c.active_dialog().is_none());

        let closed = events
            .iter()
            .filter(|e| matches!(e, DialogEvent::Closed { .. }))
            .count();
        assert_eq!(closed, 4);
    }

    #[test]
    fn parses_json_script() {
        let json = r#"[
            {"step": "tap", "tab": "Amenities"},
            {"step": "dialog", "input": {"action": "toggle", "field": "amenities", "value": "gym"}},
            {"step": "wait", "ms": 300},
            {"step": "reset"}
        ]"#;
        let steps: Vec<ScriptStep> = serde_json::from_str(json).unwrap();
        let mut c = FilterCoordinator::seeded();
        run(&mut c, &steps);
        assert_eq!(c.filter(), &FilterState::seeded());
        assert_eq!(steps.len(), 4);
    }
}
