//! Owner of the search filter and of the single dialog slot.
//!
//! All dialogs read the same [`FilterState`] and write through this type.
//! Selections commit on every tap; closing a dialog never commits or rolls
//! back anything. Each committed change is published on a `watch` channel.

use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::dialogs::action::text_value;
use crate::dialogs::{
    ActiveDialog, DialogAction, DialogEvent, DialogKind, DialogPhase, DialogTransition,
    SLIDE_DURATION,
};
use crate::filter::{
    toggle_array_filter, update_filter, FilterState, FilterUpdate, SetField, TextField,
};
use crate::tabs::Tab;

pub struct FilterCoordinator {
    filter: FilterState,
    active: Option<ActiveDialog>,
    slide: Duration,
    notifier: watch::Sender<FilterState>,
}

impl FilterCoordinator {
    pub fn new(initial: FilterState, slide: Duration) -> Self {
        let (notifier, _) = watch::channel(initial.clone());
        Self {
            filter: initial,
            active: None,
            slide,
            notifier,
        }
    }

    pub fn seeded() -> Self {
        Self::new(FilterState::seeded(), SLIDE_DURATION)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Receives every committed filter snapshot.
    pub fn subscribe(&self) -> watch::Receiver<FilterState> {
        self.notifier.subscribe()
    }

    pub fn active_dialog(&self) -> Option<&ActiveDialog> {
        self.active.as_ref()
    }

    pub fn active_kind(&self) -> Option<DialogKind> {
        self.active.as_ref().map(|a| a.kind)
    }

    pub fn active_count(&self) -> usize {
        self.filter.active_count()
    }

    /// Replaces one field. Returns the change notification, if anything changed.
    pub fn update(&mut self, update: FilterUpdate) -> Option<DialogEvent> {
        let next = update_filter(&self.filter, update);
        self.commit(next)
    }

    pub fn toggle(&mut self, field: SetField, value: &str) -> Option<DialogEvent> {
        let next = toggle_array_filter(&self.filter, field, value);
        self.commit(next)
    }

    /// Back to the seeded defaults.
    pub fn reset(&mut self) -> Option<DialogEvent> {
        self.commit(FilterState::seeded())
    }

    fn commit(&mut self, next: FilterState) -> Option<DialogEvent> {
        if next == self.filter {
            return None;
        }
        debug!(active = next.active_count(), "filter updated");
        self.filter = next;
        self.notifier.send_replace(self.filter.clone());
        Some(DialogEvent::FiltersChanged(self.filter.clone()))
    }

    /// Opens `kind`. Any other dialog on screen is dropped first, so at most
    /// one dialog is ever open.
    pub fn open(&mut self, kind: DialogKind) -> Vec<DialogEvent> {
        let mut events = Vec::new();

        if let Some(current) = self.active.as_mut() {
            if current.kind == kind {
                if current.transition.open() {
                    events.push(DialogEvent::PhaseChanged {
                        kind,
                        phase: current.phase(),
                    });
                }
                return events;
            }
            debug!(from = ?current.kind, to = ?kind, "replacing open dialog");
            events.push(DialogEvent::Closed { kind: current.kind });
            self.active = None;
        }

        let mut transition = DialogTransition::new(self.slide);
        transition.open();
        info!(?kind, "dialog opening");
        events.push(DialogEvent::PhaseChanged {
            kind,
            phase: transition.phase(),
        });
        self.active = Some(ActiveDialog { kind, transition });
        events
    }

    pub fn tap_tab(&mut self, tab: Tab) -> Vec<DialogEvent> {
        self.open(tab.dialog())
    }

    /// Applies user input from the open dialog.
    ///
    /// Input for a field the dialog does not show, or arriving while no
    /// dialog is interactive, is ignored.
    pub fn dispatch(&mut self, action: DialogAction) -> Vec<DialogEvent> {
        let Some(active) = self.active.as_mut() else {
            debug!(?action, "no dialog open, ignoring action");
            return Vec::new();
        };
        let kind = active.kind;

        if let DialogAction::Dismiss { reason } = action {
            if !active.transition.close() {
                return Vec::new();
            }
            info!(?kind, ?reason, "dialog closing");
            let phase = active.phase();
            let mut events = vec![DialogEvent::PhaseChanged { kind, phase }];
            if phase == DialogPhase::Hidden {
                self.active = None;
                events.push(DialogEvent::Closed { kind });
            }
            return events;
        }

        if !active.transition.is_interactive() {
            debug!(?kind, "dialog not interactive, ignoring action");
            return Vec::new();
        }
        if let Some(field) = action.targets().into_iter().find(|f| !kind.shows(*f)) {
            debug!(?kind, ?field, "field not shown by dialog, ignoring action");
            return Vec::new();
        }

        let changed = match action {
            DialogAction::SelectCategory { listing_type } => {
                self.update(FilterUpdate::Type(Some(listing_type)))
            }
            DialogAction::Toggle { field, value } => self.toggle(field, &value),
            DialogAction::EditText { field, value } => {
                self.update(FilterUpdate::Text(field, text_value(&value)))
            }
            DialogAction::SetPriceRange { min, max } => {
                let next = update_filter(
                    &self.filter,
                    FilterUpdate::Text(TextField::MinPrice, text_value(&min)),
                );
                let next = update_filter(
                    &next,
                    FilterUpdate::Text(TextField::MaxPrice, text_value(&max)),
                );
                self.commit(next)
            }
            DialogAction::SetCommercial { commercial } => {
                self.update(FilterUpdate::Commercial(commercial))
            }
            DialogAction::SetPricePeriod { period } => {
                self.update(FilterUpdate::PricePeriod(period))
            }
            DialogAction::Dismiss { .. } => None,
        };
        changed.into_iter().collect()
    }

    /// Moves the slide animation forward by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Vec<DialogEvent> {
        let Some(active) = self.active.as_mut() else {
            return Vec::new();
        };
        let kind = active.kind;
        match active.transition.advance(dt) {
            Some(DialogPhase::Hidden) => {
                self.active = None;
                info!(?kind, "dialog closed");
                vec![
                    DialogEvent::PhaseChanged {
                        kind,
                        phase: DialogPhase::Hidden,
                    },
                    DialogEvent::Closed { kind },
                ]
            }
            Some(phase) => vec![DialogEvent::PhaseChanged { kind, phase }],
            None => Vec::new(),
        }
    }
}

impl Default for FilterCoordinator {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::DismissReason;
    use crate::filter::{ListingType, SelectionSet};

    fn toggle(field: SetField, value: &str) -> DialogAction {
        DialogAction::Toggle {
            field,
            value: value.into(),
        }
    }

    fn opened(kind: DialogKind) -> FilterCoordinator {
        let mut c = FilterCoordinator::seeded();
        c.open(kind);
        c.advance(SLIDE_DURATION);
        c
    }

    #[test]
    fn at_most_one_dialog_open() {
        let mut c = FilterCoordinator::seeded();
        c.tap_tab(Tab::Price);
        let events = c.tap_tab(Tab::Amenities);
        assert_eq!(events[0], DialogEvent::Closed { kind: DialogKind::Price });
        assert_eq!(c.active_kind(), Some(DialogKind::Amenities));
    }

    #[test]
    fn reopening_same_dialog_is_noop() {
        let mut c = opened(DialogKind::Price);
        assert!(c.open(DialogKind::Price).is_empty());
        assert_eq!(c.active_dialog().map(|a| a.phase()), Some(DialogPhase::Visible));
    }

    #[test]
    fn reopening_while_closing_reverses_in_place() {
        let kind = DialogKind::Amenities;
        let mut c = opened(kind);
        c.dispatch(DialogAction::Dismiss {
            reason: DismissReason::Scrim,
        });
        c.advance(Duration::from_millis(100));

        let events = c.open(kind);
        assert_eq!(
            events,
            vec![DialogEvent::PhaseChanged {
                kind,
                phase: DialogPhase::Opening,
            }]
        );
        assert_eq!(c.active_kind(), Some(kind));

        // 100ms into the slide-out leaves 100ms to slide back in.
        let events = c.advance(Duration::from_millis(100));
        assert_eq!(
            events,
            vec![DialogEvent::PhaseChanged {
                kind,
                phase: DialogPhase::Visible,
            }]
        );
        assert_eq!(c.active_kind(), Some(kind));
    }

    #[test]
    fn dismissing_while_opening_keeps_slot_until_hidden() {
        let kind = DialogKind::Price;
        let mut c = FilterCoordinator::seeded();
        c.open(kind);
        c.advance(Duration::from_millis(100));

        let events = c.dispatch(DialogAction::Dismiss {
            reason: DismissReason::CloseIcon,
        });
        assert_eq!(
            events,
            vec![DialogEvent::PhaseChanged {
                kind,
                phase: DialogPhase::Closing,
            }]
        );
        assert_eq!(c.active_kind(), Some(kind));

        let events = c.advance(Duration::from_millis(100));
        assert_eq!(
            events,
            vec![
                DialogEvent::PhaseChanged {
                    kind,
                    phase: DialogPhase::Hidden,
                },
                DialogEvent::Closed { kind },
            ]
        );
        assert!(c.active_dialog().is_none());
    }

    #[test]
    fn set_update_keeps_only_registered_values() {
        let mut c = FilterCoordinator::seeded();
        let set: SelectionSet = ["pool", "helipad"].into_iter().collect();
        c.update(FilterUpdate::Set(SetField::Amenities, set));
        assert!(c.filter().amenities.contains("pool"));
        assert!(!c.filter().amenities.contains("helipad"));
        assert_eq!(c.filter().amenities.len(), 1);
    }

    #[test]
    fn selections_apply_while_opening() {
        let mut c = FilterCoordinator::seeded();
        c.open(DialogKind::Amenities);
        let events = c.dispatch(toggle(SetField::Amenities, "gym"));
        assert_eq!(events.len(), 1);
        assert!(c.filter().amenities.contains("gym"));
    }

    #[test]
    fn ignores_fields_the_dialog_does_not_show() {
        let mut c = opened(DialogKind::Amenities);
        assert!(c.dispatch(toggle(SetField::Bedrooms, "2")).is_empty());
        assert!(c.filter().bedrooms.is_empty());
    }

    #[test]
    fn ignores_input_with_no_dialog() {
        let mut c = FilterCoordinator::seeded();
        assert!(c.dispatch(toggle(SetField::Amenities, "gym")).is_empty());
    }

    #[test]
    fn ignores_input_while_closing() {
        let mut c = opened(DialogKind::Amenities);
        c.dispatch(DialogAction::Dismiss {
            reason: DismissReason::Apply,
        });
        assert!(c.dispatch(toggle(SetField::Amenities, "gym")).is_empty());
    }

    #[test]
    fn close_lifecycle_frees_slot() {
        let mut c = opened(DialogKind::Category);
        let events = c.dispatch(DialogAction::Dismiss {
            reason: DismissReason::CloseIcon,
        });
        assert_eq!(
            events,
            vec![DialogEvent::PhaseChanged {
                kind: DialogKind::Category,
                phase: DialogPhase::Closing
            }]
        );
        let events = c.advance(SLIDE_DURATION);
        assert_eq!(events.last(), Some(&DialogEvent::Closed { kind: DialogKind::Category }));
        assert!(c.active_dialog().is_none());
    }

    #[test]
    fn filter_sheet_writes_extra_fields() {
        let mut c = opened(DialogKind::Filter);
        c.dispatch(DialogAction::SetCommercial { commercial: true });
        c.dispatch(toggle(SetField::Furnishings, "Furnished"));
        c.dispatch(DialogAction::EditText {
            field: TextField::Keywords,
            value: "corner unit".into(),
        });
        let f = c.filter();
        assert!(f.commercial);
        assert!(f.furnishings.contains("Furnished"));
        assert_eq!(f.keywords.as_deref(), Some("corner unit"));
    }

    #[test]
    fn price_range_writes_both_bounds_once() {
        let mut c = opened(DialogKind::Price);
        let events = c.dispatch(DialogAction::SetPriceRange {
            min: "1000".into(),
            max: "".into(),
        });
        assert_eq!(events.len(), 1);
        assert_eq!(c.filter().min_price.as_deref(), Some("1000"));
        assert_eq!(c.filter().max_price, None);
    }

    #[test]
    fn reset_restores_seeded_state() {
        let mut c = opened(DialogKind::Category);
        c.dispatch(DialogAction::SelectCategory {
            listing_type: ListingType::Buy,
        });
        assert_eq!(c.active_count(), 1);
        assert!(c.reset().is_some());
        assert_eq!(c.filter(), &FilterState::seeded());
        assert!(c.reset().is_none());
    }

    #[tokio::test]
    async fn subscribers_receive_each_commit() {
        let mut c = opened(DialogKind::BedsAndBaths);
        let mut rx = c.subscribe();

        c.dispatch(toggle(SetField::Bedrooms, "3"));
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().bedrooms.contains("3"));

        c.dispatch(toggle(SetField::Bathrooms, "2"));
        rx.changed().await.unwrap();
        assert!(rx.borrow().bathrooms.contains("2"));
    }
}
