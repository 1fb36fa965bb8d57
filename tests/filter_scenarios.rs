//! End-to-end filter sessions driven through the coordinator.

use housing_filter::dialogs::{
    DialogAction, DialogEvent, DialogKind, DialogPhase, DismissReason, SLIDE_DURATION,
};
use housing_filter::filter::{FilterField, FilterState, ListingType, SetField, TextField};
use housing_filter::tabs::{Tab, TabStrip};
use housing_filter::theme::{ColorScheme, Palette};
use housing_filter::FilterCoordinator;

fn open(c: &mut FilterCoordinator, tab: Tab) {
    c.tap_tab(tab);
    c.advance(SLIDE_DURATION);
    assert_eq!(c.active_dialog().map(|a| a.phase()), Some(DialogPhase::Visible));
}

fn toggle(c: &mut FilterCoordinator, field: SetField, value: &str) -> Vec<DialogEvent> {
    c.dispatch(DialogAction::Toggle {
        field,
        value: value.to_string(),
    })
}

fn dismiss(c: &mut FilterCoordinator, reason: DismissReason) {
    c.dispatch(DialogAction::Dismiss { reason });
    c.advance(SLIDE_DURATION);
    assert!(c.active_dialog().is_none());
}

#[test]
fn category_is_single_select() {
    let mut c = FilterCoordinator::seeded();
    open(&mut c, Tab::Category);
    c.dispatch(DialogAction::SelectCategory {
        listing_type: ListingType::Rent,
    });
    c.dispatch(DialogAction::SelectCategory {
        listing_type: ListingType::Buy,
    });
    assert_eq!(c.filter().listing_type, Some(ListingType::Buy));
}

#[test]
fn amenity_toggles_pool_gym_pool() {
    let mut c = FilterCoordinator::seeded();
    open(&mut c, Tab::Amenities);
    toggle(&mut c, SetField::Amenities, "pool");
    toggle(&mut c, SetField::Amenities, "gym");
    toggle(&mut c, SetField::Amenities, "pool");
    assert_eq!(c.filter().amenities.as_slice(), &["gym".to_string()]);
}

#[test]
fn bedroom_toggle_round_trip() {
    let mut c = FilterCoordinator::seeded();
    open(&mut c, Tab::BedsAndBaths);

    let first = toggle(&mut c, SetField::Bedrooms, "2");
    match first.as_slice() {
        [DialogEvent::FiltersChanged(snapshot)] => {
            assert_eq!(snapshot.bedrooms.as_slice(), &["2".to_string()]);
        }
        other => panic!("unexpected events: {other:?}"),
    }

    toggle(&mut c, SetField::Bedrooms, "2");
    assert!(c.filter().bedrooms.is_empty());
    assert_eq!(c.filter(), &FilterState::seeded());
}

#[test]
fn price_survives_scrim_dismissal() {
    let mut c = FilterCoordinator::seeded();
    open(&mut c, Tab::Price);
    c.dispatch(DialogAction::EditText {
        field: TextField::MinPrice,
        value: "1000".to_string(),
    });
    dismiss(&mut c, DismissReason::Scrim);
    assert_eq!(c.filter().min_price.as_deref(), Some("1000"));
}

#[test]
fn apply_closes_without_validation() {
    let mut c = FilterCoordinator::seeded();
    c.open(DialogKind::Filter);
    c.advance(SLIDE_DURATION);
    c.dispatch(DialogAction::SetPriceRange {
        min: "5000".to_string(),
        max: "100".to_string(),
    });
    dismiss(&mut c, DismissReason::Apply);
    assert!(c.filter().price_range_inverted());
    assert_eq!(c.filter().max_price.as_deref(), Some("100"));
}

#[test]
fn switching_tabs_keeps_one_dialog() {
    let mut c = FilterCoordinator::seeded();
    for tab in Tab::ALL {
        c.tap_tab(tab);
        let palette = Palette::for_scheme(ColorScheme::Dark);
        let open = TabStrip::chips(c.filter(), c.active_kind(), palette)
            .iter()
            .filter(|chip| chip.open)
            .count();
        assert_eq!(open, 1);
    }
    assert_eq!(c.active_kind(), Some(DialogKind::Amenities));
}

#[test]
fn standalone_dialog_edits_only_its_slice() {
    let mut c = FilterCoordinator::seeded();
    open(&mut c, Tab::PropertyType);
    let before = c.filter().clone();
    toggle(&mut c, SetField::PropertyTypes, "Villa");
    c.dispatch(DialogAction::SetCommercial { commercial: true });

    let after = c.filter();
    for field in FilterField::ALL {
        if field != FilterField::Set(SetField::PropertyTypes) {
            assert_eq!(after.get(field), before.get(field), "{field:?}");
        }
    }
    assert!(after.property_types.contains("Villa"));
}
