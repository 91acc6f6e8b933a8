//! End-to-end flow: display-surface events drive the session, and the
//! aggregation services compute the stats panel and histogram data from
//! whatever is visible afterwards.

use chrono::NaiveDate;
use fieldviz_rust::api::{
    AggregationError, EventDispatcher, Feature, FeatureId, GeoBounds, LatLng, LayerGroup,
    MapEvent, MapSession, ZonePalette,
};
use fieldviz_rust::services::{
    features_containing_point, group_by_zone, summarize_plant_dates,
};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

const EUR: &str = "European Zone (EUR)";
const NAZ: &str = "North American Zone (NAZ)";

fn field(id: i64, zone: &str, sw: (f64, f64), ne: (f64, f64), plant_date: &str) -> Feature {
    Feature::new(
        FeatureId::new(id),
        zone,
        GeoBounds::from_corners(sw, ne).unwrap(),
    )
    .with_property("plant_date", json!(plant_date))
    .with_property("organization", json!("Acme Farms"))
}

fn grid_cell(id: i64, sw: (f64, f64), ne: (f64, f64)) -> Feature {
    Feature::new(
        FeatureId::new(id),
        "grid",
        GeoBounds::from_corners(sw, ne).unwrap(),
    )
    .with_property("cell_id", json!(id))
}

/// Session with a fields layer (two zones) and a raster layer that leaves
/// the map above zoom 8.
fn build_session() -> MapSession {
    let mut session = MapSession::new(
        GeoBounds::from_corners((30.0, -120.0), (60.0, 20.0)).unwrap(),
        5.0,
    );

    session.add_layer_group(LayerGroup::new(
        "fields",
        vec![
            field(1, NAZ, (44.0, -94.0), (45.0, -93.0), "2021-01-01"),
            field(2, NAZ, (45.0, -93.0), (46.0, -92.0), "2021-06-01"),
            field(3, EUR, (48.0, 10.0), (49.0, 11.0), "2021-06-02"),
            field(4, EUR, (49.0, 11.0), (50.0, 12.0), "2021-12-31"),
        ],
    ));
    session.add_layer_group(
        LayerGroup::new(
            "raster",
            vec![
                grid_cell(100, (40.0, -100.0), (44.0, -96.0)),
                grid_cell(101, (44.0, -96.0), (48.0, -92.0)),
            ],
        )
        .with_max_zoom(8.0),
    );
    session
}

#[test]
fn toggling_zones_drives_visible_features() {
    let mut session = build_session();

    assert!(session.visible_features().is_empty());

    session.toggle_zone(NAZ);
    let ids: Vec<i64> = session
        .visible_features()
        .iter()
        .map(|f| f.id.value())
        .collect();
    assert_eq!(ids, vec![1, 2]);

    session.toggle_zone(EUR);
    assert_eq!(session.visible_features().len(), 4);
}

#[test]
fn panning_away_excludes_out_of_view_fields() {
    let mut session = build_session();
    session.toggle_zone(NAZ);
    session.toggle_zone(EUR);

    // Pan to Europe: the American fields leave the viewport
    session.set_viewport(GeoBounds::from_corners((40.0, 0.0), (55.0, 20.0)).unwrap());

    let ids: Vec<i64> = session
        .visible_features()
        .iter()
        .map(|f| f.id.value())
        .collect();
    assert_eq!(ids, vec![3, 4]);
}

#[test]
fn stats_panel_flow_over_visible_fields() {
    let mut session = build_session();
    session.toggle_zone(NAZ);
    session.toggle_zone(EUR);

    let visible = session.visible_features();
    let summary = summarize_plant_dates(&visible).unwrap();

    assert_eq!(summary.count, 4);
    assert_eq!(summary.min, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    assert_eq!(summary.median, NaiveDate::from_ymd_opt(2021, 6, 2).unwrap());
    assert_eq!(summary.max, NaiveDate::from_ymd_opt(2021, 12, 31).unwrap());
}

#[test]
fn everything_toggled_off_yields_no_data() {
    let session = build_session();

    let visible = session.visible_features();
    assert!(visible.is_empty());

    // The caller renders its own "no data" state from this error
    let err = summarize_plant_dates(&visible).unwrap_err();
    assert!(matches!(err, AggregationError::EmptyInput));
}

#[test]
fn histogram_flow_groups_visible_fields_by_zone() {
    let mut session = build_session();
    session.toggle_zone(NAZ);
    session.toggle_zone(EUR);

    let visible = session.visible_features();
    let series = group_by_zone(
        &visible,
        ZonePalette::commercial_zones(),
        "plant_date",
    )
    .unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].zone, NAZ);
    assert_eq!(series[0].color, "red");
    assert_eq!(series[0].values.len(), 2);
    assert_eq!(series[1].zone, EUR);
    assert_eq!(series[1].color, "green");
    assert_eq!(series[1].values, vec![json!("2021-06-02"), json!("2021-12-31")]);
}

#[test]
fn histogram_fails_on_unregistered_zone() {
    let mut session = build_session();
    session.toggle_zone(NAZ);

    let visible = session.visible_features();
    let bare_palette = ZonePalette::new();

    let err = group_by_zone(&visible, &bare_palette, "plant_date").unwrap_err();
    assert!(matches!(err, AggregationError::UnknownZone { .. }));
}

#[test]
fn zooming_in_drops_the_raster_layer() {
    let mut session = build_session();
    session.toggle_zone("grid");

    assert_eq!(session.visible_features().len(), 2);

    session.set_zoom(9.0);
    assert!(session.visible_features().is_empty());

    session.set_zoom(5.0);
    assert_eq!(session.visible_features().len(), 2);
}

#[test]
fn coordinate_search_finds_the_containing_cell() {
    let session = build_session();
    let raster = &session.layers()[1];

    let point = LatLng::new(46.0, -94.0).unwrap();
    let hits = features_containing_point(&raster.features, &point);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, FeatureId::new(101));
}

#[test]
fn marker_placement_drives_cell_highlighting() {
    let mut session = build_session();
    let mut dispatcher = EventDispatcher::new();

    // The user enters a coordinate; the subscriber highlights whichever
    // raster cell contains the marker
    let highlighted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&highlighted);
    dispatcher.subscribe(move |_, session| {
        if let Some(point) = session.marker() {
            let raster = &session.layers()[1];
            let ids: Vec<i64> = features_containing_point(&raster.features, point)
                .iter()
                .map(|f| f.id.value())
                .collect();
            *sink.borrow_mut() = ids;
        }
    });

    dispatcher.dispatch(
        &mut session,
        MapEvent::MarkerPlaced(LatLng::new(42.0, -98.0).unwrap()),
    );
    assert_eq!(*highlighted.borrow(), vec![100]);

    // Re-entering a coordinate replaces the marker and the highlight
    dispatcher.dispatch(
        &mut session,
        MapEvent::MarkerPlaced(LatLng::new(46.0, -94.0).unwrap()),
    );
    assert_eq!(*highlighted.borrow(), vec![101]);
    assert_eq!(session.marker(), Some(&LatLng::new(46.0, -94.0).unwrap()));
}

#[test]
fn fitting_the_view_to_a_layer_shows_all_its_cells() {
    let mut session = build_session();
    session.toggle_zone("grid");

    // Zoom the viewport to the raster layer's own extent
    let raster_bounds = session.layers()[1].bounds().unwrap();
    session.set_viewport(raster_bounds);

    assert_eq!(session.visible_features().len(), 2);
}

#[test]
fn dispatcher_recomputes_stats_on_each_event() {
    let mut session = build_session();
    let mut dispatcher = EventDispatcher::new();

    let latest_count = Rc::new(RefCell::new(None::<usize>));
    let sink = Rc::clone(&latest_count);
    dispatcher.subscribe(move |_, session| {
        let count = summarize_plant_dates(&session.visible_features())
            .map(|s| s.count)
            .ok();
        *sink.borrow_mut() = count;
    });

    dispatcher.dispatch(
        &mut session,
        MapEvent::ZoneToggled {
            zone: NAZ.to_string(),
            visible: true,
        },
    );
    assert_eq!(*latest_count.borrow(), Some(2));

    dispatcher.dispatch(
        &mut session,
        MapEvent::ViewportChanged(GeoBounds::from_corners((40.0, 0.0), (55.0, 20.0)).unwrap()),
    );
    assert_eq!(*latest_count.borrow(), None);

    dispatcher.dispatch(
        &mut session,
        MapEvent::ZoneToggled {
            zone: EUR.to_string(),
            visible: true,
        },
    );
    assert_eq!(*latest_count.borrow(), Some(2));
}

#[test]
fn repeated_aggregation_is_stable_across_unrelated_events() {
    let mut session = build_session();
    session.toggle_zone(NAZ);

    let before = session.visible_features();
    session.toggle_zone(EUR);
    session.toggle_zone(EUR);
    let after = session.visible_features();

    assert_eq!(before, after);
}
