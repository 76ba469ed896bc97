use fleet_core::*;

fn ids(layers: &[Layer]) -> Vec<LayerId> {
    layers.iter().map(Layer::id).collect()
}

fn markers(layers: &[Layer]) -> &IconLayer {
    layers[4].as_icon().unwrap()
}

fn tracks(layers: &[Layer]) -> &PathLayer {
    layers[2].as_path().unwrap()
}

#[test]
fn test_layer_list_shape_is_stable() {
    let expected = vec![
        LayerId::OriginalRoutes,
        LayerId::PredictedRoutes,
        LayerId::ActiveRoutes,
        LayerId::PolPodMarkers,
        LayerId::VesselIcons,
        LayerId::SelectionHalo,
    ];

    assert_eq!(ids(&compose_layers(&[], None)), expected);

    let vessels = vec![Vessel::test_default("a", 10)];
    assert_eq!(ids(&compose_layers(&vessels, None)), expected);
    assert_eq!(ids(&compose_layers(&vessels, Some(&"a".into()))), expected);
}

#[test]
fn test_selection_bound_layers_are_empty_without_selection() {
    let vessels = vec![
        Vessel::test_default("a", 10),
        Vessel::test_default("b", 90),
    ];

    let layers = compose_layers(&vessels, None);

    assert!(layers[0].is_empty());
    assert_eq!(layers[1].len(), 2);
    assert_eq!(layers[2].len(), 2);
    assert!(layers[3].is_empty());
    assert_eq!(layers[4].len(), 2);
    assert!(layers[5].is_empty());
}

#[test]
fn test_selection_adds_ports_and_halo() {
    let vessels = vec![
        Vessel::test_default("a", 10),
        Vessel::test_default("b", 90),
    ];

    let layers = compose_layers(&vessels, Some(&"b".into()));

    let ports = layers[3].as_scatter().unwrap();
    assert_eq!(ports.features.len(), 2);
    assert_eq!(ports.features[0].key, "SGSIN");
    assert_eq!(ports.features[0].fill_color, POL_COLOR);
    assert_eq!(ports.features[1].key, "USNYC");
    assert_eq!(ports.features[1].fill_color, POD_COLOR);
    assert!(ports.features.iter().all(|f| f.radius == PORT_RADIUS));

    let halo = layers[5].as_scatter().unwrap();
    assert_eq!(halo.features.len(), 1);
    assert_eq!(halo.features[0].key, "b");
    assert_eq!(halo.features[0].position, vessels[1].position);
    assert!(halo.features[0].radius > PORT_RADIUS);
    assert!(halo.features[0].fill_color.0[3] < 255);
}

#[test]
fn test_unknown_selection_yields_empty_selection_layers() {
    let vessels = vec![Vessel::test_default("a", 10)];

    let layers = compose_layers(&vessels, Some(&"missing".into()));

    assert!(layers[0].is_empty());
    assert!(layers[3].is_empty());
    assert!(layers[5].is_empty());
    assert_eq!(markers(&layers).features[0].size, MARKER_SIZE);
}

#[test]
fn test_original_route_only_for_selected_deviated_vessel() {
    let mut a = Vessel::test_default("a", 10);
    a.original_path = Some(vec![Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 1.0)]);
    let mut b = Vessel::test_default("b", 10);
    b.original_path = Some(vec![Coordinates::new(2.0, 2.0), Coordinates::new(3.0, 3.0)]);
    let c = Vessel::test_default("c", 10);
    let vessels = vec![a, b, c];

    let layers = compose_layers(&vessels, Some(&"a".into()));
    let routes = layers[0].as_path().unwrap();
    assert_eq!(routes.features.len(), 1);
    assert_eq!(routes.features[0].vessel_id.as_str(), "a");
    assert_eq!(routes.features[0].color, DEVIATION_COLOR);
    assert!(routes.dash_array.is_some());

    let layers = compose_layers(&vessels, Some(&"c".into()));
    assert!(layers[0].is_empty());
}

#[test]
fn test_track_color_rule_holds_for_all_vessels() {
    let vessels: Vec<_> = [0, 50, 70, 71, 85, 100]
        .into_iter()
        .enumerate()
        .map(|(i, risk)| Vessel::test_default(&i.to_string(), risk))
        .collect();

    for selected in [None, Some(&vessels[4].id), Some(&vessels[0].id)] {
        let layers = compose_layers(&vessels, selected);
        for (vessel, feature) in vessels.iter().zip(&tracks(&layers).features) {
            let is_selected = selected == Some(&vessel.id);
            let expected = if is_selected {
                PRIMARY_COLOR
            } else if vessel.risk_score.value() > 70 {
                CRITICAL_COLOR
            } else {
                PRIMARY_COLOR
            };
            assert_eq!(feature.color, expected);
            assert_eq!(
                feature.width,
                if is_selected {
                    SELECTED_TRACK_WIDTH
                } else {
                    TRACK_WIDTH
                }
            );
        }
    }
}

#[test]
fn test_marker_color_is_tiered_independent_of_selection() {
    let (vessels, colors): (Vec<_>, Vec<_>) = [
        (0, SAFE_COLOR),
        (49, SAFE_COLOR),
        (50, WARNING_COLOR),
        (79, WARNING_COLOR),
        (80, CRITICAL_COLOR),
        (100, CRITICAL_COLOR),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (risk, color))| (Vessel::test_default(&i.to_string(), risk), color))
    .unzip();

    for selected in [None, Some(&vessels[0].id), Some(&vessels[5].id)] {
        let layers = compose_layers(&vessels, selected);
        let actual: Vec<_> = markers(&layers).features.iter().map(|f| f.color).collect();
        assert_eq!(actual, colors);
    }
}

#[test]
fn test_selection_scenario() {
    let a = Vessel::test_default("A", 85).with_position(Coordinates::new(120.0, 30.0));
    let b = Vessel::test_default("B", 30).with_position(Coordinates::new(-10.0, 45.0));
    let mut store = VesselStore::default();
    store.ingest(vec![a.clone(), b]);

    let layers = compose_layers(store.vessels(), store.selected_vessel_id());
    let icons = markers(&layers);
    let colors: Vec<_> = icons.features.iter().map(|f| f.color).collect();
    let sizes: Vec<_> = icons.features.iter().map(|f| f.size).collect();
    assert_eq!(colors, vec![CRITICAL_COLOR, SAFE_COLOR]);
    assert_eq!(sizes, vec![MARKER_SIZE, MARKER_SIZE]);

    store.select(Some("A".into()));
    let layers = compose_layers(store.vessels(), store.selected_vessel_id());
    let sizes: Vec<_> = markers(&layers).features.iter().map(|f| f.size).collect();
    assert_eq!(sizes, vec![SELECTED_MARKER_SIZE, MARKER_SIZE]);
    assert_eq!(store.viewport().center(), a.position);
    assert_eq!(store.viewport().zoom, 5.0);
    assert_eq!(
        store.viewport().transition_duration,
        Some(std::time::Duration::from_millis(1000))
    );

    store.select(None);
    assert_eq!(store.viewport().center(), a.position);
    assert!(store.selected_vessel_id().is_none());
    let layers = compose_layers(store.vessels(), store.selected_vessel_id());
    assert!(layers[5].is_empty());
}

#[test]
fn test_marker_hit_test_resolves_vessel_id() {
    let vessels = vec![
        Vessel::test_default("a", 10).with_position(Coordinates::new(0.0, 0.0)),
        Vessel::test_default("b", 10).with_position(Coordinates::new(40.0, 0.0)),
    ];
    let layers = compose_layers(&vessels, None);

    let hit = markers(&layers).hit_test(Coordinates::new(40.5, 0.5), 0.1);
    assert_eq!(hit, Some(&VesselId::from("b")));
    assert!(markers(&layers).hit_test(Coordinates::new(20.0, 0.0), 0.1).is_none());
}

#[test]
fn test_layer_cache_memoizes_on_collection_and_selection() {
    let mut store = VesselStore::default();
    store.ingest(vec![Vessel::test_default("a", 10)]);
    let mut cache = LayerCache::default();

    let first = cache.layers(store.vessels(), store.selected_vessel_id());
    store.set_viewport(Viewport {
        zoom: 7.0,
        ..Default::default()
    });
    store.set_view_mode(ViewMode::List);
    let second = cache.layers(store.vessels(), store.selected_vessel_id());

    assert!(first.ptr_eq(&second));
    assert_eq!(cache.recomputations(), 1);

    store.select(Some("a".into()));
    let third = cache.layers(store.vessels(), store.selected_vessel_id());
    assert!(!third.ptr_eq(&second));
    assert_eq!(cache.recomputations(), 2);

    store.ingest(vec![Vessel::test_default("a", 10)]);
    cache.layers(store.vessels(), store.selected_vessel_id());
    assert_eq!(cache.recomputations(), 3);
}

#[test]
fn test_layer_stack_lookup() {
    let mut cache = LayerCache::default();
    let vessels = VesselCollection::from(vec![Vessel::test_default("a", 10)]);

    let stack = cache.layers(&vessels, None);

    assert_eq!(stack.len(), 6);
    assert_eq!(stack.get(LayerId::ActiveRoutes).unwrap().kind(), LayerKind::Path);
    assert_eq!(stack.vessel_markers().unwrap().features.len(), 1);
}
