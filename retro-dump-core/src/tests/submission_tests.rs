use super::*;

#[test]
fn new_record_is_flagged() {
    let info = SubmissionInfo::new(System::Ps1, MediaType::CdRom);
    assert_eq!(info.common.system, Some(System::Ps1));
    assert_eq!(info.common.title, REQUIRED);
    assert_eq!(info.common.serial, REQUIRED_IF_EXISTS);
    assert_eq!(info.layer_count(), 1);
    assert!(is_placeholder(&info.common.layers[0].mastering_ring));
    assert!(info.fully_matched_id().is_none());
    assert!(info.partially_matched_ids().is_empty());
}

#[test]
fn full_match_leaves_partial_list() {
    let mut info = SubmissionInfo::new(System::Ps1, MediaType::CdRom);
    info.add_partial_matches([30, 10, 20, 10]);
    assert_eq!(info.partially_matched_ids(), &[10, 20, 30]);

    info.set_fully_matched(20);
    assert_eq!(info.fully_matched_id(), Some(20));
    assert_eq!(info.partially_matched_ids(), &[10, 30]);

    // Later partial hits never re-add the full match
    info.add_partial_matches([20, 40]);
    assert_eq!(info.partially_matched_ids(), &[10, 30, 40]);
}

#[test]
fn ensure_layers_caps_at_four() {
    let mut info = SubmissionInfo::new(System::Ps3, MediaType::BluRay);
    info.common.layers[0].mastering_ring = "RING-0".to_string();
    info.ensure_layers(3);
    assert_eq!(info.layer_count(), 3);
    assert_eq!(info.common.layers[0].mastering_ring, "RING-0");
    info.ensure_layers(9);
    assert_eq!(info.layer_count(), MAX_LAYERS);
}

#[test]
fn clear_placeholders_keeps_real_values() {
    let mut info = SubmissionInfo::new(System::Saturn, MediaType::CdRom);
    info.common.serial = "T-12345G".to_string();
    info.clear_placeholders();
    assert_eq!(info.common.title, "");
    assert_eq!(info.common.serial, "T-12345G");
    assert_eq!(info.common.layers[0].toolstamp, "");
}

#[test]
fn layerbreak_helpers() {
    let mut sizes = SizeAndChecksums::default();
    sizes.set_layerbreaks(&[100, 200]);
    assert_eq!(sizes.layerbreak, Some(100));
    assert_eq!(sizes.layerbreak2, Some(200));
    assert_eq!(sizes.layerbreak3, None);
    assert_eq!(sizes.layerbreaks(), vec![100, 200]);
    sizes.set_layerbreaks(&[]);
    assert!(sizes.layerbreaks().is_empty());
}

#[test]
fn seed_overrides_only_set_fields() {
    let mut info = SubmissionInfo::new(System::Ps2, MediaType::Dvd);
    info.common.serial = "SLUS-20001".to_string();
    info.versions.version = "1.01".to_string();

    let mut seed = SubmissionInfo::default();
    seed.common.title = "Test Title".to_string();
    seed.common.serial = REQUIRED.to_string();
    seed.common.region = Some(Region::Usa);
    seed.common.layers = vec![
        LayerInfo::default(),
        LayerInfo {
            mastering_ring: "L1 RING".to_string(),
            ..LayerInfo::default()
        },
    ];

    info.inject_seed(&seed);
    assert_eq!(info.common.title, "Test Title");
    assert_eq!(info.common.serial, "SLUS-20001");
    assert_eq!(info.versions.version, "1.01");
    assert_eq!(info.common.region, Some(Region::Usa));
    assert_eq!(info.layer_count(), 2);
    assert_eq!(info.common.layers[1].mastering_ring, "L1 RING");
    assert!(is_placeholder(&info.common.layers[0].mastering_ring));
}

#[test]
fn seed_parses_from_partial_json() {
    let seed: SubmissionInfo =
        serde_json::from_str(r#"{"common":{"title":"From JSON","languages":["English"]}}"#)
            .unwrap();
    assert_eq!(seed.common.title, "From JSON");
    assert_eq!(seed.common.languages, vec![Language::English]);
    assert!(seed.fully_matched_id().is_none());
}

#[test]
fn track_lines_skip_blanks() {
    let tracks = TracksAndWriteOffsets {
        clrmamepro_data: "<rom a/>\n\n  <rom b/>  \n".to_string(),
        ..Default::default()
    };
    assert_eq!(tracks.track_lines().collect::<Vec<_>>(), vec!["<rom a/>", "<rom b/>"]);
}
