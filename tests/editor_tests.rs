use printdeck::profile::*;

/// A record with non-default values in every area the form touches.
fn exercised_record() -> ProfileRecord {
    let mut record = ProfileRecord::clean();
    record.id = "workhorse".to_string();
    record.name = "Workhorse XL".to_string();
    record.model = "XL-500".to_string();
    record.color = "blue".to_string();
    record.volume.width = 300.0;
    record.volume.height = 350.5;
    record.heated_bed = false;
    record.extruder.count = 3;
    record.extruder.offsets = vec![[0.0, 0.0], [18.0, 0.0], [36.0, -0.25]];
    record.extruder.nozzle_diameter = 0.6;
    record.machine_type = MachineType::Delta;
    record.volume.form_factor = FormFactor::Circular;
    record.volume.origin = Origin::Center;
    record.axes.x.speed = 12000;
    record.axes.z.inverted = true;
    record.steps_per_unit.e0 = 420.5;
    record.stepper_current.z = 600;
    record.pids.t0.p = 22.2;
    record.advanced_variables.max_xy_jerk = 12.5;
    record
}

#[test]
fn test_round_trip_preserves_record() {
    let record = exercised_record();
    let editor = ProfileEditor::from_record(&record, false);
    let rebuilt = editor.to_record();
    assert_eq!(record, rebuilt, "Record changed after hydrate/dehydrate round-trip");
}

#[test]
fn test_round_trip_preserves_unexposed_fields() {
    let mut record = exercised_record();
    record.pids.t0.limit = Some(12.0);
    record.pids.t0.factor = Some(0.05);
    record.pids.bed.offset = Some(35.0);
    record.cmd_print_start = Some(vec![types::GcodeCommand {
        cmd: "G28".to_string(),
    }]);
    record.cmd_print_stop = Some(vec![types::GcodeCommand {
        cmd: "M104 S0".to_string(),
    }]);

    let rebuilt = ProfileEditor::from_record(&record, false).to_record();
    assert_eq!(rebuilt.pids.t0.limit, Some(12.0));
    assert_eq!(rebuilt.pids.t0.factor, Some(0.05));
    assert_eq!(rebuilt.pids.bed.offset, Some(35.0));
    assert_eq!(record.cmd_print_start, rebuilt.cmd_print_start);
    assert_eq!(record.cmd_print_stop, rebuilt.cmd_print_stop);
}

#[test]
fn test_sanitizer_strips_and_replaces() {
    assert_eq!(sanitize_identifier("My Printer!"), "My_Printer");
    assert_eq!(sanitize_identifier("a/b\\c"), "abc");
    assert_eq!(sanitize_identifier("ok-v2.1_(beta)"), "ok-v2.1_(beta)");
}

#[test]
fn test_sanitizer_is_idempotent() {
    let inputs = ["My Printer!", "weird\u{00e9}name", "  spaces  ", "(a) b.c-d_e"];
    for input in inputs {
        let once = sanitize_identifier(input);
        assert_eq!(once, sanitize_identifier(&once), "Not idempotent for {:?}", input);
    }
}

#[test]
fn test_identifier_placeholder_tracks_name() {
    let mut editor = ProfileEditor::new();
    editor.set_name("My Printer".to_string());
    assert_eq!(editor.identifier_placeholder, "my_printer");
    assert_eq!(editor.resolved_identifier(), "my_printer");

    editor.identifier = "explicit_id".to_string();
    assert_eq!(editor.resolved_identifier(), "explicit_id");
}

#[test]
fn test_identifier_duplicate_only_blocks_new_profiles() {
    let mut listed = ListedProfile {
        profile: ProfileRecord::clean(),
        is_default: false,
        is_current: false,
        resource: None,
    };
    listed.profile.id = "my_printer".to_string();
    listed.profile.name = "My Printer".to_string();
    let cache = ProfileCollection::from_response(ProfileList {
        profiles: vec![listed],
    });

    let mut editor = ProfileEditor::new();
    editor.set_name("My Printer".to_string());
    assert_eq!(
        editor.identifier_error(&cache),
        Some(IdentifierError::AlreadyExists)
    );

    // editing the existing profile keeps its own identifier valid
    let mut existing = ProfileRecord::clean();
    existing.id = "my_printer".to_string();
    existing.name = "My Printer".to_string();
    let editor = ProfileEditor::from_record(&existing, false);
    assert_eq!(editor.identifier_error(&cache), None);
}

#[test]
fn test_identifier_error_priority() {
    let cache = ProfileCollection::default();

    let mut editor = ProfileEditor::new();
    editor.set_name(String::new());
    editor.identifier = String::new();
    assert_eq!(editor.identifier_error(&cache), Some(IdentifierError::MustBeSet));

    editor.identifier = "has spaces".to_string();
    assert_eq!(
        editor.identifier_error(&cache),
        Some(IdentifierError::InvalidCharacters)
    );

    editor.identifier = "clean-id".to_string();
    assert_eq!(editor.identifier_error(&cache), None);
}

#[test]
fn test_delta_forces_circular_centered_bed() {
    let mut editor = ProfileEditor::new();
    editor.set_machine_type(MachineType::Delta);
    assert_eq!(editor.form_factor, FormFactor::Circular);
    assert_eq!(editor.origin, Origin::Center);
    assert!(editor.delta_form_visible());

    editor.set_machine_type(MachineType::Xyz);
    assert_eq!(editor.form_factor, FormFactor::Rectangular);
    assert_eq!(editor.origin, Origin::Lowerleft);
    assert!(!editor.delta_form_visible());
}

#[test]
fn test_circular_bed_restricts_origin_choices() {
    let mut editor = ProfileEditor::new();
    assert_eq!(
        editor.available_origins(),
        &[Origin::Lowerleft, Origin::Center]
    );
    editor.set_form_factor(FormFactor::Circular);
    assert_eq!(editor.available_origins(), &[Origin::Center]);
    assert_eq!(editor.origin, Origin::Center);
}

#[test]
fn test_offset_rows_follow_extruder_count() {
    let mut editor = ProfileEditor::new();
    assert!(editor.visible_offsets().is_empty());

    editor.set_extruder_count("4".to_string());
    assert_eq!(editor.visible_offsets().len(), 3);

    // first extruder is always pinned to the origin on serialize
    let record = editor.to_record();
    assert_eq!(record.extruder.offsets[0], [0.0, 0.0]);
    assert_eq!(record.extruder.offsets.len(), 4);
}

#[test]
fn test_thermocouple_conflict_detection() {
    let mut editor = ProfileEditor::new();
    editor.thermocouple_max6675 = "2".to_string();
    editor.thermocouple_ad597 = "2".to_string();
    assert!(editor.thermocouple_conflict());

    // both unassigned is not a conflict
    editor.thermocouple_max6675 = "0".to_string();
    editor.thermocouple_ad597 = "0".to_string();
    assert!(!editor.thermocouple_conflict());

    editor.thermocouple_max6675 = "1".to_string();
    editor.thermocouple_ad597 = "2".to_string();
    assert!(!editor.thermocouple_conflict());
}

#[test]
fn test_submit_gated_by_validity_and_in_flight_request() {
    let cache = ProfileCollection::default();
    let mut editor = ProfileEditor::new();
    editor.set_name("Printer".to_string());

    assert!(editor.submit_allowed(&cache, false));
    assert!(!editor.submit_allowed(&cache, true));

    editor.set_name(String::new());
    editor.identifier = "still_has_id".to_string();
    assert!(!editor.submit_allowed(&cache, false));
}

#[test]
fn test_wire_format_field_names() {
    let record = ProfileRecord::clean();
    let value = serde_json::to_value(&record).expect("Failed to serialize record");
    let obj = value.as_object().expect("Record should serialize to an object");

    for key in [
        "id",
        "name",
        "machineType",
        "heatedBed",
        "delta_args",
        "stepperMircostep",
        "maxHeatPwmHotend",
        "autoLeveling",
        "zRaiseBeforeProbing",
        "accelerationMoveRetract",
        "advancedVariables",
    ] {
        assert!(obj.contains_key(key), "Missing wire key '{}'", key);
    }

    assert_eq!(value["machineType"], "XYZ");
    assert_eq!(value["volume"]["formFactor"], "rectangular");
    assert_eq!(value["volume"]["origin"], "lowerleft");
    assert_eq!(value["accelerationMoveRetract"]["move"], 4000.0);
    assert_eq!(value["advancedVariables"]["maxXYJerk"], 60.0);

    // unset passthrough command lists stay off the wire
    assert!(!obj.contains_key("cmdPrintStart"));
    assert!(!obj.contains_key("cmdPrintStop"));
}

#[test]
fn test_listing_response_parses_markers_and_resource() {
    let mut profile = serde_json::to_value(ProfileRecord::clean()).expect("serialize");
    profile["id"] = "alpha".into();
    profile["name"] = "Alpha".into();
    profile["default"] = true.into();
    profile["current"] = true.into();
    profile["resource"] = "http://localhost:5000/api/printerprofiles/alpha".into();

    let body = serde_json::json!({ "profiles": [profile] });
    let list: ProfileList = serde_json::from_value(body).expect("Failed to parse listing");
    let cache = ProfileCollection::from_response(list);

    assert_eq!(cache.default_id.as_deref(), Some("alpha"));
    assert_eq!(cache.current_id.as_deref(), Some("alpha"));
    assert_eq!(
        cache.profiles[0].resource.as_deref(),
        Some("http://localhost:5000/api/printerprofiles/alpha")
    );
    assert_eq!(
        cache.current_profile_data.as_ref().map(|p| p.name.as_str()),
        Some("Alpha")
    );
}

#[test]
fn test_lenient_numeric_degrade_does_not_block_serialization() {
    let mut editor = ProfileEditor::new();
    editor.volume_width = "banana".to_string();
    editor.max_heat_pwm_bed = String::new();
    let record = editor.to_record();
    assert_eq!(record.volume.width, 0.0);
    assert_eq!(record.max_heat_pwm_bed, 0);
}
