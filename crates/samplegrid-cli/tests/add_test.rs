use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use samplegrid_testing::{TestWorld, assertions};

#[test]
fn test_added_record_is_listed_first_and_persisted() {
    let world = TestWorld::new().with_fixture_catalog();

    let json = world
        .run_json(&["add", "S2", "--set", "material=glass"])
        .unwrap();
    assert_eq!(json["content"]["card"]["sample_id"], "S2");
    assert_eq!(json["content"]["total"], 2);
    assert_eq!(json["badge"]["label"], "Added S2 (2 records)");

    let json = world.run_json(&["list"]).unwrap();
    assertions::assert_card_ids(&json, &["S2", "S1"]).unwrap();

    let slot = world.slot_json().unwrap();
    assert_eq!(assertions::slot_ids(&slot).unwrap(), vec!["S2", "S1"]);
    // Unset select fields take the first option, unset text fields stay empty
    assert_eq!(slot[0]["market_sector"], "Automotive");
    assert_eq!(slot[0]["content"], "");

    let json = world.run_json(&["search", "STEEL"]).unwrap();
    assertions::assert_card_ids(&json, &["S1"]).unwrap();
}

#[test]
fn test_duplicate_sample_id_is_rejected_without_writing() {
    let world = TestWorld::new().with_fixture_catalog();
    world.run_json(&["init"]).unwrap();
    let before = world.read_slot().unwrap();

    let mut cmd = cargo_bin_cmd!("samplegrid");
    world
        .configure_command(&mut cmd)
        .args(["add", "S1", "--set", "material=glass"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Sample ID 'S1' already exists"));

    assert_eq!(world.read_slot().unwrap(), before);
}

#[test]
fn test_blank_sample_id_is_rejected() {
    let world = TestWorld::new().with_fixture_catalog();

    let result = world.run(&["add", "  "]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Sample ID is required"));
    let slot = world.slot_json().unwrap();
    assert_eq!(assertions::slot_ids(&slot).unwrap(), vec!["S1"]);
}

#[test]
fn test_select_value_must_be_an_option() {
    let world = TestWorld::new().with_fixture_catalog();

    let result = world
        .run(&["add", "S2", "--set", "market_sector=Marine"])
        .unwrap();

    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("'Marine' is not a valid option for field 'market_sector'")
    );
}

#[test]
fn test_sample_id_cannot_be_overridden_with_set() {
    let world = TestWorld::new().with_fixture_catalog();
    world.run_json(&["init"]).unwrap();
    let before = world.read_slot().unwrap();

    let result = world
        .run(&["add", "S2", "--set", "sample_id=S3"])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("positional SAMPLE_ID"));
    assert_eq!(world.read_slot().unwrap(), before);
}

#[test]
fn test_unknown_field_is_rejected() {
    let world = TestWorld::new().with_fixture_catalog();

    let result = world.run(&["add", "S2", "--set", "weight=3kg"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Unknown field 'weight'"));
}

#[test]
fn test_plain_add_shows_the_new_card() {
    let world = TestWorld::new().with_fixture_catalog();

    let mut cmd = cargo_bin_cmd!("samplegrid");
    world.configure_command(&mut cmd).args([
        "add",
        "S2",
        "--set",
        "content=Lens cover",
        "--set",
        "market_sector=Medical",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Added S2 (2 records)"))
        .stdout(predicate::str::contains("Lens cover"))
        .stdout(predicate::str::contains("Medical"))
        .stdout(predicate::str::contains("samplegrid show S2"));
}
