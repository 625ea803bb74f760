#![allow(missing_docs)]
use enigma_core::catalog;
use enigma_core::error::{ConfigError, EnigmaError};
use enigma_core::key_generator::{MAX_PLUG_PAIRS, generate_settings};
use enigma_core::machine::Stepping;
use enigma_core::session::Session;
use enigma_core::settings::{self, MachineSettings};
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

fn enigma_i() -> MachineSettings {
    MachineSettings::new(["I", "II", "III"], ['A', 'A', 'A'], "B")
}

#[test]
fn test_catalog_lookup() {
    assert_eq!(catalog::rotor("iii").map(|m| m.notch), Some("V"));
    assert_eq!(catalog::reflector(" b ").map(|m| m.name), Some("B"));
    assert!(catalog::rotor("VI").is_none());
    assert!(catalog::reflector("D").is_none());
}

#[test]
fn test_catalog_entries_are_valid() {
    let settings = MachineSettings::new(["IV", "V", "I"], ['A', 'B', 'C'], "A");
    assert!(settings.build().is_ok());
    for reflector in &catalog::REFLECTORS {
        let mut settings = enigma_i();
        settings.reflector = reflector.name.to_string();
        assert!(settings.build().is_ok(), "reflector {} rejected", reflector.name);
    }
}

#[test]
fn test_settings_build_and_record_positions() {
    let mut settings = enigma_i();
    let mut machine = settings.build().expect("valid settings");
    assert_eq!(machine.encrypt_sequence("AAAAA"), "BDZGO");

    settings.record_positions(&machine);
    assert_eq!(settings.position_string(), "AAF");
    assert_eq!(settings.rotors[2].position, "F");
}

#[test]
fn test_settings_configuration_errors() {
    let mut settings = enigma_i();
    settings.rotors[0].name = "VI".to_string();
    assert_eq!(
        settings.build(),
        Err(ConfigError::UnknownRotor("VI".to_string()))
    );

    let mut settings = enigma_i();
    settings.reflector = "D".to_string();
    assert_eq!(
        settings.build(),
        Err(ConfigError::UnknownReflector("D".to_string()))
    );

    let mut settings = enigma_i();
    settings.rotors[1].position = "1".to_string();
    assert!(matches!(
        settings.build(),
        Err(ConfigError::InvalidLetter { what: "rotor position", .. })
    ));

    let mut settings = enigma_i();
    settings.rotors.pop();
    assert_eq!(settings.build(), Err(ConfigError::RotorCount(2)));

    let mut settings = enigma_i();
    settings.plugboard = vec![
        ("A".to_string(), "B".to_string()),
        ("C".to_string(), "A".to_string()),
    ];
    assert_eq!(
        settings.build(),
        Err(ConfigError::PlugboardConflict { letter: 'A' })
    );
}

#[test]
fn test_settings_json_defaults() {
    let json = r#"{
        "rotors": [
            { "name": "I", "position": "A" },
            { "name": "II", "position": "B" },
            { "name": "III", "position": "C" }
        ],
        "reflector": "B"
    }"#;
    let parsed: MachineSettings = serde_json::from_str(json).expect("valid key sheet");
    assert_eq!(parsed.stepping, Stepping::RightFast);
    assert!(parsed.plugboard.is_empty());
    assert!(parsed.id.is_empty());

    let json = r#"{
        "rotors": [
            { "name": "I", "position": "A" },
            { "name": "II", "position": "B" },
            { "name": "III", "position": "C" }
        ],
        "reflector": "B",
        "plugboard": [["A", "M"], ["B", "N"]],
        "stepping": "left-fast"
    }"#;
    let parsed: MachineSettings = serde_json::from_str(json).expect("valid key sheet");
    assert_eq!(parsed.stepping, Stepping::LeftFast);
    assert_eq!(parsed.plugboard.len(), 2);
    assert!(parsed.build().is_ok());
}

#[test]
fn test_settings_save_and_load() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("key.json");

    let mut original = generate_settings(10, Stepping::LeftFast);
    original.rotors[0].position = "Q".to_string();
    settings::save_settings(&path, &original).expect("Failed to save key sheet");

    let loaded = settings::load_settings(&path).expect("Failed to load key sheet");
    assert_eq!(loaded, original);
}

#[test]
fn test_load_settings_errors() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("missing.json");
    assert!(settings::load_settings(&missing).is_err());

    let garbage = temp_dir.path().join("garbage.json");
    fs::write(&garbage, "{ not json").expect("Failed to write file");
    let err = settings::load_settings(&garbage).expect_err("garbage must not parse");
    assert_eq!(err.kind(), std::io::ErrorKind::Other);
}

#[test]
fn test_generated_settings_are_valid() {
    let generated = generate_settings(10, Stepping::RightFast);
    assert!(!generated.id.is_empty());
    assert_eq!(generated.rotors.len(), 3);
    assert_eq!(generated.plugboard.len(), 10);
    assert_eq!(generated.stepping, Stepping::RightFast);

    let names: HashSet<&str> = generated.rotors.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names.len(), 3, "rotors must be distinct");

    let machine = generated.build().expect("generated key sheet must build");
    assert_eq!(machine.plugboard().pairs().len(), 10);
}

#[test]
fn test_generated_plugboard_is_clamped() {
    let generated = generate_settings(99, Stepping::RightFast);
    assert_eq!(generated.plugboard.len(), MAX_PLUG_PAIRS);
    assert!(generated.build().is_ok());

    let other = generate_settings(0, Stepping::RightFast);
    assert!(other.plugboard.is_empty());
    assert_ne!(generated.id, other.id);
}

#[test]
fn test_session_requires_configuration() {
    let mut session = Session::new();
    assert_eq!(session.press('A'), Err(EnigmaError::Uninitialized));
    assert_eq!(session.encrypt("HELLO"), Err(EnigmaError::Uninitialized));
    assert!(session.machine().is_err());
}

#[test]
fn test_session_keypresses_carry_state() {
    let mut session = Session::new();
    session.configure(&enigma_i()).expect("valid settings");

    let first = session.press('a').expect("configured");
    assert_eq!(first.ciphertext, "B");
    let rest = session.encrypt("AAAA").expect("configured");
    assert_eq!(rest.ciphertext, "DZGO");
    assert_eq!(
        rest.rotor_positions.map(|p| p.to_char()),
        ['A', 'A', 'F']
    );

    let space = session.press(' ').expect("configured");
    assert_eq!(space.ciphertext, " ");
    assert_eq!(space.rotor_positions, rest.rotor_positions);

    session.reset();
    assert_eq!(session.press('A'), Err(EnigmaError::Uninitialized));
}

#[test]
fn test_session_keeps_machine_when_configuration_fails() {
    let mut session = Session::new();
    session.configure(&enigma_i()).expect("valid settings");
    session.press('A').expect("configured");

    let mut bad = enigma_i();
    bad.reflector = "Z".to_string();
    assert_eq!(
        session.configure(&bad),
        Err(EnigmaError::Config(ConfigError::UnknownReflector(
            "Z".to_string()
        )))
    );

    let machine = session.machine().expect("previous machine kept");
    assert_eq!(machine.position_string(), "AAB");
}

#[test]
fn test_session_install() {
    let mut session = Session::default();
    let mut settings = enigma_i();
    settings.stepping = Stepping::LeftFast;
    session.install(settings.build().expect("valid settings"));
    assert_eq!(
        session.machine().map(|m| m.stepping()),
        Ok(Stepping::LeftFast)
    );
}

#[test]
fn test_session_press_traced() {
    let mut session = Session::new();
    assert_eq!(session.press_traced('A'), Err(EnigmaError::Uninitialized));

    session.configure(&enigma_i()).expect("valid settings");
    let trace = session
        .press_traced('A')
        .expect("configured")
        .expect("letter input");
    assert_eq!(trace.output.to_char(), 'B');
    assert_eq!(session.press_traced('?'), Ok(None));
    assert_eq!(
        session.machine().map(|m| m.position_string()),
        Ok("AAB".to_string())
    );
}
