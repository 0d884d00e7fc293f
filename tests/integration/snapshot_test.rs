use hwbridge::core::bridge::Snapshot;
use hwbridge::core::hardware::StaticSystemInfo;

fn sample() -> Snapshot {
    Snapshot {
        motherboard_model: "Gigabyte X570 AORUS ELITE".to_string(),
        cpu_temp: 56.5,
        ccd_temperatures: vec![Some(51.0), None],
        cpu_voltage: Some(1.25),
        cpu_power: Some(92.5),
        chipset_temp: Some(47.0),
        memory_usage: 63.2,
        memory_temp: None,
        total_memory_mb: 32768,
        memory_speed_mts: 3600,
    }
}

#[test]
fn test_wire_field_names_are_exact() {
    let value = serde_json::to_value(sample()).unwrap();
    let object = value.as_object().unwrap();

    // The GUI deserializes these exact keys; renaming any of them breaks
    // the consumer silently.
    let expected = [
        "MotherboardModel",
        "CpuTemp",
        "CcdTemperatures",
        "CpuVoltage",
        "CpuPower",
        "ChipsetTemp",
        "MemoryUsage",
        "MemoryTemp",
        "TotalMemoryMB",
        "MemorySpeedMTS",
    ];
    for key in expected {
        assert!(object.contains_key(key), "missing wire field {}", key);
    }
    assert_eq!(object.len(), expected.len());
}

#[test]
fn test_absent_optionals_serialize_as_null() {
    let value = serde_json::to_value(sample()).unwrap();

    assert!(value["MemoryTemp"].is_null());
    assert_eq!(value["CcdTemperatures"][1], serde_json::Value::Null);
    assert_eq!(value["CpuVoltage"].as_f64().unwrap(), 1.25);
}

#[test]
fn test_serialized_line_has_no_embedded_newline() {
    let line = serde_json::to_string(&sample()).unwrap();
    assert!(!line.contains('\n'));
}

#[test]
fn test_from_static_starts_at_defaults() {
    let info = StaticSystemInfo {
        motherboard_model: "Unknown".to_string(),
        total_memory_mb: 16384,
        memory_speed_mts: 0,
    };
    let snapshot = Snapshot::from_static(&info);

    assert_eq!(snapshot.motherboard_model, "Unknown");
    assert_eq!(snapshot.cpu_temp, 0.0);
    assert_eq!(snapshot.memory_usage, 0.0);
    assert!(snapshot.ccd_temperatures.is_empty());
    assert_eq!(snapshot.cpu_voltage, None);
    assert_eq!(snapshot.cpu_power, None);
    assert_eq!(snapshot.chipset_temp, None);
    assert_eq!(snapshot.memory_temp, None);
    assert_eq!(snapshot.total_memory_mb, 16384);
    assert_eq!(snapshot.memory_speed_mts, 0);
}

#[test]
fn test_degraded_run_serializes_unknown_board_and_null_chipset() {
    let info = StaticSystemInfo {
        motherboard_model: "Unknown".to_string(),
        total_memory_mb: 8192,
        memory_speed_mts: 2400,
    };
    let value = serde_json::to_value(Snapshot::from_static(&info)).unwrap();

    assert_eq!(value["MotherboardModel"], "Unknown");
    assert!(value["ChipsetTemp"].is_null());
    assert_eq!(value["TotalMemoryMB"], 8192);
}
