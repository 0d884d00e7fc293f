use hwbridge::core::hardware::{
    BoardDescriptor, Capabilities, HardwareNode, HardwareSession, MemoryModule, SensorSource,
};

/// Configurable fake backend for exercising the session open rules.
struct FakeSource {
    board: Option<BoardDescriptor>,
    modules: Vec<MemoryModule>,
    total_bytes: u64,
}

impl FakeSource {
    fn with_board() -> Self {
        Self {
            board: Some(BoardDescriptor {
                manufacturer: Some("Micro-Star International".to_string()),
                product: Some("B450 TOMAHAWK".to_string()),
            }),
            modules: Vec::new(),
            total_bytes: 0,
        }
    }

    fn without_board() -> Self {
        Self {
            board: None,
            modules: Vec::new(),
            total_bytes: 0,
        }
    }
}

impl SensorSource for FakeSource {
    fn backend(&self) -> &'static str {
        "fake"
    }

    fn board(&mut self) -> Option<BoardDescriptor> {
        self.board.clone()
    }

    fn memory_modules(&mut self) -> Vec<MemoryModule> {
        self.modules.clone()
    }

    fn total_memory_bytes(&mut self) -> u64 {
        self.total_bytes
    }

    fn refresh_and_read(&mut self) -> Vec<HardwareNode> {
        Vec::new()
    }
}

fn module(capacity_gib: u64, speed_mts: Option<u32>, slot: &str) -> MemoryModule {
    MemoryModule {
        capacity_bytes: capacity_gib * 1024 * 1024 * 1024,
        speed_mts,
        slot: Some(slot.to_string()),
    }
}

#[test]
fn test_open_with_motherboard_requires_board_identity() {
    let result =
        HardwareSession::with_source(Box::new(FakeSource::without_board()), Capabilities::full());
    assert!(result.is_err());
}

#[test]
fn test_degraded_open_succeeds_without_board_identity() {
    // The retry path: same backend, motherboard capability dropped
    let session = HardwareSession::with_source(
        Box::new(FakeSource::without_board()),
        Capabilities::full().without_motherboard(),
    )
    .unwrap();

    assert!(!session.capabilities().motherboard);
    assert_eq!(session.static_info().motherboard_model, "Unknown");
}

#[test]
fn test_full_open_reports_board_display_name() {
    let session =
        HardwareSession::with_source(Box::new(FakeSource::with_board()), Capabilities::full())
            .unwrap();

    assert_eq!(
        session.static_info().motherboard_model,
        "Micro-Star International B450 TOMAHAWK"
    );
}

#[test]
fn test_memory_capacity_sums_over_modules() {
    let mut source = FakeSource::with_board();
    source.modules = vec![
        module(16, Some(3200), "DIMM_A1"),
        module(16, Some(3600), "DIMM_B1"),
    ];

    let session = HardwareSession::with_source(Box::new(source), Capabilities::full()).unwrap();
    let info = session.static_info();

    assert_eq!(info.total_memory_mb, 32 * 1024);
    // Fastest rated module wins
    assert_eq!(info.memory_speed_mts, 3600);
}

#[test]
fn test_memory_capacity_falls_back_to_system_total() {
    let mut source = FakeSource::with_board();
    source.total_bytes = 16 * 1024 * 1024 * 1024;

    let session = HardwareSession::with_source(Box::new(source), Capabilities::full()).unwrap();
    let info = session.static_info();

    // No enumerable modules: system total, speed unknown
    assert_eq!(info.total_memory_mb, 16 * 1024);
    assert_eq!(info.memory_speed_mts, 0);
}

#[test]
fn test_modules_without_rated_speed_report_zero() {
    let mut source = FakeSource::with_board();
    source.modules = vec![module(8, None, "DIMM_A1"), module(8, None, "DIMM_A2")];

    let session = HardwareSession::with_source(Box::new(source), Capabilities::full()).unwrap();
    let info = session.static_info();

    assert_eq!(info.total_memory_mb, 16 * 1024);
    assert_eq!(info.memory_speed_mts, 0);
}

#[test]
fn test_capability_helpers() {
    let full = Capabilities::full();
    assert!(full.memory);
    assert!(full.motherboard);

    let degraded = full.without_motherboard();
    assert!(degraded.memory);
    assert!(!degraded.motherboard);
}
