use hwbridge::platform::get_process_directory;

#[test]
fn test_factory_directory_sees_own_process() {
    let mut directory = get_process_directory();
    assert!(directory.is_alive(std::process::id()));
}

#[test]
fn test_sentinel_and_absent_pids_read_as_dead() {
    let mut directory = get_process_directory();

    assert!(!directory.is_alive(0));
    // Top of the pid space is effectively never in use
    assert!(!directory.is_alive(u32::MAX));
}

#[test]
fn test_resolve_parent_of_absent_pid_returns_zero() {
    let mut directory = get_process_directory();
    assert_eq!(directory.resolve_parent(u32::MAX), 0);
}

#[test]
fn test_startup_ancestry_walk() {
    // The exact walk bootstrap performs: own parent, then its parent.
    let mut directory = get_process_directory();

    let parent = directory.resolve_parent(std::process::id());
    assert_ne!(parent, 0, "the test runner must be resolvable");
    assert!(directory.is_alive(parent));

    // The grandparent may be 0 in a shallow tree (e.g. a container's
    // init); anything non-zero must come from the same scan rules.
    let grandparent = directory.resolve_parent(parent);
    if grandparent != 0 {
        assert_ne!(grandparent, parent);
    }
}

#[test]
fn test_repeated_scans_are_consistent_for_stable_processes() {
    let mut directory = get_process_directory();
    let own = std::process::id();

    // Our own parent does not change between scans while both ends live
    let first = directory.resolve_parent(own);
    let second = directory.resolve_parent(own);
    assert_eq!(first, second);
}
