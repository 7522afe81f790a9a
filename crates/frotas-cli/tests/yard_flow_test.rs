//! End-to-end yard flow over the persistent store

use frotas_app::{export_report, FleetFilter};
use frotas_store::YardStore;
use frotas_types::{Priority, VehicleStatus};
use tempfile::tempdir;

/// Full lifecycle: add, assign, load, dispatch, with stats and export
#[test]
fn test_full_yard_flow() {
    let dir = tempdir().unwrap();
    let mut store = YardStore::open(dir.path().to_path_buf()).unwrap();

    store.add_vehicle("CEG-0001", Priority::High).unwrap();
    store.add_vehicle("CEG-0002", Priority::Normal).unwrap();

    store.assign("CEG-0001", 1).unwrap();
    assert!(store.toggle_loaded("CEG-0001").unwrap());
    let dispatched = store.dispatch("CEG-0001").unwrap();
    assert_eq!(dispatched.status, VehicleStatus::Dispatched);
    assert_eq!(dispatched.dispatch_ramp, Some(1));

    // Ramp 1 is free again for the second vehicle
    store.assign("CEG-0002", 1).unwrap();

    let stats = store.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.on_ramp, 1);
    assert_eq!(stats.dispatched, 1);
    assert_eq!(stats.dispatched_today, 1);

    let filter = FleetFilter {
        status: Some(VehicleStatus::Dispatched),
        ..Default::default()
    };
    assert_eq!(filter.apply(store.vehicles()).len(), 1);

    let report = dir.path().join("relatorio.csv");
    export_report(store.vehicles(), &report).unwrap();
    let content = std::fs::read_to_string(&report).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains("CEG-0001"));
}

/// Reopening the store keeps the board consistent
#[test]
fn test_board_state_after_reopen() {
    let dir = tempdir().unwrap();
    {
        let mut store = YardStore::open(dir.path().to_path_buf()).unwrap();
        store.add_vehicle("ABC1D23", Priority::Low).unwrap();
        store.assign("ABC1D23", 6).unwrap();
        store.set_ramp_blocked(7, true).unwrap();
    }

    let store = YardStore::open(dir.path().to_path_buf()).unwrap();
    assert_eq!(store.vehicle_at(6).unwrap().plate, "ABC1D23");
    assert!(store.is_blocked(7));
    assert!(!store.free_ramps().contains(&6));
    assert!(!store.free_ramps().contains(&7));
    assert_eq!(store.free_ramps().len(), 14);
}
