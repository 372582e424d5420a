//! Full lifecycle tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises the entities over
//! real HTTP through the blocking ureq transport. Each test gets its own
//! server so state never leaks between them.

use std::net::SocketAddr;

use booleans_core::{store, BitString, Remote, RemoteBool, Stored};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn single_boolean_lifecycle() {
    let remote = Remote::new(&format!("http://{}", start_server()));

    // Step 1: create; the service assigns the identifier.
    let mut flag = RemoteBool::create(&remote, false).unwrap();
    assert!(!flag.id().is_empty());
    assert!(!flag.value());
    assert_eq!(flag.to_string(), "0");

    // Step 2: set and toggle, cache following confirmed writes.
    assert!(flag.set(true).unwrap());
    assert!(flag.value());
    assert_eq!(flag.to_string(), "1");
    assert!(flag.toggle().unwrap());
    assert!(!flag.value());

    // Step 3: a clone aliases the same resource with its own cache.
    let mut alias = flag.clone();
    assert!(flag.set(true).unwrap());
    assert!(!alias.value());
    assert!(alias.pull().unwrap());
    assert!(alias.value());

    // Step 4: push re-sends the cached value.
    assert!(flag.push().unwrap());

    // Step 5: save and load reconstruct identifier and value offline.
    let path = std::env::temp_dir().join("booleans-integration-single");
    store::save(&path, &Stored::from(flag.clone()), true).unwrap();
    let loaded = store::load(&path, &remote).unwrap().into_single().unwrap();
    assert_eq!(loaded.id(), flag.id());
    assert_eq!(loaded.value(), flag.value());
    std::fs::remove_file(&path).unwrap();

    // Step 6: destroy; the identifier dangles and everything reports missing.
    assert!(flag.destroy().unwrap());
    assert!(!flag.destroy().unwrap());
    assert!(!alias.pull().unwrap());
    assert!(alias.value());
    assert!(!flag.set(false).unwrap());
}

#[test]
fn bit_string_lifecycle() {
    let remote = Remote::new(&format!("http://{}", start_server()));

    // Step 1: four fresh bits, all false.
    let mut bits = BitString::create(&remote, 4).unwrap();
    assert_eq!(bits.len(), 4);
    assert_eq!(bits.ids().len(), 4);
    assert_eq!(bits.bits(), "0000");
    assert_eq!(bits.to_u128(), 0);

    // Step 2: indexed write at bit 2.
    assert!(bits.set(2, true).unwrap().unwrap());
    assert_eq!(bits.bits(), "0100");
    assert_eq!(bits.to_u128(), 4);

    // Step 3: out-of-range access attempts nothing.
    assert!(bits.set(4, true).is_none());
    assert_eq!(bits.get(4), None);

    // Step 4: an external write shows up on pull.
    let id0 = bits.ids()[0].to_string();
    let mut outsider = RemoteBool::attach(&remote, id0, false);
    assert!(outsider.set(true).unwrap());
    assert_eq!(bits.get(0), Some(false));
    assert_eq!(bits.pull().unwrap(), vec![true; 4]);
    assert_eq!(bits.to_u128(), 5);

    // Step 5: push every cached value.
    assert_eq!(bits.push().unwrap(), vec![true; 4]);

    // Step 6: save and load preserve order, count, identifiers, values.
    let path = std::env::temp_dir().join("booleans-integration-sequence");
    store::save(&path, &Stored::from(bits.clone()), true).unwrap();
    let loaded = store::load(&path, &remote).unwrap().into_sequence().unwrap();
    assert_eq!(loaded.len(), bits.len());
    assert_eq!(loaded.ids(), bits.ids());
    assert_eq!(loaded.bits(), bits.bits());
    std::fs::remove_file(&path).unwrap();

    // Step 7: destroy one element out-of-band, then destroy the sequence;
    // every element is attempted and the gap is reported in place.
    let id1 = bits.ids()[1].to_string();
    assert!(RemoteBool::attach(&remote, id1, false).destroy().unwrap());
    assert_eq!(bits.destroy().unwrap(), [true, false, true, true]);

    // Step 8: a second destroy finds nothing left.
    assert_eq!(bits.destroy().unwrap(), vec![false; 4]);
}
