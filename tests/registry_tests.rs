mod common;

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use std::thread;
use proptest::prelude::*;
use peer_directory::registry::enums::registry_error::RegistryError;
use peer_directory::registry::structs::file_catalog::FileCatalog;

fn localhost() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

#[test]
fn test_register_twice_keeps_one_record() {
    let registry = common::create_test_registry();
    let name = common::random_username();
    assert!(registry.register(&name).is_ok());
    assert_eq!(registry.register(&name), Err(RegistryError::UserAlreadyExists(name.clone())));
    assert_eq!(registry.user_count(), 1);
    assert_eq!(registry.get_stats().users, 1);
}

#[test]
fn test_unknown_user_is_never_mutated() {
    let registry = common::create_test_registry();
    let name = common::random_username();
    let unknown = RegistryError::UserNotFound(name.clone());

    assert_eq!(registry.connect(&name, localhost(), 5000), Err(unknown.clone()));
    assert_eq!(registry.disconnect(&name), Err(unknown.clone()));
    assert_eq!(registry.publish(&name, "a.txt", "x"), Err(unknown.clone()));
    assert_eq!(registry.delete(&name, "a.txt"), Err(unknown.clone()));
    assert_eq!(registry.list_users(&name), Err(unknown.clone()));
    assert_eq!(registry.list_content(&name, &name), Err(unknown.clone()));
    assert_eq!(registry.unregister(&name), Err(unknown));
    assert_eq!(registry.user_count(), 0);
}

#[test]
fn test_connect_twice_keeps_first_address() {
    let registry = common::create_test_registry();
    registry.register("alice").unwrap();
    registry.connect("alice", localhost(), 5000).unwrap();
    assert_eq!(
        registry.connect("alice", IpAddr::V6(Ipv6Addr::LOCALHOST), 6000),
        Err(RegistryError::AlreadyConnected("alice".to_string()))
    );

    let entry = registry.lookup("alice").unwrap();
    assert_eq!(entry.address, Some(localhost()));
    assert_eq!(entry.port, 5000);
}

#[test]
fn test_unregister_while_connected_is_permitted() {
    let registry = common::create_test_registry();
    registry.register("alice").unwrap();
    registry.connect("alice", localhost(), 5000).unwrap();
    registry.publish("alice", "a.txt", "x").unwrap();

    assert!(registry.unregister("alice").is_ok());
    assert!(registry.snapshot_connected().is_empty());

    let stats = registry.get_stats();
    assert_eq!(stats.users, 0);
    assert_eq!(stats.users_connected, 0);
    assert_eq!(stats.files, 0);
}

#[test]
fn test_list_users_counts_connected_records() {
    let registry = common::create_test_registry();
    for (i, name) in ["a", "b", "c", "d"].iter().enumerate() {
        registry.register(name).unwrap();
        registry.connect(name, localhost(), 5000 + i as u16).unwrap();
    }
    registry.disconnect("c").unwrap();

    let users = registry.list_users("a").unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users.len() as i64, registry.get_stats().users_connected);
    assert_eq!(users[2].username, "d");
    assert_eq!(users[2].port, 5003);
}

#[test]
fn test_list_content_is_independent_of_caller_catalog() {
    let registry = common::create_test_registry();
    for name in ["alice", "bob"] {
        registry.register(name).unwrap();
        registry.connect(name, localhost(), 5000).unwrap();
    }
    registry.publish("alice", "z.txt", "").unwrap();
    registry.publish("alice", "a.txt", "").unwrap();
    registry.publish("bob", "b.txt", "").unwrap();

    assert_eq!(registry.list_content("bob", "alice").unwrap(), vec!["z.txt", "a.txt"]);
    assert_eq!(
        registry.list_content("bob", "carol"),
        Err(RegistryError::RemoteUserNotFound("carol".to_string()))
    );
}

#[test]
fn test_concurrent_register_of_same_name() {
    let registry = common::create_test_registry();
    let name = Arc::new(common::random_username());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            let name = name.clone();
            thread::spawn(move || registry.register(&name).is_ok())
        })
        .collect();
    let winners = handles.into_iter().map(|handle| handle.join().unwrap()).filter(|ok| *ok).count();

    assert_eq!(winners, 1, "Exactly one registration should win");
    assert_eq!(registry.user_count(), 1);
}

#[test]
fn test_concurrent_publish_and_listing() {
    let registry = common::create_test_registry();
    registry.register("owner").unwrap();
    registry.connect("owner", localhost(), 5000).unwrap();
    registry.register("reader").unwrap();
    registry.connect("reader", localhost(), 6000).unwrap();

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let registry = registry.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    registry.publish("owner", &format!("file-{t}-{i}"), "").unwrap();
                }
            })
        })
        .collect();
    let reader = {
        let registry = registry.clone();
        thread::spawn(move || {
            let mut last = 0;
            for _ in 0..100 {
                let files = registry.list_content("reader", "owner").unwrap();
                assert!(files.len() >= last, "Listings should only grow");
                last = files.len();
            }
        })
    };

    for writer in writers {
        writer.join().unwrap();
    }
    reader.join().unwrap();
    assert_eq!(registry.list_content("reader", "owner").unwrap().len(), 200);
    assert_eq!(registry.get_stats().files, 200);
}

proptest! {
    #[test]
    fn catalog_lists_in_publish_order(
        names in proptest::collection::hash_set("[a-z]{1,8}\\.txt", 1..24),
        removals in proptest::collection::vec(any::<bool>(), 24)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut catalog = FileCatalog::new();
        for name in &names {
            prop_assert!(catalog.publish(name, "").is_ok());
        }

        let mut expected = Vec::new();
        for (name, remove) in names.iter().zip(removals.iter()) {
            if *remove {
                prop_assert!(catalog.delete(name).is_ok());
            } else {
                expected.push(name.clone());
            }
        }
        prop_assert_eq!(catalog.list(), expected);
    }

    #[test]
    fn duplicate_publish_never_grows_catalog(name in "[a-zA-Z0-9._-]{1,32}") {
        let mut catalog = FileCatalog::new();
        catalog.publish(&name, "first").unwrap();
        prop_assert!(catalog.publish(&name, "second").is_err());
        prop_assert_eq!(catalog.len(), 1);
    }
}
