mod common;

use std::io::Write;
use std::net::TcpStream;
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_end_to_end_scenario() {
    let server = common::start_test_server();
    let address = server.address;

    assert_eq!(common::send_request(address, &["REGISTER", "alice"]).0, 0);
    assert_eq!(common::send_request(address, &["CONNECT", "alice", "5000"]).0, 0);
    assert_eq!(common::send_request(address, &["PUBLISH", "alice", "a.txt", "x"]).0, 0);
    assert_eq!(common::send_request(address, &["REGISTER", "bob"]).0, 0);
    assert_eq!(common::send_request(address, &["CONNECT", "bob", "6000"]).0, 0);

    let (status, tokens) = common::send_request(address, &["LIST CONTENT", "bob", "alice"]);
    assert_eq!(status, 0);
    assert_eq!(tokens, vec!["1", "a.txt"]);

    assert_eq!(common::send_request(address, &["UNREGISTER", "alice"]).0, 0);
    let (status, tokens) = common::send_request(address, &["LIST CONTENT", "bob", "alice"]);
    assert_eq!(status, 3, "Remote user should be gone");
    assert!(tokens.is_empty());
}

#[test]
fn test_list_users_reports_loopback_addresses() {
    let server = common::start_test_server();
    let address = server.address;

    for (name, port) in [("alice", "5000"), ("bob", "6000"), ("carol", "7000")] {
        assert_eq!(common::send_request(address, &["REGISTER", name]).0, 0);
        assert_eq!(common::send_request(address, &["CONNECT", name, port]).0, 0);
    }
    assert_eq!(common::send_request(address, &["DISCONNECT", "bob"]).0, 0);

    let (status, tokens) = common::send_request(address, &["LIST USERS", "carol"]);
    assert_eq!(status, 0);
    assert_eq!(tokens, vec!["2", "alice", "127.0.0.1", "5000", "carol", "127.0.0.1", "7000"]);
}

#[test]
fn test_precondition_failures() {
    let server = common::start_test_server();
    let address = server.address;
    let ghost = common::random_username();

    assert_eq!(common::send_request(address, &["CONNECT", &ghost, "5000"]).0, 1);
    assert_eq!(common::send_request(address, &["DISCONNECT", &ghost]).0, 1);
    assert_eq!(common::send_request(address, &["PUBLISH", &ghost, "a.txt", "x"]).0, 1);
    assert_eq!(common::send_request(address, &["DELETE", &ghost, "a.txt"]).0, 1);
    assert_eq!(common::send_request(address, &["LIST USERS", &ghost]).0, 1);
    assert_eq!(common::send_request(address, &["LIST CONTENT", &ghost, &ghost]).0, 1);
    assert_eq!(common::send_request(address, &["UNREGISTER", &ghost]).0, 1);
    assert!(!server.registry.contains(&ghost));

    assert_eq!(common::send_request(address, &["REGISTER", "dave"]).0, 0);
    assert_eq!(common::send_request(address, &["DISCONNECT", "dave"]).0, 2);
    assert_eq!(common::send_request(address, &["LIST USERS", "dave"]).0, 2);
    assert_eq!(common::send_request(address, &["DELETE", "dave", "a.txt"]).0, 2);
    assert_eq!(common::send_request(address, &["LIST CONTENT", "dave", "dave"]).0, 2);
    assert_eq!(common::send_request(address, &["CONNECT", "dave", "5000"]).0, 0);
    assert_eq!(common::send_request(address, &["CONNECT", "dave", "5001"]).0, 2);
    assert_eq!(server.registry.lookup("dave").unwrap().port, 5000);

    assert_eq!(common::send_request(address, &["PUBLISH", "dave", "a.txt", "first"]).0, 0);
    assert_eq!(common::send_request(address, &["PUBLISH", "dave", "a.txt", "second"]).0, 3);
    assert_eq!(common::send_request(address, &["DELETE", "dave", "b.txt"]).0, 3);
    assert_eq!(common::send_request(address, &["DELETE", "dave", "a.txt"]).0, 0);

    let (status, tokens) = common::send_request(address, &["LIST CONTENT", "dave", "dave"]);
    assert_eq!(status, 0);
    assert_eq!(tokens, vec!["0"]);
}

#[test]
fn test_malformed_requests_get_no_response() {
    let server = common::start_test_server();
    let address = server.address;

    assert!(common::send_raw(address, &common::encode_tokens(&["GET FILE", "alice", "a.txt"])).is_empty());
    assert!(common::send_raw(address, b"REGISTER\0ali").is_empty());
    assert!(common::send_raw(address, &[0xff, 0xfe, 0x00, b'a', 0x00]).is_empty());

    let mut oversized = vec![b'a'; 2048];
    oversized.push(0);
    assert!(common::send_raw(address, &oversized).is_empty());

    assert_eq!(server.registry.user_count(), 0);
    let stats = server.registry.get_stats();
    assert_eq!(stats.unknown_operations, 1);
    assert_eq!(stats.framing_errors, 3);
}

#[test]
fn test_concurrent_clients() {
    let server = common::start_test_server();
    let address = server.address;

    let handles: Vec<_> = (0..16)
        .map(|i| {
            thread::spawn(move || {
                let name = format!("user{i}");
                assert_eq!(common::send_request(address, &["REGISTER", &name]).0, 0);
                assert_eq!(common::send_request(address, &["CONNECT", &name, &(5000 + i).to_string()]).0, 0);
                assert_eq!(common::send_request(address, &["PUBLISH", &name, "shared.txt", "x"]).0, 0);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let (status, tokens) = common::send_request(address, &["LIST USERS", "user0"]);
    assert_eq!(status, 0);
    assert_eq!(tokens[0], "16");
    assert_eq!(tokens.len(), 1 + 16 * 3);
    assert_eq!(server.registry.get_stats().files, 16);
}

#[test]
fn test_shutdown_without_extra_connection() {
    let mut server = common::start_test_server();
    assert_eq!(common::send_request(server.address, &["REGISTER", "alice"]).0, 0);

    let started = Instant::now();
    assert!(server.stop());
    assert!(started.elapsed() < Duration::from_secs(2), "Acceptor should notice shutdown promptly");
}

#[test]
fn test_shutdown_waits_for_running_session() {
    let mut server = common::start_test_server();

    // Half a request keeps one worker busy until the client finishes it.
    let mut client = TcpStream::connect(server.address).unwrap();
    client.write_all(b"REGISTER\0").unwrap();
    thread::sleep(Duration::from_millis(100));

    let finisher = thread::spawn(move || {
        thread::sleep(Duration::from_millis(200));
        client.write_all(b"late\0").unwrap();
        client
    });

    assert!(server.stop(), "Session should finish inside the grace period");
    drop(finisher.join().unwrap());
    assert!(server.registry.contains("late"));
}
