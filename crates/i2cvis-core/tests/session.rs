use i2cvis_core::{Address, Error, MockBus, Request, Session, Transaction};

fn addr(raw: u8) -> Address {
    Address::new(raw).unwrap()
}

#[test]
fn read_button_with_hex_address() {
    let mut bus = MockBus::new();
    bus.queue_read(0x5c);
    let mut session = Session::new(bus);

    session.handle(Request::Read { address: "0x1A" }).unwrap();

    assert_eq!(session.bus().transactions(), &[Transaction::Read { address: addr(26) }]);
    let line = session.log().to_text();
    assert!(line.ends_with(": Reading address 0x1a => 92\n"), "{line}");
}

#[test]
fn write_button_with_binary_value() {
    let mut session = Session::new(MockBus::new());

    session.handle(Request::Write { address: "10", value: "0b1111" }).unwrap();

    assert_eq!(
        session.bus().transactions(),
        &[Transaction::Write { address: addr(10), value: 15 }]
    );
    assert_eq!(session.log().entries()[0].message, "Writing address 0xa => 15");
}

#[test]
fn unparsable_address_shows_error_and_leaves_log_alone() {
    let mut session = Session::new(MockBus::new());

    let err = session.handle(Request::Read { address: "abc" }).unwrap_err();

    assert!(matches!(err, Error::Format(_)));
    assert!(err.to_string().contains("address"));
    assert!(session.bus().transactions().is_empty());
    assert!(session.log().is_empty());
}

#[test]
fn read_after_write_is_a_fresh_transfer() {
    let mut session = Session::new(MockBus::new());
    session.bus_mut().queue_read(3);

    session.write("0x40", "200").unwrap();
    let entry = session.read("0x40").unwrap();

    assert_eq!(entry.message, "Reading address 0x40 => 3");
    assert_eq!(
        session.bus().transactions(),
        &[
            Transaction::Write { address: addr(0x40), value: 200 },
            Transaction::Read { address: addr(0x40) },
        ]
    );
}

#[test]
fn log_counts_only_successful_requests_in_order() {
    let mut session = Session::new(MockBus::new());
    session.bus_mut().queue_read(1).queue_read(2);

    let requests = [
        Request::Write { address: "1", value: "10" },
        Request::Read { address: "not a number" },
        Request::Read { address: "2" },
        Request::Write { address: "0x80", value: "1" },
        Request::Write { address: "3", value: "0x1ff" },
        Request::Read { address: "0b100" },
        Request::Read { address: "5" },
        Request::Write { address: "0x7f", value: "0xff" },
    ];
    let ok = requests.iter().filter(|r| session.handle(**r).is_ok()).count();

    let messages: Vec<_> = session.log().entries().iter().map(|e| e.message.clone()).collect();
    assert_eq!(ok, 4);
    assert_eq!(
        messages,
        [
            "Writing address 0x1 => 10",
            "Reading address 0x2 => 1",
            "Reading address 0x4 => 2",
            "Writing address 0x7f => 255",
        ]
    );
    assert!(matches!(
        session.bus().transactions().last(),
        Some(Transaction::Write { value: 255, .. })
    ));
    // the read of 0x5 reached the bus but found no queued response
    assert_eq!(session.bus().transactions().len(), 5);
}

#[test]
fn driver_error_keeps_session_usable() {
    let mut session = Session::new(MockBus::new());
    session.bus_mut().fail_next("No such device or address");

    let err = session.read("0x33").unwrap_err();
    assert!(matches!(err, Error::Bus(_)));
    assert!(err.to_string().contains("No such device or address"));
    assert!(session.log().is_empty());

    session.write("0x33", "0").unwrap();
    assert_eq!(session.log().len(), 1);
}
