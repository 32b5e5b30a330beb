//! Wire codec behavior: field-exact round-trips for every supported record
//! type, compression-pointer decoding, and its use by a wire-level mock
//! resolver feeding the dialer.

mod support;

use std::net::{Ipv4Addr, Ipv6Addr};

use dialrace_client::Dialer;
use dialrace_client::dns::wire::{Message, Question, RData, Record, RecordType, WireError, flags};

use support::WireResolver;

fn full_message() -> Message {
    let mut message = Message::query(0xBEEF, "host.example.com", RecordType::ANY).response();
    message.answers = vec![
        Record::new(
            "host.example.com",
            RecordType::A,
            60,
            RData::A(Ipv4Addr::new(192, 0, 2, 10)),
        ),
        Record::new(
            "host.example.com",
            RecordType::AAAA,
            60,
            RData::AAAA(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0x10)),
        ),
        Record::new(
            "host.example.com",
            RecordType::CNAME,
            120,
            RData::CNAME("alias.example.com".to_string()),
        ),
        Record::new(
            "example.com",
            RecordType::MX,
            300,
            RData::MX {
                preference: 10,
                exchange: "mail.example.com".to_string(),
            },
        ),
        Record::new(
            "example.com",
            RecordType::TXT,
            300,
            RData::TXT(vec!["v=spf1 -all".to_string(), "second entry".to_string()]),
        ),
        Record::new(
            "10.2.0.192.in-addr.arpa",
            RecordType::PTR,
            600,
            RData::PTR("host.example.com".to_string()),
        ),
        Record::new(
            "example.com",
            RecordType::CAA,
            3600,
            RData::CAA {
                flags: 0,
                tag: "issue".to_string(),
                value: b"ca.example.net".to_vec(),
            },
        ),
    ];
    message.authorities = vec![
        Record::new(
            "example.com",
            RecordType::NS,
            86400,
            RData::NS("ns1.example.com".to_string()),
        ),
        Record::new(
            "example.com",
            RecordType::SOA,
            86400,
            RData::SOA {
                mname: "ns1.example.com".to_string(),
                rname: "hostmaster.example.com".to_string(),
                serial: 2_026_080_601,
                refresh: 7200,
                retry: 900,
                expire: 1_209_600,
                minimum: 300,
            },
        ),
    ];
    message
}

#[test]
fn every_record_type_roundtrips_field_exact() {
    let message = full_message();
    let wire = message.encode().expect("encode");
    let decoded = Message::decode(&wire).expect("decode");
    assert_eq!(decoded, message);
}

#[test]
fn header_fields_survive_the_roundtrip() {
    let message = full_message();
    let wire = message.encode().expect("encode");

    assert_eq!(wire[0], 0xBE);
    assert_eq!(wire[1], 0xEF);

    let decoded = Message::decode(&wire).expect("decode");
    assert_eq!(decoded.id, 0xBEEF);
    assert!(decoded.is_response());
    assert_eq!(decoded.rcode(), 0);
    assert_eq!(decoded.flags & flags::RECURSION_DESIRED, flags::RECURSION_DESIRED);
    assert_eq!(decoded.questions.len(), 1);
    assert_eq!(decoded.answers.len(), 7);
    assert_eq!(decoded.authorities.len(), 2);
    assert_eq!(decoded.additionals.len(), 0);
}

#[test]
fn decodes_pointer_compressed_answers() {
    // Hand-built response using a compression pointer for the answer name:
    // question "host.example" at offset 12, answer name is a pointer to it.
    let mut wire = Vec::new();
    wire.extend_from_slice(&0x0101u16.to_be_bytes()); // id
    wire.extend_from_slice(&flags::RESPONSE.to_be_bytes());
    wire.extend_from_slice(&1u16.to_be_bytes()); // qdcount
    wire.extend_from_slice(&1u16.to_be_bytes()); // ancount
    wire.extend_from_slice(&0u16.to_be_bytes());
    wire.extend_from_slice(&0u16.to_be_bytes());

    wire.push(4);
    wire.extend_from_slice(b"host");
    wire.push(7);
    wire.extend_from_slice(b"example");
    wire.push(0);
    wire.extend_from_slice(&1u16.to_be_bytes()); // qtype A
    wire.extend_from_slice(&1u16.to_be_bytes()); // qclass IN

    wire.extend_from_slice(&[0xC0, 12]); // name: pointer to the question
    wire.extend_from_slice(&1u16.to_be_bytes()); // type A
    wire.extend_from_slice(&1u16.to_be_bytes()); // class IN
    wire.extend_from_slice(&3600u32.to_be_bytes());
    wire.extend_from_slice(&4u16.to_be_bytes()); // rdlength
    wire.extend_from_slice(&[127, 0, 0, 1]);

    let decoded = Message::decode(&wire).expect("decode");
    assert_eq!(decoded.answers[0].name, "host.example");
    assert_eq!(decoded.answers[0].rdata, RData::A(Ipv4Addr::LOCALHOST));
}

#[test]
fn unknown_record_types_pass_through_raw() {
    let message = Message::query(1, "example.com", RecordType::A)
        .response()
        .answer(Record::new(
            "example.com",
            RecordType::Other(99),
            60,
            RData::Raw(vec![1, 2, 3, 4]),
        ));
    let wire = message.encode().expect("encode");
    let decoded = Message::decode(&wire).expect("decode");
    assert_eq!(decoded.answers[0].rtype, RecordType::Other(99));
    assert_eq!(decoded.answers[0].rdata, RData::Raw(vec![1, 2, 3, 4]));
}

#[test]
fn truncated_record_is_rejected() {
    let message = Message::query(1, "example.com", RecordType::A)
        .response()
        .answer(Record::new(
            "example.com",
            RecordType::A,
            60,
            RData::A(Ipv4Addr::LOCALHOST),
        ));
    let wire = message.encode().expect("encode");
    let cut = &wire[..wire.len() - 2];
    assert!(matches!(
        Message::decode(cut),
        Err(WireError::Truncated(_))
    ));
}

#[test]
fn bad_rdata_length_is_rejected() {
    let message = Message::query(1, "example.com", RecordType::A)
        .response()
        .answer(Record::new(
            "example.com",
            RecordType::A,
            60,
            // Five bytes of raw rdata on a type-A record: the declared
            // length disagrees with what an A record allows.
            RData::Raw(vec![127, 0, 0, 1, 9]),
        ));
    let wire = message.encode().expect("encode");
    assert!(matches!(
        Message::decode(&wire),
        Err(WireError::BadRecordLength(_))
    ));
}

#[test]
fn question_constructor_defaults_to_class_in() {
    let question = Question::new("example.com", RecordType::AAAA);
    assert_eq!(question.qclass, 1);
}

#[tokio::test]
async fn wire_level_mock_resolver_feeds_the_race() {
    let (_listener, port) = support::v4_listener_with_free_v6();

    let response = Message::query(0x42, "service.test", RecordType::A)
        .response()
        .answer(Record::new(
            "service.test",
            RecordType::AAAA,
            60,
            RData::AAAA(Ipv6Addr::LOCALHOST),
        ))
        .answer(Record::new(
            "service.test",
            RecordType::A,
            60,
            RData::A(Ipv4Addr::LOCALHOST),
        ));

    let dialer = Dialer::new().with_resolver(WireResolver::from_message(&response));
    let established = dialer.dial("service.test", port).await.expect("dial");

    assert_eq!(established.remote.ip(), Ipv4Addr::LOCALHOST);
    let attempted = established.attempted.expect("raced");
    assert_eq!(attempted.len(), 2);
    assert!(attempted[0].starts_with("::1:"));
}
