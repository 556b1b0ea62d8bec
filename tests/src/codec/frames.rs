use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::thread;

use netree_common::network::MacAddress;
use netree_protocols::arp::{self, ArpMessage, ArpOperation, ArpSender};
use netree_protocols::ethernet::ETH_HDR_LEN;
use netree_protocols::icmp::{self, EchoKind, IcmpEchoMessage};
use pnet::packet::MutablePacket;
use pnet::packet::arp::{ArpHardwareTypes, ArpOperations, MutableArpPacket};
use pnet::packet::ethernet::{EtherTypes, MutableEthernetPacket};
use pnet::util::MacAddr;

const MIN_ETH_FRAME_NO_FCS: usize = 60;

fn local() -> ArpSender {
    ArpSender::new(
        MacAddress::new([0x02, 0x42, 0xac, 0x11, 0x00, 0x02]),
        Ipv4Addr::new(172, 17, 0, 2),
    )
}

/// What a neighbour puts on the wire when answering `request`.
fn answer(request: &ArpMessage, mac: MacAddress) -> Vec<u8> {
    let reply = ArpMessage::reply(mac, request.target_ip, request.sender_mac, request.sender_ip);
    let mut frame = arp::build(&reply, request.sender_mac, mac).unwrap().to_vec();
    frame.resize(MIN_ETH_FRAME_NO_FCS, 0);
    frame
}

#[test]
fn arp_sweep_collects_responders() {
    let targets: Vec<Ipv4Addr> = (1..=20).map(|i| Ipv4Addr::new(172, 17, 0, i)).collect();
    let requests = arp::build_batch(&targets, &local()).unwrap();

    let mut responders: HashSet<(Ipv4Addr, MacAddress)> = HashSet::new();
    for (i, frame) in requests.iter().enumerate().filter(|(i, _)| i % 4 == 0) {
        let request = arp::parse(&frame[ETH_HDR_LEN..]).unwrap();
        let neighbour = MacAddress::new([0x02, 0, 0, 0, 0, i as u8]);

        let (header, reply) = arp::parse_frame(&answer(&request, neighbour)).unwrap();
        assert_eq!(header.destination, local().source_mac);
        assert_eq!(reply.operation(), Some(ArpOperation::Reply));
        assert_eq!(reply.target_ip, local().sender_ip);
        responders.insert((reply.sender_ip, reply.sender_mac));
    }

    assert_eq!(responders.len(), 5);
    let first = (Ipv4Addr::new(172, 17, 0, 1), MacAddress::new([0x02, 0, 0, 0, 0, 0]));
    assert!(responders.contains(&first));
    // Removing an absent entry is an ordinary outcome.
    assert!(!responders.remove(&(Ipv4Addr::new(172, 17, 0, 2), MacAddress::ZERO)));
}

#[test]
fn parses_reply_crafted_by_pnet() {
    let mut buffer = [0u8; MIN_ETH_FRAME_NO_FCS];
    let remote = MacAddr::new(0x00, 0x1b, 0x21, 0x3a, 0x4b, 0x5c);
    {
        let mut eth = MutableEthernetPacket::new(&mut buffer).unwrap();
        eth.set_destination(local().source_mac.into());
        eth.set_source(remote);
        eth.set_ethertype(EtherTypes::Arp);

        let mut arp_pkt = MutableArpPacket::new(&mut eth.payload_mut()[..28]).unwrap();
        arp_pkt.set_hardware_type(ArpHardwareTypes::Ethernet);
        arp_pkt.set_protocol_type(EtherTypes::Ipv4);
        arp_pkt.set_hw_addr_len(6);
        arp_pkt.set_proto_addr_len(4);
        arp_pkt.set_operation(ArpOperations::Reply);
        arp_pkt.set_sender_hw_addr(remote);
        arp_pkt.set_sender_proto_addr(Ipv4Addr::new(172, 17, 0, 1));
        arp_pkt.set_target_hw_addr(local().sender_mac.into());
        arp_pkt.set_target_proto_addr(local().sender_ip);
    }

    let (header, reply) = arp::parse_frame(&buffer).unwrap();
    assert_eq!(header.source, MacAddress::from(remote));
    assert_eq!(reply.sender_mac.to_string(), "00:1b:21:3a:4b:5c");
    assert_eq!(reply.sender_ip, Ipv4Addr::new(172, 17, 0, 1));
    assert_eq!(reply.target_mac, local().sender_mac);
    assert_eq!(reply.sender_mac.vendor(), Some("Intel Corp".to_string()));
    assert_eq!(reply.target_mac.vendor(), None);
}

#[test]
fn echo_exchange_matches_request() {
    let identifier = 0x0abc;
    let packet = icmp::build(identifier, 42, || icmp::default_payload(56)).unwrap();
    let request = icmp::parse(&packet).unwrap();
    assert_eq!(request.kind, EchoKind::Request);

    // Echo servers swap the type and return everything else untouched.
    let echoed =
        IcmpEchoMessage::reply(request.identifier, request.sequence, request.payload.clone())
            .unwrap();
    let reply = icmp::parse(&icmp::build_message(&echoed).unwrap()).unwrap();

    assert!(reply.has_valid_checksum());
    assert!(reply.is_reply_to(identifier, 42));
    assert_eq!(reply.payload_timestamp(), request.payload_timestamp());
}

#[test]
fn builders_are_usable_from_many_threads() {
    let sender = local();
    let handles: Vec<_> = (0..8u8)
        .map(|n| {
            thread::spawn(move || {
                let targets: Vec<Ipv4Addr> = (0..32).map(|i| Ipv4Addr::new(10, n, 0, i)).collect();
                let frames = arp::build_batch(&targets, &sender).unwrap();
                let echo = icmp::build(n as u16, n as i16, || vec![n; 17]).unwrap();
                (targets, frames, echo)
            })
        })
        .collect();

    for handle in handles {
        let (targets, frames, echo) = handle.join().unwrap();
        for (frame, target) in frames.iter().zip(&targets) {
            assert_eq!(arp::parse(&frame[ETH_HDR_LEN..]).unwrap().target_ip, *target);
        }
        assert!(netree_protocols::checksum::verify(&echo));
    }
}
