use std::net::Ipv4Addr;

use netree_common::error::AddressError;
use netree_common::network::{MacAddress, ip_from_bytes, ip_to_bytes, mac_to_bytes, mac_to_text};
use netree_protocols::arp::{self, ARP_FRAME_LEN, ARP_LEN, ArpMessage, ArpSender};
use netree_protocols::checksum::checksum;
use netree_protocols::ethernet::{self, ETH_HDR_LEN, EthernetHeader, ether_types};
use netree_protocols::icmp::{self, IcmpEchoMessage};
use netree_protocols::{Packet, PacketError, WireFormat};

fn host_mac() -> MacAddress {
    "3c:22:fb:00:10:aa".parse().unwrap()
}

#[test]
fn ethernet_round_trip() {
    let header = EthernetHeader::new(MacAddress::BROADCAST, host_mac(), ether_types::ARP);
    let bytes =
        ethernet::make_header(header.destination, header.source, header.ethertype).unwrap();
    assert_eq!(ethernet::parse(&bytes).unwrap(), header);
}

#[test]
fn arp_round_trip_after_stripping_ethernet() {
    let message = ArpMessage::request(
        host_mac(),
        Ipv4Addr::new(192, 168, 0, 10),
        Ipv4Addr::new(192, 168, 0, 1),
    );
    let frame = arp::build(&message, MacAddress::BROADCAST, host_mac()).unwrap();
    assert_eq!(frame.len(), ARP_FRAME_LEN);

    let header = ethernet::parse(&frame[..ETH_HDR_LEN]).unwrap();
    assert_eq!(header.ethertype, ether_types::ARP);
    assert_eq!(arp::parse(&frame[ETH_HDR_LEN..]).unwrap(), message);
}

#[test]
fn icmp_round_trip() {
    let message = IcmpEchoMessage::request(0x3039, 17, icmp::default_payload(64)).unwrap();
    let parsed = IcmpEchoMessage::from_bytes(&message.to_bytes().unwrap()).unwrap();
    assert_eq!(parsed, message);
}

#[test]
fn built_echo_requests_verify_to_zero() {
    for (identifier, sequence) in [(0u16, 0i16), (1, 1), (0xffff, i16::MAX), (0x8000, i16::MIN)] {
        let packet = icmp::build(identifier, sequence, || icmp::default_payload(192)).unwrap();
        assert_eq!(checksum(&packet), 0);
    }
}

#[test]
fn fixed_size_parsers_enforce_length() {
    let buf = [0u8; 100];
    for len in (0..100).filter(|&n| n != ETH_HDR_LEN) {
        assert!(matches!(
            ethernet::parse(&buf[..len]),
            Err(PacketError::LengthMismatch { expected: 14, .. })
        ));
    }
    for len in (0..100).filter(|&n| n != ARP_LEN) {
        assert!(matches!(
            arp::parse(&buf[..len]),
            Err(PacketError::LengthMismatch { expected: 28, .. })
        ));
    }
}

#[test]
fn mac_text_is_normalized() {
    let bytes = mac_to_bytes("AA:BB:CC:DD:EE:FF").unwrap();
    assert_eq!(mac_to_text(&bytes).unwrap(), "aa:bb:cc:dd:ee:ff");
}

#[test]
fn address_errors_are_typed() {
    assert!(matches!(mac_to_bytes("aa:bb"), Err(AddressError::InvalidFormat { .. })));
    assert!(matches!(mac_to_text(&[0; 4]), Err(AddressError::InvalidLength { .. })));
    assert!(matches!(ip_to_bytes("300.1.1.1"), Err(AddressError::InvalidFormat { .. })));
    assert_eq!(ip_from_bytes(&ip_to_bytes("8.8.4.4").unwrap()).unwrap(), "8.8.4.4");
}

#[test]
fn batch_keeps_target_order() {
    let ips = [
        Ipv4Addr::new(10, 0, 0, 3),
        Ipv4Addr::new(10, 0, 0, 1),
        Ipv4Addr::new(10, 0, 0, 2),
    ];
    let sender = ArpSender::new(host_mac(), Ipv4Addr::new(10, 0, 0, 100));
    let frames = arp::build_batch(&ips, &sender).unwrap();

    let embedded: Vec<Ipv4Addr> = frames
        .iter()
        .map(|frame| Ipv4Addr::new(frame[38], frame[39], frame[40], frame[41]))
        .collect();
    assert_eq!(embedded, ips);
}

#[test]
fn checksum_reference_datagram() {
    let datagram = [
        0x45, 0x00, 0x00, 0x3c, 0x1c, 0x46, 0x40, 0x00, 0x40, 0x06, 0x00, 0x00, 0xac, 0x10, 0x0a,
        0x63, 0xac, 0x10, 0x0a, 0x0c,
    ];
    assert_eq!(checksum(&datagram), 0xb1e6);
    assert_eq!(checksum(&[0x00, 0x01, 0xf2, 0x03, 0xf4, 0xf5, 0xf6, 0xf7]), 0x220d);
}

#[test]
fn packet_variants_share_one_interface() {
    let packets: Vec<Packet> = vec![
        EthernetHeader::new(host_mac(), MacAddress::BROADCAST, ether_types::IPV4).into(),
        ArpMessage::reply(
            host_mac(),
            Ipv4Addr::new(10, 0, 0, 1),
            MacAddress::BROADCAST,
            Ipv4Addr::new(10, 0, 0, 2),
        )
        .into(),
        IcmpEchoMessage::reply(5, 6, vec![7; 9]).unwrap().into(),
    ];
    for packet in packets {
        assert_eq!(Packet::parse(packet.kind(), &packet.to_bytes().unwrap()).unwrap(), packet);
    }
}
