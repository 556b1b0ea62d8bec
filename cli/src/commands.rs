pub mod arp;
pub mod decode;
pub mod echo;

use std::net::Ipv4Addr;

use clap::{ArgAction, Parser, Subcommand};
use netree_common::network::MacAddress;
use netree_protocols::ProtocolKind;

#[derive(Parser)]
#[command(name = "netree")]
#[command(about = "Craft and decode raw ARP and ICMP echo packets.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build broadcast ARP requests for one or more targets
    #[command(alias = "a")]
    Arp {
        /// Ethernet source address of the frames
        #[arg(long)]
        source_mac: MacAddress,
        /// ARP sender hardware address (defaults to the source address)
        #[arg(long)]
        sender_mac: Option<MacAddress>,
        /// ARP sender protocol address
        #[arg(long)]
        sender_ip: Ipv4Addr,
        #[arg(required = true)]
        targets: Vec<Ipv4Addr>,
    },
    /// Build an ICMP echo request
    #[command(alias = "e")]
    Echo {
        /// Defaults to the process id
        #[arg(long)]
        identifier: Option<u16>,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        sequence: i16,
        /// Total payload bytes, timestamp included
        #[arg(long)]
        payload_len: Option<usize>,
    },
    /// Parse a hex dump as the given protocol
    #[command(alias = "d")]
    Decode { protocol: ProtocolKind, hex: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
