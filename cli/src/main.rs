mod commands;
mod terminal;

use commands::{CommandLine, Commands, arp, decode, echo};
use netree_common::config::Config;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init(commands.verbose, commands.quiet);

    let cfg = Config::default();

    match commands.command {
        Commands::Arp {
            source_mac,
            sender_mac,
            sender_ip,
            targets,
        } => arp::arp(source_mac, sender_mac, sender_ip, targets),
        Commands::Echo {
            identifier,
            sequence,
            payload_len,
        } => echo::echo(identifier, sequence, payload_len, &cfg),
        Commands::Decode { protocol, hex } => decode::decode(protocol, &hex),
    }
}
