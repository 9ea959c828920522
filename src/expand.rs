//! Token expansion: one address or CIDR block in, member addresses out.

use std::net::{Ipv4Addr, Ipv6Addr};

use ipnetwork::IpNetwork;

/// Expand a single token into the addresses it denotes.
///
/// A token that parses as an IPv4/IPv6 network (prefix length optional,
/// host bits tolerated) yields every address of the masked network in
/// ascending order, rendered canonically. Anything else is passed
/// through verbatim as a single entry.
pub fn expand(token: &str) -> Vec<String> {
    match token.parse::<IpNetwork>() {
        Ok(IpNetwork::V4(net)) => {
            let lo = u32::from(net.network());
            let hi = lo | !u32::from(net.mask());
            (lo..=hi).map(|ip| Ipv4Addr::from(ip).to_string()).collect()
        }
        Ok(IpNetwork::V6(net)) => {
            let lo = u128::from(net.network());
            let hi = lo | !u128::from(net.mask());
            (lo..=hi).map(|ip| Ipv6Addr::from(ip).to_string()).collect()
        }
        Err(_) => vec![token.to_string()],
    }
}
