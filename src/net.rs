//! Local network address lookups.
use std::net::{IpAddr, Ipv4Addr, UdpSocket};

use serde::Serialize;

use crate::error::GeneralError;

/// Any routable address works. UDP connect only selects a route and sends
/// nothing.
const OUTBOUND_ROUTE_TARGET: (Ipv4Addr, u16) = (Ipv4Addr::new(8, 8, 8, 8), 80);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInterface {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    pub ips: Vec<IpInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IpInfo {
    pub address: IpAddr,
    pub prefix: u8,
}

impl IpInfo {
    pub fn new(address: IpAddr, prefix: u8) -> Self {
        Self { address, prefix }
    }

    pub fn is_ipv6(&self) -> bool {
        self.address.is_ipv6()
    }

    /// Returns `IPv4` or `IPv6`.
    pub fn family(&self) -> &'static str {
        if self.is_ipv6() { "IPv6" } else { "IPv4" }
    }
}

/// Lists interfaces holding at least one non-loopback address.
///
/// Interfaces without addresses are left out. This covers interfaces that
/// are down as well as the loopback interface itself.
pub fn local_interfaces() -> Vec<NetworkInterface> {
    let networks = sysinfo::Networks::new_with_refreshed_list();

    let interfaces = networks.iter().map(|(name, data)| {
        let mac = data.mac_address();

        NetworkInterface {
            name: name.clone(),
            mac_address: (!mac.is_unspecified()).then(|| mac.to_string()),
            ips: data
                .ip_networks()
                .iter()
                .map(|network| IpInfo::new(network.addr, network.prefix))
                .collect(),
        }
    });

    keep_reachable(interfaces)
}

/// Drops loopback addresses and interfaces left without any address, then
/// sorts by name.
pub fn keep_reachable<I>(interfaces: I) -> Vec<NetworkInterface>
where
    I: IntoIterator<Item = NetworkInterface>,
{
    let mut interfaces = interfaces
        .into_iter()
        .filter_map(|mut interface| {
            interface.ips.retain(|ip| !ip.address.is_loopback());

            if interface.ips.is_empty() {
                tracing::trace!(name = interface.name.as_str(), "skipped interface");
                None
            } else {
                Some(interface)
            }
        })
        .collect::<Vec<_>>();

    interfaces.sort_by(|a, b| a.name.cmp(&b.name));
    interfaces
}

/// Returns the address used for outbound traffic.
///
/// Falls back to the first IPv4 address of [`local_interfaces`] when no
/// route is available.
pub fn primary_local_ip() -> Result<IpAddr, GeneralError> {
    match outbound_address() {
        Ok(address) => Ok(address),
        Err(error) => {
            tracing::debug!(?error, "no outbound route, using interface list");
            first_ipv4(&local_interfaces()).ok_or(GeneralError::AddressNotFound)
        }
    }
}

fn outbound_address() -> std::io::Result<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    socket.connect(OUTBOUND_ROUTE_TARGET)?;

    Ok(socket.local_addr()?.ip())
}

pub fn first_ipv4(interfaces: &[NetworkInterface]) -> Option<IpAddr> {
    interfaces
        .iter()
        .flat_map(|interface| &interface.ips)
        .find(|ip| !ip.is_ipv6())
        .map(|ip| ip.address)
}

/// Formats interfaces as an indented listing:
///
/// ```text
/// eth0:
///   MAC: 02:42:ac:11:00:02
///   IPv4: 172.17.0.2
/// ```
pub fn format_interfaces(interfaces: &[NetworkInterface]) -> String {
    let mut lines = Vec::new();

    for interface in interfaces {
        lines.push(format!("{}:", interface.name));

        if let Some(mac) = &interface.mac_address {
            lines.push(format!("  MAC: {}", mac));
        }

        for ip in &interface.ips {
            lines.push(format!("  {}: {}", ip.family(), ip.address));
        }
    }

    lines.join("\n")
}
