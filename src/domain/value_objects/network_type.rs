//! Network type value object - the discriminator of a network record

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of network attachment a record describes
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Single IP attachment (ip / subnet mask / MAC)
    Ip,
    /// Set of CIDR blocks
    Cidr,
    /// Host subnet with egress CIDRs and egress IPs
    #[value(name = "hostsubnet")]
    HostSubnet,
}

impl NetworkType {
    /// Every known network type, in discriminator order
    pub const ALL: [NetworkType; 3] = [NetworkType::Ip, NetworkType::Cidr, NetworkType::HostSubnet];

    /// Wire name used in the `type` field of records and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Ip => "ip",
            NetworkType::Cidr => "cidr",
            NetworkType::HostSubnet => "hostsubnet",
        }
    }

    /// Look up a type by its wire name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| format!("unknown network type '{}'", s.trim()))
    }
}
