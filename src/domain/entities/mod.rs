//! Domain entities

mod entity;
mod network;

pub(crate) use entity::lenient_timestamp;
pub use entity::{Entity, EntityKind, Source};
pub use network::{
    CidrNetwork, HostSubnetNetwork, IpNetwork, NetworkRecord, ParseError, RawNetwork,
};
