//! Register-level driver for RSL orientation sensors.
//!
//! A [`Driver`] owns one [`Transport`](rslcomm_transport::Transport) and
//! turns it into register reads and writes plus a stream of decoded
//! broadcast telemetry. Frames that arrive while a transaction waits for its
//! reply are not lost: they are decoded and queued for [`Driver::broadcasts`].

pub mod broadcast;
pub mod config;
pub mod demux;
pub mod driver;
pub mod error;
pub mod packets;

pub use broadcast::Broadcasts;
pub use config::DriverConfig;
pub use demux::BroadcastTable;
pub use driver::{Driver, LinkStats};
pub use error::{DemuxError, DriverError, Result};
pub use packets::{BroadcastPacket, PacketKind};

#[cfg(test)]
mod mock;
