use std::collections::HashMap;

use rslcomm_frame::Frame;
use rslcomm_registers::{Catalog, RegisterError, ShearwaterCatalog};
use tracing::trace;

use crate::error::DemuxError;
use crate::packets::{BroadcastPacket, PacketKind};

/// Maps `(start address, frame length)` to a broadcast layout.
///
/// Address alone is ambiguous: the all-raw and all-processed packets start
/// at the same register as the first single-sensor packet.
#[derive(Debug, Clone)]
pub struct BroadcastTable {
    kinds: HashMap<(u8, usize), PacketKind>,
}

impl BroadcastTable {
    /// Build the table by resolving each layout's start register.
    pub fn from_catalog<C: Catalog + ?Sized>(catalog: &C) -> Result<Self, RegisterError> {
        let mut kinds = HashMap::with_capacity(PacketKind::ALL.len());
        for kind in PacketKind::ALL {
            let start = catalog.lookup(kind.start_register())?;
            kinds.insert((start.address, kind.frame_len()), kind);
        }
        Ok(Self { kinds })
    }

    /// The table for the built-in Shearwater register map.
    pub fn shearwater() -> Self {
        let catalog = ShearwaterCatalog::global();
        let kinds = PacketKind::ALL
            .into_iter()
            .filter_map(|kind| {
                catalog
                    .find_by_name(kind.start_register())
                    .map(|start| ((start.address, kind.frame_len()), kind))
            })
            .collect();
        Self { kinds }
    }

    /// Which layout a frame carries.
    pub fn classify(&self, frame: &Frame) -> Result<PacketKind, DemuxError> {
        let length = frame.wire_size();
        let unknown = DemuxError::UnknownPacketShape {
            address: frame.address,
            length,
            hidden: frame.is_hidden(),
        };
        if frame.is_hidden() || frame.packet_type.error {
            return Err(unknown);
        }
        self.kinds
            .get(&(frame.address, length))
            .copied()
            .ok_or(unknown)
    }

    /// Decode a frame into its typed packet.
    pub fn decode(&self, frame: &Frame) -> Result<BroadcastPacket, DemuxError> {
        let kind = self.classify(frame)?;
        trace!(%kind, address = frame.address, "decoding broadcast");
        Ok(kind.decode(&frame.payload))
    }

    /// Frame address and length of a layout.
    pub fn shape_of(&self, kind: PacketKind) -> Option<(u8, usize)> {
        self.kinds
            .iter()
            .find(|(_, k)| **k == kind)
            .map(|(shape, _)| *shape)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for BroadcastTable {
    fn default() -> Self {
        Self::shearwater()
    }
}
