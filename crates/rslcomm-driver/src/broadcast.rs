use std::time::Instant;

use rslcomm_transport::Transport;
use tracing::debug;

use crate::driver::Driver;
use crate::error::{DriverError, Result};
use crate::packets::{BroadcastPacket, PacketKind};

/// Blocking iterator over decoded broadcast packets.
///
/// Packets queued during earlier transactions come first. After
/// `broadcast_idle_timeout` of silence one `Err(Timeout)` is yielded and
/// iteration may continue. A transport error is yielded once, after every
/// packet that was already buffered, and ends the iteration. Cap the stream
/// with [`Iterator::take`].
pub struct Broadcasts<'a, T> {
    driver: &'a mut Driver<T>,
    kind: Option<PacketKind>,
    last_packet: Instant,
    ended: Option<DriverError>,
    finished: bool,
}

impl<'a, T: Transport> Broadcasts<'a, T> {
    pub(crate) fn new(driver: &'a mut Driver<T>, kind: Option<PacketKind>) -> Self {
        Self {
            driver,
            kind,
            last_packet: Instant::now(),
            ended: None,
            finished: false,
        }
    }

    /// The packet kind this iterator is restricted to, if any.
    pub fn kind(&self) -> Option<PacketKind> {
        self.kind
    }

    fn idle_timeout(&self) -> Option<DriverError> {
        let timeout = self.driver.config().broadcast_idle_timeout?;
        if self.last_packet.elapsed() < timeout {
            return None;
        }
        let address = self
            .kind
            .and_then(|kind| self.driver.table().shape_of(kind))
            .map(|(address, _)| address);
        Some(DriverError::Timeout {
            address,
            hidden: false,
            timeout,
        })
    }
}

impl<T: Transport> Iterator for Broadcasts<'_, T> {
    type Item = Result<BroadcastPacket>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            if let Some(packet) = self.driver.pop_broadcast(self.kind) {
                self.last_packet = Instant::now();
                return Some(Ok(packet));
            }
            if let Some(err) = self.ended.take() {
                self.finished = true;
                return Some(Err(err));
            }

            match self.driver.pump() {
                Ok(true) => continue,
                Ok(false) => {
                    if self.driver.queued_broadcasts() > 0 {
                        continue;
                    }
                    if let Some(err) = self.idle_timeout() {
                        debug!(%err, "broadcast stream idle");
                        self.last_packet = Instant::now();
                        return Some(Err(err));
                    }
                    std::thread::sleep(self.driver.config().poll_interval);
                }
                Err(err) => {
                    debug!(%err, queued = self.driver.queued_broadcasts(), "broadcast stream ended");
                    self.ended = Some(err);
                }
            }
        }
    }
}
