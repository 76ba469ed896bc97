use async_channel::{Receiver, Sender, bounded};
use tracing::trace;

use crate::{Result, ShipmentRecord, error::error::SubscriptionClosedSnafu};

/// Full point-in-time copy of all remote shipment records, most recently updated first.
pub type Snapshot = Vec<ShipmentRecord>;

/// Creates a snapshot channel holding at most `capacity` undelivered snapshots.
///
/// When the buffer is full the oldest snapshot is dropped, a slow consumer only ever
/// observes the most recent state.
pub fn snapshot_channel(capacity: usize) -> (SnapshotSender, Subscription) {
    let (tx, rx) = bounded(capacity.max(1));
    (SnapshotSender { tx }, Subscription { rx })
}

#[derive(Debug, Clone)]
pub struct SnapshotSender {
    tx: Sender<Snapshot>,
}

impl SnapshotSender {
    /// Fails once the receiving [Subscription] has been dropped or unsubscribed.
    pub fn publish(&self, snapshot: Snapshot) -> Result<()> {
        match self.tx.force_send(snapshot) {
            Ok(Some(displaced)) => {
                trace!("displaced undelivered snapshot of {} records", displaced.len());
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(_) => SubscriptionClosedSnafu.fail(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving end of a snapshot subscription, dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    rx: Receiver<Snapshot>,
}

impl Subscription {
    /// Waits for the next snapshot and coalesces any further queued ones, returning only the
    /// most recent.
    pub async fn next(&self) -> Result<Snapshot> {
        let first = self
            .rx
            .recv()
            .await
            .map_err(|_| SubscriptionClosedSnafu.build())?;
        Ok(self.drain(first))
    }

    /// The most recent queued snapshot, if any, without waiting.
    pub fn try_latest(&self) -> Option<Snapshot> {
        let first = self.rx.try_recv().ok()?;
        Some(self.drain(first))
    }

    pub fn unsubscribe(self) {
        self.rx.close();
    }

    fn drain(&self, mut latest: Snapshot) -> Snapshot {
        let mut skipped = 0;
        while let Ok(snapshot) = self.rx.try_recv() {
            latest = snapshot;
            skipped += 1;
        }
        if skipped > 0 {
            trace!("coalesced {skipped} snapshots");
        }
        latest
    }
}
