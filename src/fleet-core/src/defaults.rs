use sha2::{Digest, Sha256};

/// Stable source of placeholder values for a shipment record.
///
/// Every value is derived from a SHA-256 digest of the record id, mapping the same record
/// twice yields the same placeholders.
pub(crate) struct RecordSeed([u8; 32]);

impl RecordSeed {
    pub fn new(id: &str) -> RecordSeed {
        RecordSeed(Sha256::digest(id.as_bytes()).into())
    }

    /// A number in `[min, min + span)` taken from the 8 digest bytes at `slot * 8`.
    fn number(&self, slot: usize, min: u64, span: u64) -> u64 {
        let offset = (slot % 4) * 8;
        let mut bytes = [0; 8];
        bytes.copy_from_slice(&self.0[offset..offset + 8]);
        min + u64::from_be_bytes(bytes) % span
    }

    pub fn imo(&self) -> String {
        format!("IMO{}", self.number(0, 1_000_000, 9_000_000))
    }

    pub fn container_id(&self) -> String {
        format!("MCLU{}", self.number(1, 1_000_000, 9_000_000))
    }

    pub fn cargo_pieces(&self) -> u32 {
        self.number(2, 20, 80) as u32
    }

    pub fn cargo_seal(&self) -> String {
        format!("SL{}", self.number(3, 100_000, 900_000))
    }
}
