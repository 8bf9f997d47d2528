//! Snowflake ID - 64-bit unique identifier
//!
//! Layout:
//! - Bits 63-22: timestamp (milliseconds since custom epoch)
//! - Bits 21-12: worker ID (0-1023)
//! - Bits 11-0:  sequence number (0-4095)

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// 64-bit Snowflake ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2024-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1704067200000;

    /// Create a Snowflake from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Extract the creation timestamp (milliseconds since Unix epoch)
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> 22) + Self::EPOCH
    }

    /// Extract the worker ID (0-1023)
    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> 12) & 0x3FF) as u16
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Serialized as a string in JSON (JavaScript BigInt safety)
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Accepted back as either a string or a bare integer
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(i64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(n) => Ok(Snowflake(n)),
            Repr::Text(s) => s
                .parse::<i64>()
                .map(Snowflake)
                .map_err(|_| de::Error::custom("invalid snowflake string")),
        }
    }
}

/// Thread-safe Snowflake ID generator
///
/// Packs the last-issued timestamp and sequence into a single atomic word,
/// so allocation is a lock-free compare-exchange loop. Up to 4096 ids per
/// millisecond per worker.
pub struct SnowflakeGenerator {
    worker_id: u16,
    // (timestamp relative to EPOCH) << 12 | sequence
    state: AtomicI64,
}

impl SnowflakeGenerator {
    /// Create a new generator with the given worker ID
    ///
    /// # Panics
    /// Panics if worker_id >= 1024
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id < 1024, "Worker ID must be < 1024");
        Self {
            worker_id,
            state: AtomicI64::new(0),
        }
    }

    /// Generate a new unique Snowflake ID
    pub fn generate(&self) -> Snowflake {
        loop {
            let state = self.state.load(Ordering::Acquire);
            let last_ts = state >> 12;
            let sequence = state & 0xFFF;

            let mut now = self.current_timestamp() - Snowflake::EPOCH;
            if now < last_ts {
                // Clock went backwards; keep issuing against the last
                // observed timestamp so ids stay monotonic.
                now = last_ts;
            }

            let next = if now == last_ts {
                if sequence == 0xFFF {
                    // Sequence exhausted for this millisecond
                    while self.current_timestamp() - Snowflake::EPOCH <= last_ts {
                        std::hint::spin_loop();
                    }
                    (last_ts + 1) << 12
                } else {
                    (now << 12) | (sequence + 1)
                }
            } else {
                now << 12
            };

            if self
                .state
                .compare_exchange(state, next, Ordering::Release, Ordering::Relaxed)
                .is_ok()
            {
                let ts = next >> 12;
                let seq = next & 0xFFF;
                let id = (ts << 22) | (i64::from(self.worker_id) << 12) | seq;
                return Snowflake::new(id);
            }
            // Lost the race; retry with fresh state.
        }
    }

    /// Get the worker ID of this generator
    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }

    #[inline]
    fn current_timestamp(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}
