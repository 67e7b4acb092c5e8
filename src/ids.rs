// Booking identifier generation
use crate::config::EngineConfig;
use crate::error::{ConfigError, IdGenerationError};
use parking_lot::Mutex;
use rand::Rng;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

const ID_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Random draws per call before giving up on finding an unused id
pub const MAX_ID_DRAWS: u32 = 32;

pub trait BookingIdGenerator: Send + Sync {
    fn next_id(&self) -> Result<String, IdGenerationError>;
}

/// Random `BK-XXXXXXXX` style identifiers.
///
/// Every issued id is remembered, so a generator never hands out the same
/// id twice for the lifetime of the process, even when shared between threads.
/// The issued set is never pruned: memory grows by one short string per
/// booking, which is negligible for a demo process but would call for a
/// bounded window of recent ids in a long-running service.
///
/// A call draws at most [`MAX_ID_DRAWS`] candidates and fails with
/// [`IdGenerationError::Exhausted`] instead of spinning once the id space
/// is (nearly) used up.
pub struct RandomIdGenerator {
    prefix: String,
    length: usize,
    issued: Mutex<HashSet<String>>,
}

impl RandomIdGenerator {
    pub fn new(prefix: impl Into<String>, length: usize) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::InvalidValue(
                "booking id length must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            prefix: prefix.into(),
            length,
            issued: Mutex::new(HashSet::new()),
        })
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(config.booking_id_prefix.clone(), config.booking_id_length)
    }

    pub fn issued_count(&self) -> usize {
        self.issued.lock().len()
    }

    fn random_token(&self) -> String {
        let mut rng = rand::thread_rng();
        let token: String = (0..self.length)
            .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
            .collect();
        format!("{}{}", self.prefix, token)
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            prefix: config.booking_id_prefix,
            length: config.booking_id_length,
            issued: Mutex::new(HashSet::new()),
        }
    }
}

impl BookingIdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Result<String, IdGenerationError> {
        let mut issued = self.issued.lock();
        for _ in 0..MAX_ID_DRAWS {
            let candidate = self.random_token();
            if issued.insert(candidate.clone()) {
                return Ok(candidate);
            }
            warn!("Booking id collision on {}, drawing again", candidate);
        }

        warn!(
            "No unused booking id after {} draws ({} issued)",
            MAX_ID_DRAWS,
            issued.len()
        );
        Err(IdGenerationError::Exhausted {
            attempts: MAX_ID_DRAWS,
        })
    }
}

// Predictable ids (BK-00000001, BK-00000002, ...) for tests and demos
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl BookingIdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> Result<String, IdGenerationError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("{}{:08}", self.prefix, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_random_id_format() {
        let generator = RandomIdGenerator::default();
        let id = generator.next_id().unwrap();

        assert!(id.starts_with("BK-"));
        let token = &id[3..];
        assert_eq!(token.len(), 8);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_random_ids_unique_across_threads() {
        // Short tokens make collisions likely, so the retry path is exercised
        let generator = Arc::new(RandomIdGenerator::new("T-", 4).unwrap());
        let threads_count = 8;
        let ids_per_thread = 500;

        let mut handles = vec![];
        for _ in 0..threads_count {
            let generator = Arc::clone(&generator);
            handles.push(thread::spawn(move || {
                (0..ids_per_thread)
                    .map(|_| generator.next_id().unwrap())
                    .collect::<Vec<_>>()
            }));
        }

        let mut all_ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(all_ids.insert(id), "duplicate booking id issued");
            }
        }

        assert_eq!(all_ids.len(), threads_count * ids_per_thread);
        assert_eq!(generator.issued_count(), threads_count * ids_per_thread);
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(
            RandomIdGenerator::new("BK-", 0),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_from_config_validates() {
        let config = EngineConfig {
            booking_id_length: 2,
            ..EngineConfig::default()
        };
        assert!(RandomIdGenerator::from_config(&config).is_err());
        assert!(RandomIdGenerator::from_config(&EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_exhausted_id_space_returns_error() {
        // One character gives only 36 possible ids
        let generator = RandomIdGenerator::new("X-", 1).unwrap();
        let mut issued = HashSet::new();
        let mut failures = 0;

        for _ in 0..200 {
            match generator.next_id() {
                Ok(id) => assert!(issued.insert(id), "duplicate booking id issued"),
                Err(e) => {
                    assert_eq!(
                        e,
                        IdGenerationError::Exhausted {
                            attempts: MAX_ID_DRAWS
                        }
                    );
                    failures += 1;
                }
            }
        }

        assert!(issued.len() <= ID_CHARSET.len());
        assert!(failures >= 200 - ID_CHARSET.len());
        assert_eq!(generator.issued_count(), issued.len());
    }

    #[test]
    fn test_sequential_ids() {
        let generator = SequentialIdGenerator::new("BK-");
        assert_eq!(generator.next_id().unwrap(), "BK-00000001");
        assert_eq!(generator.next_id().unwrap(), "BK-00000002");
    }
}
