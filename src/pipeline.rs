//! Stretch-then-hash pipeline
//!
//! Maps `hash(stretch(base))` over an ordered list of base passwords and
//! returns the results as values. Printing is left to [`crate::report`].

use pwstretch_core::{stretch, DEFAULT_LENGTH, Error, HashRecord, Hasher, MAX_PASSWORD_BYTES};
use tracing::{debug, warn};

/// A base password and the hash of its stretched form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub base: String,
    pub record: HashRecord,
}

/// Result of processing one base password when failures are kept per item
#[derive(Debug)]
pub struct Outcome {
    pub base: String,
    pub result: Result<HashRecord, Error>,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Stretch-then-hash pipeline configuration
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    length: usize,
    hasher: Hasher,
}

impl Pipeline {
    /// Create a pipeline stretching to `length` characters
    pub fn new(length: usize) -> Self {
        Self {
            length,
            hasher: Hasher::new(),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Stretch a single base password and hash it
    pub fn process(&self, base: &str) -> Result<Entry, Error> {
        let stretched = stretch(base, self.length)?;

        if stretched.len() > MAX_PASSWORD_BYTES {
            warn!(
                base,
                bytes = stretched.len(),
                "stretched password exceeds {} bytes, bcrypt ignores the rest",
                MAX_PASSWORD_BYTES
            );
        }

        let record = self.hasher.hash(&stretched)?;
        debug!(base, cost = record.cost(), "hashed");

        Ok(Entry {
            base: base.to_string(),
            record,
        })
    }

    /// Process every base in order, stopping at the first failure
    pub fn run<I, S>(&self, bases: I) -> Result<Vec<Entry>, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        bases
            .into_iter()
            .map(|base| self.process(base.as_ref()))
            .collect()
    }

    /// Process every base in order, keeping failures alongside successes
    pub fn run_each<I, S>(&self, bases: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        bases
            .into_iter()
            .map(|base| {
                let base = base.as_ref();
                let result = self.process(base).map(|entry| entry.record);
                if let Err(e) = &result {
                    warn!(base, error = %e, "skipping base password");
                }
                Outcome {
                    base: base.to_string(),
                    result,
                }
            })
            .collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwstretch_core::{stretch_default, verify};

    #[test]
    fn test_default_length() {
        assert_eq!(Pipeline::default().length(), 64);
        assert_eq!(Pipeline::new(32).length(), 32);
    }

    #[test]
    fn test_process_hashes_stretched_form() {
        let entry = Pipeline::default().process("brownDavid").unwrap();
        let stretched = stretch_default("brownDavid").unwrap();

        assert_eq!(entry.base, "brownDavid");
        assert!(verify(&stretched, entry.record.as_str()).unwrap());
        // The unstretched base is not what was hashed
        assert!(!verify("brownDavid", entry.record.as_str()).unwrap());
    }

    #[test]
    fn test_run_preserves_order() {
        let bases = ["flower123", "Alice2025"];
        let entries = Pipeline::new(16).run(bases).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.base.as_str()).collect();
        assert_eq!(names, bases);
        assert_ne!(entries[0].record, entries[1].record);

        let stretched = stretch("Alice2025", 16).unwrap();
        assert_eq!(stretched, "Alice2025Alice20");
        assert!(verify(&stretched, entries[1].record.as_str()).unwrap());
    }

    #[test]
    fn test_process_multibyte_base_past_bcrypt_limit() {
        // 64 two-byte chars stretch to 128 bytes; bcrypt keeps the first 72
        let entry = Pipeline::new(64).process("é").unwrap();
        let stretched = stretch("é", 64).unwrap();
        assert_eq!(stretched.len(), 128);
        assert!(stretched.len() > MAX_PASSWORD_BYTES);

        assert!(verify(&stretched, &entry.record).unwrap());

        // A change past byte 72 is invisible to bcrypt
        let mut tail_changed: Vec<char> = stretched.chars().collect();
        tail_changed[40] = 'x';
        let tail_changed: String = tail_changed.into_iter().collect();
        assert!(verify(&tail_changed, &entry.record).unwrap());

        // A change inside the first 72 bytes is not
        let mut head_changed: Vec<char> = stretched.chars().collect();
        head_changed[0] = 'x';
        let head_changed: String = head_changed.into_iter().collect();
        assert!(!verify(&head_changed, &entry.record).unwrap());
    }

    #[test]
    fn test_run_stops_at_empty_base() {
        let err = Pipeline::default().run(["", "flower123"]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput));
    }

    #[test]
    fn test_run_each_keeps_going() {
        let bases = vec!["".to_string(), "charliegrn".to_string()];
        let outcomes = Pipeline::new(8).run_each(&bases);

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].base, "");
        assert!(matches!(outcomes[0].result, Err(Error::InvalidInput)));
        assert_eq!(outcomes[1].base, "charliegrn");
        assert!(outcomes[1].is_ok());
    }

    #[test]
    fn test_run_empty_input() {
        assert!(Pipeline::default().run(Vec::<String>::new()).unwrap().is_empty());
        assert!(Pipeline::default().run_each(Vec::<&str>::new()).is_empty());
    }
}
