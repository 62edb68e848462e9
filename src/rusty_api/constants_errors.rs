// MT19937 parameters
pub const MT_STATE_WORDS: usize = 624;
pub const MT_SHIFT_WORDS: usize = 397;
pub const MT_DEFAULT_SEED: u32 = 5489;

// Seed used by hosts asking for a repeatable sequence without naming one
pub const REPEATABLE_SEED: u32 = 42;

// Words of OS entropy fed to init_by_array for the default seeding policy
pub const ENTROPY_SEED_WORDS: usize = 8;

pub const ALPHANUMERIC: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub const RANDOM_SUCCESS: i32 = 0;
pub const RANDOM_ERROR_INITIALIZATION: i32 = -1;
pub const RANDOM_ERROR_INVALID_BOUND: i32 = -2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    Initialization(String),
    InvalidBound,
}

impl RandomError {
    // MARK: status_code
    pub fn status_code(&self) -> i32 {
        match self {
            RandomError::Initialization(_) => RANDOM_ERROR_INITIALIZATION,
            RandomError::InvalidBound => RANDOM_ERROR_INVALID_BOUND,
        }
    }
}

impl std::fmt::Display for RandomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RandomError::Initialization(reason) => {
                write!(f, "Random generator initialization failed: {}", reason)
            }
            RandomError::InvalidBound => write!(f, "Upper bound must be greater than zero"),
        }
    }
}

impl std::error::Error for RandomError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_initialization() {
        let err = RandomError::Initialization("entropy source unavailable".into());
        assert_eq!(
            format!("{}", err),
            "Random generator initialization failed: entropy source unavailable"
        );
    }

    #[test]
    fn test_status_codes_are_distinct_failures() {
        let init = RandomError::Initialization(String::new()).status_code();
        let bound = RandomError::InvalidBound.status_code();
        assert_eq!(init, RANDOM_ERROR_INITIALIZATION);
        assert_eq!(bound, RANDOM_ERROR_INVALID_BOUND);
        assert_ne!(init, RANDOM_SUCCESS);
        assert_ne!(bound, RANDOM_SUCCESS);
    }

    #[test]
    fn test_alphanumeric_alphabet() {
        assert!(ALPHANUMERIC.iter().all(|c| c.is_ascii_alphanumeric()));
        let mut sorted = ALPHANUMERIC.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 62);
    }
}
