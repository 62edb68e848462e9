// Entropy helpers for the default (non-repeatable) seeding policy

use super::constants_errors::*;

// MARK: os_entropy
#[cfg(not(target_os = "android"))]
#[inline]
pub fn os_entropy(buffer: &mut [u8]) -> Result<(), getrandom::Error> {
    getrandom::getrandom(buffer)
}

// MARK: os_entropy
#[cfg(target_os = "android")]
#[inline]
pub fn os_entropy(buffer: &mut [u8]) -> Result<(), getrandom::Error> {
    android_getrandom(buffer)
}

// MARK: android_getrandom
#[cfg(target_os = "android")]
pub fn android_getrandom(buf: &mut [u8]) -> Result<(), getrandom::Error> {
    use std::fs::File;
    use std::io::Read;

    let mut file = File::open("/dev/urandom")
        .map_err(|_| getrandom::Error::UNSUPPORTED)?;
    file.read_exact(buf)
        .map_err(|_| getrandom::Error::UNSUPPORTED)?;
    Ok(())
}

// MARK: entropy_words
pub fn entropy_words<F>(fill: F) -> Result<[u32; ENTROPY_SEED_WORDS], RandomError>
where
    F: FnOnce(&mut [u8]) -> Result<(), getrandom::Error>,
{
    let mut bytes = [0u8; ENTROPY_SEED_WORDS * 4];
    fill(&mut bytes).map_err(|e| RandomError::Initialization(e.to_string()))?;

    let mut words = [0u32; ENTROPY_SEED_WORDS];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(words)
}
