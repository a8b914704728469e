//! Password generation
//!
//! The pipeline is: validate the config, build the usable alphabet, draw the
//! minimum-guarantee and free-fill characters, then shuffle.
//!
//! `generate` seeds a fresh ChaCha-based `StdRng` from the operating system
//! for every call and fails if the OS cannot provide entropy.
//! `generate_with_rng` accepts any `rand::Rng`; with a seeded or
//! non-cryptographic generator the output is only as strong as that generator,
//! which is what tests rely on for reproducibility.

mod config;
mod form;
mod password;
mod sampler;
mod shuffle;

pub use config::{ExclusionScope, GenerationConfig};
pub use form::FormInput;
pub use password::Password;
pub use sampler::sample;
pub use shuffle::shuffle;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::charset;
use crate::error::{GeneratorError, Result};
use crate::strength::{evaluate, StrengthReport};

/// Generate a password using a freshly OS-seeded CSPRNG.
///
/// # Example
/// ```
/// use passgen::{generate, GenerationConfig};
///
/// let config = GenerationConfig::new(16);
/// let password = generate(&config).unwrap();
/// assert_eq!(password.len(), 16);
/// ```
pub fn generate(config: &GenerationConfig) -> Result<Password> {
    let mut rng = StdRng::try_from_os_rng()
        .map_err(|e| GeneratorError::RandomSource(e.to_string()))?;
    generate_with_rng(config, &mut rng)
}

/// Generate a password drawing randomness from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<Password> {
    config.validate()
        .inspect_err(|e| warn!("rejected generation config: {}", e))?;

    let alphabet = charset::build(&config.enabled_classes, &config.excluded_chars)
        .inspect_err(|e| warn!("rejected generation config: {}", e))?;

    let draft = sample(config, &alphabet, rng)?;
    let password = Password::from_chars(shuffle(draft, rng));

    debug!("generated password of {} chars", password.len());
    Ok(password)
}

/// Generate a password and score it in one step
pub fn generate_with_report(config: &GenerationConfig) -> Result<(Password, StrengthReport)> {
    let password = generate(config)?;
    let report = evaluate(password.as_str());
    Ok((password, report))
}
