use log::{debug, trace};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    constants::{MAX_HOURLY_DELTA, MAX_TEMP, MIN_TEMP, clamp_temperature},
    random::{JavaRandom, UniformDraw},
};

use super::{GeneratorError, RngBackend, TemperatureGenerator};

/// Simulates a bounded random walk seeded from the location's name.
///
/// Every call seeds its own random source, so the same location and horizon
/// always give the same temperature and the generator can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashBasedGenerator {
    backend: RngBackend,
}

impl HashBasedGenerator {
    pub fn new(backend: RngBackend) -> Self {
        Self { backend }
    }
}

impl TemperatureGenerator for HashBasedGenerator {
    fn generate_temperature(&self, location: &str, hours: f64) -> Result<i32, GeneratorError> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(GeneratorError::InvalidArgument(format!(
                "hours must be a non-negative number, got {hours}"
            )));
        }
        if location.trim().is_empty() {
            return Err(GeneratorError::InvalidArgument(
                "location cannot be empty".to_string(),
            ));
        }

        let seed = location_seed(location);
        debug!("simulating {location:?} for {hours} h (seed {seed}, backend {})", self.backend);

        let temperature = match self.backend {
            RngBackend::Java => random_walk(&mut JavaRandom::new(seed), hours),
            // Sign-extended, so negative hashes map to the upper half of u64.
            RngBackend::Std => random_walk(&mut StdRng::seed_from_u64(seed as u64), hours),
        };

        Ok(temperature)
    }
}

/// Polynomial string hash (`h = 31 * h + c` over UTF-16 code units, wrapping
/// at 32 bits), widened to a seed.
pub fn location_seed(location: &str) -> i64 {
    let hash = location
        .encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(i32::from(c)));
    i64::from(hash)
}

/// Run the walk for `hours` on an already seeded source.
///
/// Draws exactly once for the starting temperature, once per whole hour, and
/// once more when a fractional hour remains.
pub fn random_walk<R: UniformDraw>(rng: &mut R, hours: f64) -> i32 {
    let mut temp = rng.draw_inclusive(MIN_TEMP, MAX_TEMP);
    if hours == 0.0 {
        return temp;
    }

    let whole_hours = hours.floor();
    let fraction = hours - whole_hours;

    for hour in 0..whole_hours as u64 {
        let delta = rng.draw_inclusive(-MAX_HOURLY_DELTA, MAX_HOURLY_DELTA);
        temp = clamp_temperature(temp + delta);
        trace!("hour {}: {delta:+} -> {temp}", hour + 1);
    }

    if fraction > 0.0 {
        let delta = rng.draw_inclusive(-MAX_HOURLY_DELTA, MAX_HOURLY_DELTA);
        // `as` truncates toward zero.
        temp = clamp_temperature(temp + (f64::from(delta) * fraction) as i32);
        trace!("partial hour {fraction:.3}: {delta:+} -> {temp}");
    }

    temp
}
