//! Physical envelope of the simulated climate.

/// Lowest temperature the simulator will ever report (°C).
pub const MIN_TEMP: i32 = -10;

/// Highest temperature the simulator will ever report (°C).
pub const MAX_TEMP: i32 = 35;

/// Largest change, in either direction, applied over a single hour (°C).
pub const MAX_HOURLY_DELTA: i32 = 5;

/// Restrict `temp` to `[MIN_TEMP, MAX_TEMP]`.
pub fn clamp_temperature(temp: i32) -> i32 {
    temp.clamp(MIN_TEMP, MAX_TEMP)
}
