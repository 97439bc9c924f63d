use crate::error::{Result, StatusError};
use std::time::Duration;

/// Parse an expiry such as `30m`, `1h30m`, `1.5h` or `90s`.
///
/// Units: `ns`, `us`, `ms`, `s`, `m`, `h`, `d`. A bare `0` means no expiry.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let trimmed = input.trim();
    let invalid = || StatusError::InvalidDuration(input.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }
    if trimmed == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total = 0f64;
    let mut rest = trimmed;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(invalid)?;
        if number_len == 0 {
            return Err(invalid());
        }
        let value: f64 = rest[..number_len].parse().map_err(|_| invalid())?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let seconds_per_unit = match &rest[..unit_len] {
            "ns" => 1e-9,
            "us" | "µs" => 1e-6,
            "ms" => 1e-3,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3_600.0,
            "d" => 86_400.0,
            _ => return Err(invalid()),
        };
        total += value * seconds_per_unit;
        rest = &rest[unit_len..];
    }

    Duration::try_from_secs_f64(total).map_err(|_| invalid())
}
