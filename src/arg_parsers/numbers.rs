use std::{num::NonZeroU32, str::FromStr};

use crate::arg_parse_err::ArgParseErr;

/// Strips leading and trailing whitespace from an input string slice
/// and attempts to parse the remaining string into a specified numeric type `T`.
pub fn strip_and_parse_number<T>(input: &str) -> Result<T, T::Err>
where
    T: FromStr,
    T::Err: std::error::Error,
{
    input.trim().parse::<T>()
}

/// Parses the canvas edge length, which must be a positive integer.
pub fn parse_edge_length(input: &str) -> Result<NonZeroU32, ArgParseErr> {
    let value: u32 = strip_and_parse_number(input)
        .map_err(|_| ArgParseErr::with_msg(format!("invalid canvas size `{input}'")))?;
    NonZeroU32::new(value).ok_or_else(|| ArgParseErr::with_msg("canvas size must be positive"))
}

/// Parses a byte count with an optional binary unit suffix, e.g. `100MiB`, `512K` or `2048`.
///
/// `KB`, `MB` and `GB` are treated the same as `KiB`, `MiB` and `GiB`.
pub fn parse_byte_size(input: &str) -> Result<u64, ArgParseErr> {
    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, unit) = trimmed.split_at(split);
    if digits.is_empty() {
        return Err(ArgParseErr::with_msg(format!("invalid size `{input}'")));
    }
    let multiplier: u64 = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kb" | "kib" => 1 << 10,
        "m" | "mb" | "mib" => 1 << 20,
        "g" | "gb" | "gib" => 1 << 30,
        _ => {
            return Err(ArgParseErr::with_msg(format!(
                "unknown size unit `{}'",
                unit.trim()
            )))
        }
    };
    let count: u64 = digits.parse()?;
    count
        .checked_mul(multiplier)
        .ok_or_else(|| ArgParseErr::with_msg(format!("size `{input}' is too large")))
}
