use crate::constants::{MAGIC_NUMBERS, VALIDATION_CODES};

/// Returns the fixed magic numbers.
#[inline]
pub fn get_magic_numbers() -> &'static [u32; 4] {
    &MAGIC_NUMBERS
}

#[inline]
pub fn get_validation_codes() -> &'static [u32; 4] {
    &VALIDATION_CODES
}

/// Renders `codes` as text if every code is printable ASCII.
pub fn decode_codes(codes: &[u32]) -> Option<String> {
    codes
        .iter()
        .map(|&c| {
            char::from_u32(c).filter(|ch| ch.is_ascii_graphic() || *ch == ' ')
        })
        .collect()
}
