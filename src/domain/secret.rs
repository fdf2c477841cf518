/// Characters used for generated secrets. Visually ambiguous glyphs
/// (`0/O`, `1/l/I`, `2/Z`, `5/S`, `u/v`, ...) are excluded.
pub const SECRET_ALPHABET: &[u8] = b"346789ABCDEFGHJKLMNPQRTUVWXYabcdefghijkmnpqrtwxyz";

/// Length of every generated secret.
pub const SECRET_LENGTH: usize = 8;

/// Whether `value` has the shape of a generated secret.
#[cfg(test)]
pub(crate) fn is_generated_secret(value: &str) -> bool {
    value.len() == SECRET_LENGTH && value.bytes().all(|byte| SECRET_ALPHABET.contains(&byte))
}
