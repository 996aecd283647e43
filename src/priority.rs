const ATOR_PREFIX: &str = "ator";

/// Extract the priority level of an ATOR key.
///
/// Accepts `ator` (0), `ator_p` (1) and `ator_<N>p` (N). Anything else is not
/// a priority key and yields `None`. The key is trimmed and lower-cased here,
/// so callers may pass it raw.
pub fn parse_priority(key: &str) -> Option<usize> {
    let key = key.trim().to_lowercase();
    let rest = key.strip_prefix(ATOR_PREFIX)?;
    if rest.is_empty() {
        return Some(0);
    }

    let digits = rest.strip_prefix('_')?.strip_suffix('p')?;
    if digits.is_empty() {
        return Some(1);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // saturate: an absurd level must still fail the capacity check, not wrap
    let level = digits.bytes().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add((b - b'0') as usize)
    });
    Some(level)
}
