use crate::availability::normalize::normalize_time;

/// Whether two half-open time ranges `[start1, end1)` and `[start2, end2)`
/// intersect.
///
/// Ranges that merely touch at a boundary (`end1 == start2`) do not overlap:
/// back-to-back appointments are legal. Operands are normalized to
/// `HH:MM:SS` before the lexicographic comparison, so a mixed `HH:MM` /
/// `HH:MM:SS` pair cannot be misordered.
pub fn ranges_overlap(start1: &str, end1: &str, start2: &str, end2: &str) -> bool {
    let s1 = normalize_time(start1);
    let e1 = normalize_time(end1);
    let s2 = normalize_time(start2);
    let e2 = normalize_time(end2);

    s1 < e2 && e1 > s2
}
