//! Fold-shifting preprocessing of string keys into integer pseudo keys.

/// Folds a key into a non-negative 32-bit pseudo key.
///
/// The key's UTF-16 code units are packed four at a time into a 32-bit group
/// (`group << 8 | unit`, wrapping), and each completed group (or the trailing
/// partial group) is added to the running sum with wrapping arithmetic. The
/// result is the absolute value of the sum as a signed 32-bit integer.
///
/// Different keys can fold to the same pseudo key; the table resolves those
/// collisions by probing. Hashing is case- and whitespace-sensitive.
///
/// ```rust
/// use classics::collections::hash::fold::fold_shift;
///
/// assert_eq!(fold_shift(""), 0);
/// assert_eq!(fold_shift("A"), 65);
/// assert_eq!(fold_shift("AB"), (65 << 8) + 66);
/// ```
pub fn fold_shift(key: &str) -> u32 {
    let mut pseudo_key: i32 = 0;
    let mut grouping: i32 = 0;
    let mut in_group = 0;

    for unit in key.encode_utf16() {
        grouping = (grouping << 8).wrapping_add(i32::from(unit));
        in_group += 1;
        if in_group == 4 {
            pseudo_key = pseudo_key.wrapping_add(grouping);
            grouping = 0;
            in_group = 0;
        }
    }
    if in_group > 0 {
        pseudo_key = pseudo_key.wrapping_add(grouping);
    }

    // i32::MIN has no positive i32 counterpart and maps to 2^31.
    pseudo_key.unsigned_abs()
}
