//! # Brazilian Tax-Identifier Validation — CPF and CNPJ
//!
//! Structural and arithmetic validation of the two Brazilian taxpayer
//! registry numbers, plus CNPJ check-digit (DV) computation for a
//! 12-character base.
//!
//! Everything here is a pure function of the input string: module-level
//! constant tables, no state, no I/O, safe to call from any number of
//! threads.
//!
//! ## Compatibility Invariant
//!
//! The DV arithmetic values every character as its raw offset from ASCII
//! `'0'`. For digits that is the digit value; for letters (permitted in the
//! base of the newer alphanumeric CNPJ) it yields 17 through 42 for
//! `A`..=`Z` and 49 through 74 for `a`..=`z` — **not** the base-36 mapping
//! (`A` = 10) some registries describe. The system of record computes digits this way, so
//! changing the mapping would silently disagree with every identifier it
//! has already accepted. Do not "fix" this without coordinating a data
//! migration.

use crate::error::TaxIdError;

/// Check-digit weights, applied cyclically over the 12-character CNPJ base.
/// The first digit uses this table shifted by one position; the trailing
/// entry (index 12) folds the first check digit into the second digit's sum.
const DV_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Length of a CPF after mask stripping.
const CPF_LEN: usize = 11;

/// Length of a full CNPJ after mask stripping.
const CNPJ_LEN: usize = 14;

/// Length of the CNPJ base (everything before the two check digits).
const CNPJ_BASE_LEN: usize = 12;

/// The all-zero CNPJ, well-formed but reserved as invalid.
const CNPJ_ZERO: &str = "00000000000000";

/// The all-zero CNPJ base, rejected by the check-digit calculator.
const CNPJ_BASE_ZERO: &str = "000000000000";

/// Remove the formatting mask from a candidate identifier.
///
/// Strips the separator characters `.`, `/` and `-` and nothing else.
/// Never fails, and is idempotent: stripping an already-stripped string
/// is a no-op.
pub fn strip_mask(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '.' | '/' | '-'))
        .collect()
}

/// Validate a CPF candidate, with or without its `ddd.ddd.ddd-dd` mask.
///
/// Returns `false` for any malformed input — wrong length, non-digit
/// characters, repeated-digit sentinels, or check-digit mismatch. Never
/// panics and never errors; an invalid CPF is an expected outcome, not an
/// exceptional one.
pub fn validate_cpf(candidate: &str) -> bool {
    let cpf = strip_mask(candidate);
    if cpf.len() != CPF_LEN || !cpf.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = cpf.bytes().map(|b| u32::from(b - b'0')).collect();

    // Repeated-digit values (000..., 111..., ..., 999...) satisfy the
    // check-digit arithmetic but are reserved as invalid by the registry.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    digits[9] == cpf_check_digit(&digits[..9]) && digits[10] == cpf_check_digit(&digits[..10])
}

/// Compute one CPF check digit from the digits preceding it.
///
/// For a prefix of length `n`, each digit is weighted by `n + 1 - i`
/// (descending to 2), then `(sum * 10) % 11` is taken with remainders 10
/// and 11 clamped to 0.
fn cpf_check_digit(prefix: &[u32]) -> u32 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (top - i as u32))
        .sum();
    let rem = (sum * 10) % 11;
    if rem >= 10 {
        0
    } else {
        rem
    }
}

/// Validate a CNPJ candidate, with or without its `dd.ddd.ddd/dddd-dd` mask.
///
/// The candidate is rejected outright if it contains any character outside
/// `[A-Za-z0-9./-]` — a disallowed character makes it invalid, not merely
/// unparseable. After mask stripping it must be exactly 12 alphanumeric
/// characters followed by 2 decimal check digits, must not be the all-zero
/// sentinel, and the trailing digits must equal [`calculate_dv`] of the
/// base. Never panics and never errors.
pub fn validate_cnpj(candidate: &str) -> bool {
    if candidate.chars().any(is_forbidden_char) {
        return false;
    }

    let cnpj = strip_mask(candidate);
    if !has_cnpj_shape(&cnpj) || cnpj == CNPJ_ZERO {
        return false;
    }

    let (base, provided) = cnpj.split_at(CNPJ_BASE_LEN);
    match calculate_dv(base) {
        Ok(expected) => provided == expected,
        Err(_) => false,
    }
}

/// Compute the two CNPJ check digits for a 12-character alphanumeric base.
///
/// Each character contributes its raw offset from ASCII `'0'` (see the
/// module-level compatibility invariant), weighted by [`DV_WEIGHTS`]: the
/// first digit uses the table shifted by one position, the second uses it
/// unshifted plus the first digit folded in with the trailing weight. A
/// digit is `sum % 11 < 2 ? 0 : 11 - sum % 11`, so the result is always
/// two decimal digit characters.
///
/// # Errors
///
/// Fails with [`TaxIdError::InvalidDvInput`] if `base` is not exactly 12
/// ASCII alphanumeric characters, or is the all-zero base. Callers are
/// expected to hand this function a well-formed base; the guard exists so
/// misuse fails loudly instead of yielding plausible wrong digits.
pub fn calculate_dv(base: &str) -> Result<String, TaxIdError> {
    let well_formed = base.len() == CNPJ_BASE_LEN
        && base.bytes().all(|b| b.is_ascii_alphanumeric())
        && base != CNPJ_BASE_ZERO;
    if !well_formed {
        return Err(TaxIdError::InvalidDvInput(base.to_string()));
    }

    let mut sum1 = 0u32;
    let mut sum2 = 0u32;
    for (i, c) in base.chars().enumerate() {
        let value = c as u32 - '0' as u32;
        sum1 += value * DV_WEIGHTS[i + 1];
        sum2 += value * DV_WEIGHTS[i];
    }

    let dv1 = fold_check_digit(sum1);
    sum2 += dv1 * DV_WEIGHTS[CNPJ_BASE_LEN];
    let dv2 = fold_check_digit(sum2);

    Ok(format!("{dv1}{dv2}"))
}

/// Collapse a weighted sum into a single CNPJ check digit.
fn fold_check_digit(sum: u32) -> u32 {
    let rem = sum % 11;
    if rem < 2 {
        0
    } else {
        11 - rem
    }
}

/// Characters that may never appear anywhere in a CNPJ candidate.
fn is_forbidden_char(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || matches!(c, '.' | '/' | '-'))
}

/// Shape check for a mask-stripped CNPJ: 12 alphanumerics then 2 digits.
fn has_cnpj_shape(s: &str) -> bool {
    s.len() == CNPJ_LEN
        && s.bytes().take(CNPJ_BASE_LEN).all(|b| b.is_ascii_alphanumeric())
        && s.bytes().skip(CNPJ_BASE_LEN).all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ---- strip_mask ----

    #[test]
    fn test_strip_mask_removes_separators() {
        assert_eq!(strip_mask("529.982.247-25"), "52998224725");
        assert_eq!(strip_mask("11.222.333/0001-81"), "11222333000181");
    }

    #[test]
    fn test_strip_mask_leaves_other_characters() {
        assert_eq!(strip_mask("abc 123"), "abc 123");
        assert_eq!(strip_mask(""), "");
    }

    #[test]
    fn test_strip_mask_idempotent() {
        let stripped = strip_mask("11.222.333/0001-81");
        assert_eq!(strip_mask(&stripped), stripped);
    }

    // ---- validate_cpf: accepted ----

    #[test]
    fn test_valid_cpf_masked() {
        assert!(validate_cpf("529.982.247-25"));
        assert!(validate_cpf("123.456.789-09"));
        assert!(validate_cpf("111.444.777-35"));
    }

    #[test]
    fn test_valid_cpf_unmasked() {
        assert!(validate_cpf("52998224725"));
    }

    // ---- validate_cpf: rejected ----

    #[test]
    fn test_cpf_check_digit_mismatch() {
        // First check digit off by one.
        assert!(!validate_cpf("529.982.247-35"));
        // Second check digit off by one.
        assert!(!validate_cpf("529.982.247-24"));
    }

    #[test]
    fn test_cpf_wrong_length() {
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("5299822472"));
        assert!(!validate_cpf("529982247255"));
        assert!(!validate_cpf("529.982.247-2"));
    }

    #[test]
    fn test_cpf_non_digit_content() {
        assert!(!validate_cpf("529.982.24a-25"));
        assert!(!validate_cpf("abcdefghijk"));
    }

    #[test]
    fn test_cpf_zero_sentinel() {
        assert!(!validate_cpf("000.000.000-00"));
        assert!(!validate_cpf("00000000000"));
    }

    #[test]
    fn test_cpf_repeated_digit_sentinels() {
        // Every repeated-digit CPF satisfies the weighted-sum arithmetic,
        // so each must be rejected explicitly.
        for d in 0..=9u8 {
            let cpf: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
            assert!(!validate_cpf(&cpf), "{cpf} should be invalid");
        }
    }

    // ---- validate_cnpj: accepted ----

    #[test]
    fn test_valid_cnpj_masked() {
        assert!(validate_cnpj("11.222.333/0001-81"));
        assert!(validate_cnpj("00.623.904/0001-73"));
        assert!(validate_cnpj("11.444.777/0001-61"));
    }

    #[test]
    fn test_valid_cnpj_unmasked() {
        assert!(validate_cnpj("11222333000181"));
    }

    #[test]
    fn test_valid_cnpj_alphanumeric_base() {
        // Letters are valued by raw ASCII offset, so these digits only
        // verify against this implementation's arithmetic.
        assert!(validate_cnpj("AB.CDE.FGH/IJKL-80"));
        assert!(validate_cnpj("abcdefghijkl01"));
    }

    // ---- validate_cnpj: rejected ----

    #[test]
    fn test_cnpj_check_digit_mismatch() {
        assert!(!validate_cnpj("11.222.333/0001-80"));
        assert!(!validate_cnpj("00.623.904/0001-71"));
    }

    #[test]
    fn test_cnpj_forbidden_characters() {
        assert!(!validate_cnpj("11.222.333/0001_81"));
        assert!(!validate_cnpj("11.222.333/0001-81 "));
        assert!(!validate_cnpj("11.222.333/0001-8ñ"));
        assert!(!validate_cnpj("11,222,333/0001-81"));
    }

    #[test]
    fn test_cnpj_wrong_shape() {
        assert!(!validate_cnpj(""));
        assert!(!validate_cnpj("1122233300018"));
        assert!(!validate_cnpj("112223330001811"));
        // Check digits must be decimal even when the base is alphanumeric.
        assert!(!validate_cnpj("11.222.333/0001-8A"));
    }

    #[test]
    fn test_cnpj_zero_sentinel() {
        assert!(!validate_cnpj("00.000.000/0000-00"));
        assert!(!validate_cnpj("00000000000000"));
    }

    #[test]
    fn test_cnpj_letter_case_changes_digits() {
        // The ASCII-offset arithmetic is case-sensitive: the digits computed
        // for the lowercase base do not verify the uppercase one.
        assert!(!validate_cnpj("ABCDEFGHIJKL01"));
        assert!(!validate_cnpj("abcdefghijkl80"));
    }

    // ---- calculate_dv ----

    #[test]
    fn test_calculate_dv_known_numeric_bases() {
        assert_eq!(calculate_dv("112223330001").unwrap(), "81");
        assert_eq!(calculate_dv("006239040001").unwrap(), "73");
        assert_eq!(calculate_dv("114447770001").unwrap(), "61");
    }

    #[test]
    fn test_calculate_dv_alphanumeric_bases() {
        assert_eq!(calculate_dv("ABCDEFGHIJKL").unwrap(), "80");
        assert_eq!(calculate_dv("abcdefghijkl").unwrap(), "01");
    }

    #[test]
    fn test_calculate_dv_agrees_with_validate_cnpj() {
        let dv = calculate_dv("112223330001").unwrap();
        assert!(validate_cnpj(&format!("11.222.333/0001-{dv}")));
    }

    #[test]
    fn test_calculate_dv_rejects_wrong_length() {
        assert!(calculate_dv("").is_err());
        assert!(calculate_dv("11222333000").is_err());
        assert!(calculate_dv("1122233300011").is_err());
    }

    #[test]
    fn test_calculate_dv_rejects_non_alphanumeric() {
        assert!(calculate_dv("11.222.333/01").is_err());
        assert!(calculate_dv("11222333000!").is_err());
    }

    #[test]
    fn test_calculate_dv_rejects_zero_base() {
        assert!(matches!(
            calculate_dv("000000000000"),
            Err(TaxIdError::InvalidDvInput(_))
        ));
    }

    #[test]
    fn test_calculate_dv_deterministic() {
        assert_eq!(
            calculate_dv("112223330001").unwrap(),
            calculate_dv("112223330001").unwrap()
        );
    }

    // ---- properties ----

    proptest! {
        #[test]
        fn prop_cpf_wrong_length_rejected(s in "[0-9]{0,10}|[0-9]{12,20}") {
            prop_assert!(!validate_cpf(&s));
        }

        #[test]
        fn prop_strip_mask_idempotent(s in ".*") {
            let once = strip_mask(&s);
            prop_assert_eq!(strip_mask(&once), once.clone());
        }

        #[test]
        fn prop_constructed_cpf_validates(base in proptest::collection::vec(0u32..10, 9)) {
            prop_assume!(!base.iter().all(|&d| d == base[0]));

            let mut digits = base;
            let dv1 = cpf_check_digit(&digits);
            digits.push(dv1);
            let dv2 = cpf_check_digit(&digits);
            digits.push(dv2);

            let cpf: String = digits
                .iter()
                .map(|&d| char::from_digit(d, 10).unwrap())
                .collect();
            prop_assert!(validate_cpf(&cpf));

            // Mutating either check digit must invalidate it.
            let mut bad_first = digits.clone();
            bad_first[9] = (bad_first[9] + 1) % 10;
            let bad: String = bad_first
                .iter()
                .map(|&d| char::from_digit(d, 10).unwrap())
                .collect();
            prop_assert!(!validate_cpf(&bad));

            let mut bad_second = digits;
            bad_second[10] = (bad_second[10] + 1) % 10;
            let bad: String = bad_second
                .iter()
                .map(|&d| char::from_digit(d, 10).unwrap())
                .collect();
            prop_assert!(!validate_cpf(&bad));
        }

        #[test]
        fn prop_cnpj_forbidden_char_rejected(s in "[0-9]{14}", ch in "[ _*!@#,;:ç]") {
            let tainted = format!("{s}{ch}");
            prop_assert!(!validate_cnpj(&tainted));
        }

        #[test]
        fn prop_constructed_cnpj_validates(base in "[1-9][0-9]{11}") {
            let dv = calculate_dv(&base).unwrap();
            let full = format!("{base}{dv}");
            prop_assert!(validate_cnpj(&full));
        }
    }
}
