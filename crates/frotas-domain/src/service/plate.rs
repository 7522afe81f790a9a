//! Brazilian license plate validation and formatting
//!
//! Two formats are accepted: the legacy pattern "ABC-1234" (hyphen
//! optional on input) and the Mercosul pattern "ABC1D23".

use frotas_types::TransitionError;

/// Validate a plate and return its canonical form
///
/// Whitespace is stripped and the input uppercased before matching.
/// Legacy plates canonicalize with the hyphen ("ABC-1234"); Mercosul
/// plates stay bare ("ABC1D23").
pub fn validate_plate(input: &str) -> Result<String, TransitionError> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if cleaned.is_empty() {
        return Err(TransitionError::EmptyPlate);
    }

    if is_legacy(&cleaned) || is_mercosul(&cleaned) {
        Ok(format_plate(&cleaned))
    } else {
        Err(TransitionError::InvalidPlate(cleaned))
    }
}

/// Normalize a plate string for display
///
/// Strips everything but letters and digits, uppercases, and re-inserts
/// the legacy hyphen when the result is not a Mercosul plate.
pub fn format_plate(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_uppercase();

    if cleaned.len() == 7 && is_mercosul(&cleaned) {
        return cleaned;
    }

    if cleaned.len() >= 6 {
        let letters = &cleaned[..3.min(cleaned.len())];
        let digits = &cleaned[3..7.min(cleaned.len())];
        return format!("{}-{}", letters, digits);
    }

    input.to_uppercase()
}

/// Legacy pattern: three letters, optional hyphen, four digits
fn is_legacy(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    match chars.len() {
        7 => {
            chars[..3].iter().all(|c| c.is_ascii_alphabetic())
                && chars[3..].iter().all(|c| c.is_ascii_digit())
        }
        8 => {
            chars[..3].iter().all(|c| c.is_ascii_alphabetic())
                && chars[3] == '-'
                && chars[4..].iter().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

/// Mercosul pattern: LLL D L DD
fn is_mercosul(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.len() == 7
        && chars[..3].iter().all(|c| c.is_ascii_alphabetic())
        && chars[3].is_ascii_digit()
        && chars[4].is_ascii_alphabetic()
        && chars[5..].iter().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_plate_with_hyphen() {
        assert_eq!(validate_plate("ABC-1234").unwrap(), "ABC-1234");
    }

    #[test]
    fn test_legacy_plate_without_hyphen_is_reformatted() {
        assert_eq!(validate_plate("abc1234").unwrap(), "ABC-1234");
    }

    #[test]
    fn test_mercosul_plate() {
        assert_eq!(validate_plate("abc1d23").unwrap(), "ABC1D23");
    }

    #[test]
    fn test_whitespace_is_stripped() {
        assert_eq!(validate_plate(" AB C-1234 ").unwrap(), "ABC-1234");
    }

    #[test]
    fn test_empty_plate() {
        assert_eq!(validate_plate("   "), Err(TransitionError::EmptyPlate));
    }

    #[test]
    fn test_invalid_plates() {
        for bad in ["AB-123", "1234567", "ABCD123", "ABC-12345", "AB1C234"] {
            assert!(
                matches!(validate_plate(bad), Err(TransitionError::InvalidPlate(_))),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn test_format_plate_short_input_passthrough() {
        assert_eq!(format_plate("abc"), "ABC");
    }
}
