//! Brazilian individual taxpayer id (CPF)

const CPF_LENGTH: usize = 11;

/// Remove the `.` and `-` punctuation of a typed CPF
pub fn strip(cpf: &str) -> String {
    cpf.chars().filter(|c| !matches!(c, '.' | '-')).collect()
}

/// Digits only, for use as a lookup key
pub fn digits_only(cpf: &str) -> String {
    cpf.chars().filter(char::is_ascii_digit).collect()
}

/// Check a CPF against its two check digits.
///
/// Fails for empty input, wrong length, non-digits, repeated digits
/// (`111.111.111-11`) and any stripped value present in `reject_list`.
pub fn is_cpf_valid(cpf: &str, reject_list: &[&str]) -> bool {
    let stripped = strip(cpf);

    if stripped.is_empty() || stripped.len() != CPF_LENGTH {
        return false;
    }

    let Some(digits) = stripped
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
    else {
        return false;
    };

    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    if reject_list.iter().any(|rejected| *rejected == stripped) {
        return false;
    }

    let mut numbers = digits[..9].to_vec();
    numbers.push(verifier_digit(&numbers));
    numbers.push(verifier_digit(&numbers));

    numbers[9..] == digits[9..]
}

/// Weighted sum mod 11: weights run from `len + 1` down to 2
fn verifier_digit(numbers: &[u32]) -> u32 {
    let modulus = numbers.len() as u32 + 1;
    let sum: u32 = numbers
        .iter()
        .enumerate()
        .map(|(index, number)| number * (modulus - index as u32))
        .sum();

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// `52998224725` → `529.982.247-25`; anything that is not 11 digits after
/// stripping is returned stripped but unpunctuated
pub fn format_cpf(cpf: &str) -> String {
    let stripped = strip(cpf);
    if stripped.len() != CPF_LENGTH || !stripped.chars().all(|c| c.is_ascii_digit()) {
        return stripped;
    }

    format!(
        "{}.{}.{}-{}",
        &stripped[0..3],
        &stripped[3..6],
        &stripped[6..9],
        &stripped[9..11]
    )
}
