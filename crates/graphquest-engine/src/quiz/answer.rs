/// Inputs that explicitly claim a feature is absent.
const EMPTY_ANSWERS: [&str; 2] = ["none", "undefined"];

/// Parses a free-text answer into sorted, distinct real numbers.
///
/// Rules:
///
/// - A blank input, `"none"`, or `"undefined"` (case-insensitive) is the
///   empty answer
/// - Otherwise the input is split on commas; each token is either a
///   fraction `a/b` or a decimal number
/// - Any token that fails to parse collapses the *whole* input to the
///   empty answer (fail-soft, no partial credit for partial lists)
///
/// # Example
///
/// ```
/// use graphquest_engine::parse_answer;
///
/// assert_eq!(parse_answer("2, -3"), vec![-3.0, 2.0]);
/// assert_eq!(parse_answer("1/2, 3"), vec![0.5, 3.0]);
/// assert_eq!(parse_answer("none"), Vec::<f64>::new());
/// assert_eq!(parse_answer("abc, 2"), Vec::<f64>::new());
/// ```
#[must_use]
pub fn parse_answer(input: &str) -> Vec<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() || EMPTY_ANSWERS.contains(&trimmed.to_lowercase().as_str()) {
        return Vec::new();
    }

    let mut values = Vec::new();
    for token in trimmed.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let Some(value) = parse_number(token) else {
            return Vec::new();
        };
        values.push(value);
    }

    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

/// Parses one token as `a/b` or as a decimal.
fn parse_number(token: &str) -> Option<f64> {
    if let Some((numerator, denominator)) = token.split_once('/') {
        let n: f64 = numerator.trim().parse().ok()?;
        let d: f64 = denominator.trim().parse().ok()?;
        (d != 0.0).then(|| n / d)
    } else {
        token.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinels() {
        assert_eq!(parse_answer(""), Vec::<f64>::new());
        assert_eq!(parse_answer("   "), Vec::<f64>::new());
        assert_eq!(parse_answer("none"), Vec::<f64>::new());
        assert_eq!(parse_answer("NONE"), Vec::<f64>::new());
        assert_eq!(parse_answer(" Undefined "), Vec::<f64>::new());
    }

    #[test]
    fn test_comma_separated_list_is_sorted() {
        assert_eq!(parse_answer("2, -3"), vec![-3.0, 2.0]);
        assert_eq!(parse_answer("5,1,-2"), vec![-2.0, 1.0, 5.0]);
    }

    #[test]
    fn test_fraction_notation() {
        assert_eq!(parse_answer("1/2, 3"), vec![0.5, 3.0]);
        assert_eq!(parse_answer("-3/4"), vec![-0.75]);
    }

    #[test]
    fn test_bad_token_collapses_whole_input() {
        assert_eq!(parse_answer("abc, 2"), Vec::<f64>::new());
        assert_eq!(parse_answer("2, 1/0"), Vec::<f64>::new());
        assert_eq!(parse_answer("1/2/3"), Vec::<f64>::new());
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        assert_eq!(parse_answer("2, 2, 4/2"), vec![2.0]);
    }

    #[test]
    fn test_decimal_values() {
        assert_eq!(parse_answer("-0.5, 0.25"), vec![-0.5, 0.25]);
    }
}
