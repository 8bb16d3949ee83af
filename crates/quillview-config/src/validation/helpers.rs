//! Shared validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is longer than `max` characters.
pub(crate) fn validate_max_len(errors: &mut Vec<String>, name: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errors.push(format!("{name} is {len} characters, longer than {max}"));
    }
}
