//! Shared string utilities for code generation.

/// Uppercase the first character (e.g., "firstName" -> "FirstName")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a camelCase identifier to UPPER_SNAKE_CASE (e.g., "firstName" -> "FIRST_NAME")
pub fn to_upper_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() && prev_lower {
            result.push('_');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        result.extend(c.to_uppercase());
    }
    result.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("age"), "Age");
        assert_eq!(capitalize("firstName"), "FirstName");
        assert_eq!(capitalize("URL"), "URL");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_to_upper_snake_case() {
        assert_eq!(to_upper_snake_case("age"), "AGE");
        assert_eq!(to_upper_snake_case("firstName"), "FIRST_NAME");
        assert_eq!(to_upper_snake_case("httpURL"), "HTTP_URL");
        assert_eq!(to_upper_snake_case("line2Address"), "LINE2_ADDRESS");
        assert_eq!(to_upper_snake_case(""), "");
    }
}
