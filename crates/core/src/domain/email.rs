/// Shape-only email check: the address must contain an `@` and a `.`
/// somewhere. Position, count and order are not inspected.
pub fn is_valid_email(candidate: &str) -> bool {
    candidate.contains('@') && candidate.contains('.')
}
