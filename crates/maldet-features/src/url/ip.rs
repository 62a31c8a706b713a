/// Dotted-quad IPv4 literal: exactly 4 dot-separated groups, each an
/// integer in 0..=255. Anything else, including empty groups, is `false`.
pub fn is_ipv4_literal(host: &str) -> bool {
    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() != 4 {
        return false;
    }
    parts
        .iter()
        .all(|p| matches!(p.parse::<u32>(), Ok(n) if n <= 255))
}
