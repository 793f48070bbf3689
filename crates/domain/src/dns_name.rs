//! Domain-name helpers for the suffix-matching algorithm.

/// Normalize a wire-format query name for store lookups: lowercase, no
/// trailing root dot. Zone `full_domain` values are stored the same way.
pub fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// Iterator over the suffix candidates of a query domain, longest first.
///
/// `host.api.example.com` yields `host.api.example.com`, `api.example.com`,
/// `example.com`, `com`. The query domain itself is always the first
/// candidate; the last is the bare top label.
pub fn suffix_candidates(domain: &str) -> SuffixCandidates<'_> {
    SuffixCandidates {
        remaining: if domain.is_empty() { None } else { Some(domain) },
    }
}

pub struct SuffixCandidates<'a> {
    remaining: Option<&'a str>,
}

impl<'a> Iterator for SuffixCandidates<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.remaining?;
        self.remaining = current
            .find('.')
            .map(|dot| &current[dot + 1..])
            .filter(|rest| !rest.is_empty());
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_longest_first() {
        let all: Vec<&str> = suffix_candidates("host.api.example.com").collect();
        assert_eq!(
            all,
            vec!["host.api.example.com", "api.example.com", "example.com", "com"]
        );
    }

    #[test]
    fn test_single_label() {
        let all: Vec<&str> = suffix_candidates("localhost").collect();
        assert_eq!(all, vec!["localhost"]);
    }

    #[test]
    fn test_empty_domain_yields_nothing() {
        assert_eq!(suffix_candidates("").count(), 0);
    }

    #[test]
    fn test_normalize_strips_root_dot_and_case() {
        assert_eq!(normalize("Example.COM."), "example.com");
        assert_eq!(normalize("example.com"), "example.com");
    }
}
