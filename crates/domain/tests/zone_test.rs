use warden_dns_domain::Zone;

fn zone(full_domain: &str, exact_match: bool) -> Zone {
    Zone {
        id: 1,
        user_id: 1,
        domain: full_domain.split('.').next().unwrap_or_default().to_string(),
        base_domain: String::new(),
        full_domain: full_domain.to_string(),
        active: true,
        exact_match,
        master: false,
        forwarding: false,
    }
}

#[test]
fn test_plain_zone_matches_any_candidate_level() {
    let z = zone("example.com", false);
    assert!(z.accepts_match("example.com", "host.example.com"));
    assert!(z.accepts_match("example.com", "example.com"));
}

#[test]
fn test_exact_match_zone_only_matches_full_query() {
    let z = zone("example.com", true);
    assert!(z.accepts_match("example.com", "example.com"));
    assert!(!z.accepts_match("example.com", "sub.example.com"));
}
