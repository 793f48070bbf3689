/// A zone registered by the external administrative application.
///
/// The engine never creates or mutates zones; it only reads them for the
/// duration of one query. `full_domain` is stored lowercase without a
/// trailing dot and is unique per (domain, base_domain) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub id: i64,
    pub user_id: i64,
    pub domain: String,
    pub base_domain: String,
    pub full_domain: String,
    pub active: bool,
    pub exact_match: bool,
    pub master: bool,
    pub forwarding: bool,
}

impl Zone {
    /// Whether a zone found at `candidate` may answer a query for
    /// `original`. Exact-match zones only count when the candidate is the
    /// full, unmodified query domain — never a stripped suffix of it.
    pub fn accepts_match(&self, candidate: &str, original: &str) -> bool {
        !self.exact_match || candidate == original
    }
}
