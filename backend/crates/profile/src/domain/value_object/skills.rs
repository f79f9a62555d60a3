//! Skills - normalized list parsed from a comma-delimited string

/// Ordered, trimmed skill names.
///
/// Never holds the raw delimited input; construction always splits and trims.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Skills(Vec<String>);

impl Skills {
    /// Split on `,`, trim each entry, keep input order.
    ///
    /// Empty segments (`"rust,,go,"`) are dropped.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|skill| !skill.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_keeps_order() {
        let skills = Skills::parse(" Rust,  Go ,SQL");
        assert_eq!(skills.as_slice(), ["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_parse_single_value() {
        assert_eq!(Skills::parse("Rust").as_slice(), ["Rust"]);
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        assert_eq!(Skills::parse("rust, ,go,").as_slice(), ["rust", "go"]);
        assert!(Skills::parse(" , ").is_empty());
    }
}
