use serde::Deserialize;
use std::fmt;

/// Numeric identifier WordPress.com assigns to a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct SiteId(u64);

impl SiteId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_id_deserializes_from_json_number() {
        let id: SiteId = serde_json::from_str("123456789").unwrap();
        assert_eq!(id, SiteId::new(123456789));
        assert_eq!(id.to_string(), "123456789");
    }
}
