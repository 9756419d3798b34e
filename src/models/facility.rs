use serde::{Deserialize, Serialize};

/// A care facility that can be suggested next to a disease answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub url: String,
    /// Category labels such as `multispecialty`, `cardiac`, `emergency`.
    pub tags: Vec<String>,
}

impl Facility {
    pub fn new(name: &str, address: &str, phone: &str, url: &str, tags: &[&str]) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            url: url.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
