use serde::{Deserialize, Serialize};

/// AI offering shown on the home, services and solutions pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Key into the frontend icon table
    pub icon: String,
    pub problems: Vec<String>,
    pub deliverables: Vec<String>,
    pub pilot: String,
    pub outcomes: Vec<String>,
}

impl Service {
    /// Anchor used by the services page quick navigation
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}
