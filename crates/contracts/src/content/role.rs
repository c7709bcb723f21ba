use serde::{Deserialize, Serialize};

/// Persona the solutions page is organized around
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub title: String,
    pub description: String,
    pub pains: Vec<String>,
    /// Ordered; ids that do not resolve to a service are skipped at lookup time
    pub recommended_service_ids: Vec<String>,
    pub primary_color: String,
}
