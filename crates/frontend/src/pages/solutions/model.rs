use contracts::content::{ContentStore, Role, Service};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImplementationStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const IMPLEMENTATION_STEPS: &[ImplementationStep] = &[
    ImplementationStep {
        title: "Assessment",
        description: "We analyze your current workflows and identify key improvement areas",
    },
    ImplementationStep {
        title: "Pilot",
        description: "Start with a focused pilot project to demonstrate value",
    },
    ImplementationStep {
        title: "Scale",
        description: "Expand successful solutions across your operation",
    },
];

/// One tab: a role and the services recommended for it
#[derive(Debug, Clone, PartialEq)]
pub struct RolePanel {
    pub role: Role,
    /// Resolved in declared order, unknown ids skipped
    pub services: Vec<Service>,
}

impl RolePanel {
    pub fn recommended_heading(&self) -> String {
        format!("Recommended Solutions for {}s", self.role.title)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolutionsModel {
    pub panels: Vec<RolePanel>,
    /// Tab selected on first render: the first role, if any
    pub default_role: Option<String>,
}

impl SolutionsModel {
    /// `(role id, role title)` per tab, in role order
    pub fn tabs(&self) -> Vec<(String, String)> {
        self.panels
            .iter()
            .map(|p| (p.role.id.clone(), p.role.title.clone()))
            .collect()
    }
}

pub fn build(store: &ContentStore) -> SolutionsModel {
    let panels: Vec<RolePanel> = store
        .roles()
        .iter()
        .map(|role| RolePanel {
            role: role.clone(),
            services: store
                .services_for_role(&role.id)
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect();

    SolutionsModel {
        default_role: panels.first().map(|p| p.role.id.clone()),
        panels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::content::embedded;

    fn store_with_roles(roles: Vec<Role>) -> ContentStore {
        let e = embedded();
        ContentStore::new(
            e.services().to_vec(),
            roles,
            e.case_studies().to_vec(),
            e.site_config().clone(),
            e.navigation().clone(),
            e.blog_posts().to_vec(),
        )
    }

    #[test]
    fn test_page_model_is_idempotent() {
        assert_eq!(build(embedded()), build(embedded()));
    }

    #[test]
    fn test_default_is_first_role() {
        let model = build(embedded());
        assert_eq!(
            model.default_role.as_deref(),
            Some(embedded().roles()[0].id.as_str())
        );
        assert_eq!(model.panels.len(), embedded().roles().len());
    }

    #[test]
    fn test_no_roles_no_default() {
        let model = build(&store_with_roles(vec![]));
        assert!(model.panels.is_empty());
        assert_eq!(model.default_role, None);
    }

    #[test]
    fn test_panel_services_follow_role_order_and_skip_unknown() {
        let mut role = embedded().roles()[0].clone();
        role.recommended_service_ids = vec![
            "data-foundation".to_string(),
            "no-such-service".to_string(),
            "vineyard-intelligence".to_string(),
        ];
        let model = build(&store_with_roles(vec![role]));

        let ids: Vec<&str> = model.panels[0]
            .services
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["data-foundation", "vineyard-intelligence"]);
    }

    #[test]
    fn test_tabs_match_roles() {
        let model = build(embedded());
        let tabs = model.tabs();
        assert_eq!(tabs.len(), embedded().roles().len());
        for ((id, title), role) in tabs.iter().zip(embedded().roles()) {
            assert_eq!(id, &role.id);
            assert_eq!(title, &role.title);
        }
        assert_eq!(tabs.first().map(|(id, _)| id.clone()), model.default_role);
    }

    #[test]
    fn test_recommended_heading() {
        let model = build(embedded());
        let panel = &model.panels[0];
        assert_eq!(
            panel.recommended_heading(),
            format!("Recommended Solutions for {}s", panel.role.title)
        );
    }
}
