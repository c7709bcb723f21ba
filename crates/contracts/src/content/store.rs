use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use thiserror::Error;

use super::{BlogPost, CaseStudy, Navigation, Role, Service, SiteConfig};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate service id '{0}'")]
    DuplicateServiceId(String),
    #[error("blog post {id} has date '{date}', expected YYYY-MM-DD")]
    InvalidBlogDate { id: u32, date: String },
}

/// Raw JSON for every collection of the store
#[derive(Debug, Clone, Copy)]
pub struct ContentSources<'a> {
    pub services: &'a str,
    pub roles: &'a str,
    pub cases: &'a str,
    pub site: &'a str,
    pub nav: &'a str,
    pub blog: &'a str,
}

/// Data files compiled into the binary. `build.rs` checks them, so parsing
/// these cannot fail at runtime.
pub const EMBEDDED_SOURCES: ContentSources<'static> = ContentSources {
    services: include_str!("../../data/services.json"),
    roles: include_str!("../../data/roles.json"),
    cases: include_str!("../../data/cases.json"),
    site: include_str!("../../data/site.json"),
    nav: include_str!("../../data/nav.json"),
    blog: include_str!("../../data/blog.json"),
};

static EMBEDDED_STORE: Lazy<ContentStore> = Lazy::new(|| {
    ContentStore::from_json(EMBEDDED_SOURCES).expect("embedded content is validated by build.rs")
});

/// Process-wide read-only store built from the embedded data files
pub fn embedded() -> &'static ContentStore {
    &EMBEDDED_STORE
}

/// Read-only collections of the site's static content
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore {
    services: Vec<Service>,
    roles: Vec<Role>,
    case_studies: Vec<CaseStudy>,
    site: SiteConfig,
    navigation: Navigation,
    blog_posts: Vec<BlogPost>,
}

fn parse<T: DeserializeOwned>(file: &'static str, json: &str) -> Result<T, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse { file, source })
}

impl ContentStore {
    pub fn new(
        services: Vec<Service>,
        roles: Vec<Role>,
        case_studies: Vec<CaseStudy>,
        site: SiteConfig,
        navigation: Navigation,
        blog_posts: Vec<BlogPost>,
    ) -> Self {
        Self {
            services,
            roles,
            case_studies,
            site,
            navigation,
            blog_posts,
        }
    }

    pub fn from_json(sources: ContentSources<'_>) -> Result<Self, ContentError> {
        let store = Self::new(
            parse("services.json", sources.services)?,
            parse("roles.json", sources.roles)?,
            parse("cases.json", sources.cases)?,
            parse("site.json", sources.site)?,
            parse("nav.json", sources.nav)?,
            parse("blog.json", sources.blog)?,
        );

        let mut seen = HashSet::new();
        for service in &store.services {
            if !seen.insert(service.id.as_str()) {
                return Err(ContentError::DuplicateServiceId(service.id.clone()));
            }
        }

        for post in &store.blog_posts {
            if post.published_on().is_none() {
                return Err(ContentError::InvalidBlogDate {
                    id: post.id,
                    date: post.date.clone(),
                });
            }
        }

        Ok(store)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    pub fn site_config(&self) -> &SiteConfig {
        &self.site
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    pub fn service_by_id(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn role_by_id(&self, id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    pub fn case_study_by_id(&self, id: &str) -> Option<&CaseStudy> {
        self.case_studies.iter().find(|c| c.id == id)
    }

    /// Services recommended for a role, in the role's declared order.
    ///
    /// Unknown role yields an empty list; ids that do not resolve are skipped.
    pub fn services_for_role(&self, role_id: &str) -> Vec<&Service> {
        let Some(role) = self.role_by_id(role_id) else {
            return Vec::new();
        };

        role.recommended_service_ids
            .iter()
            .filter_map(|id| {
                let service = self.service_by_id(id);
                if service.is_none() {
                    log::warn!("role '{}' recommends unknown service '{}'", role.id, id);
                }
                service
            })
            .collect()
    }

    /// `(role id, service id)` pairs whose service id does not resolve
    pub fn unresolved_role_services(&self) -> Vec<(&str, &str)> {
        self.roles
            .iter()
            .flat_map(|role| {
                role.recommended_service_ids
                    .iter()
                    .filter(|id| self.service_by_id(id).is_none())
                    .map(move |id| (role.id.as_str(), id.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_json(id: &str) -> String {
        format!(
            r#"{{"id":"{id}","title":"{id} title","summary":"s","icon":"map",
               "problems":[],"deliverables":[],"pilot":"p","outcomes":["o1"]}}"#
        )
    }

    fn store_with(services: &[&str], roles: &str) -> ContentStore {
        let services: Vec<String> = services.iter().map(|id| service_json(id)).collect();
        let services = format!("[{}]", services.join(","));
        ContentStore::from_json(ContentSources {
            services: &services,
            roles,
            ..EMBEDDED_SOURCES
        })
        .unwrap()
    }

    fn ids<'a>(services: &[&'a Service]) -> Vec<&'a str> {
        services.iter().map(|s| s.id.as_str()).collect()
    }

    const ROLES: &str = r##"[
        {"id":"r1","title":"R1","description":"d","pains":[],
         "recommendedServiceIds":["a","missing","b"],"primaryColor":"#000"},
        {"id":"r2","title":"R2","description":"d","pains":[],
         "recommendedServiceIds":["b","a"],"primaryColor":"#111"}
    ]"##;

    #[test]
    fn test_services_for_role_skips_unresolved_ids() {
        let store = store_with(&["a", "b"], ROLES);
        assert_eq!(ids(&store.services_for_role("r1")), vec!["a", "b"]);
    }

    #[test]
    fn test_services_for_role_preserves_role_order() {
        let store = store_with(&["a", "b"], ROLES);
        assert_eq!(ids(&store.services_for_role("r2")), vec!["b", "a"]);
    }

    #[test]
    fn test_services_for_unknown_role_is_empty() {
        let store = store_with(&["a", "b"], ROLES);
        assert!(store.services_for_role("nobody").is_empty());
    }

    #[test]
    fn test_service_by_id_is_total_and_idempotent() {
        let store = store_with(&["a", "b"], ROLES);
        assert_eq!(store.service_by_id("a"), store.service_by_id("a"));
        assert_eq!(
            store.service_by_id("a").map(|s| s.title.as_str()),
            Some("a title")
        );
        assert!(store.service_by_id("zzz").is_none());
        assert!(store.service_by_id("").is_none());
    }

    #[test]
    fn test_unresolved_role_services_reported() {
        let store = store_with(&["a", "b"], ROLES);
        assert_eq!(store.unresolved_role_services(), vec![("r1", "missing")]);
    }

    #[test]
    fn test_duplicate_service_id_rejected() {
        let services = format!("[{},{}]", service_json("a"), service_json("a"));
        let err = ContentStore::from_json(ContentSources {
            services: &services,
            ..EMBEDDED_SOURCES
        })
        .unwrap_err();
        assert!(matches!(err, ContentError::DuplicateServiceId(id) if id == "a"));
    }

    #[test]
    fn test_impossible_blog_date_rejected() {
        let blog = r#"[{"id":3,"title":"t","excerpt":"e","date":"2024-13-45",
                        "readTime":"5 min read","category":"c","author":"a"}]"#;
        let err = ContentStore::from_json(ContentSources {
            blog,
            ..EMBEDDED_SOURCES
        })
        .unwrap_err();
        match err {
            ContentError::InvalidBlogDate { id, date } => {
                assert_eq!(id, 3);
                assert_eq!(date, "2024-13-45");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = ContentStore::from_json(ContentSources {
            roles: "{ not json",
            ..EMBEDDED_SOURCES
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("failed to parse roles.json"));
    }

    #[test]
    fn test_embedded_content_is_consistent() {
        let store = embedded();
        assert!(!store.services().is_empty());
        assert!(!store.roles().is_empty());
        assert!(store.unresolved_role_services().is_empty());
        for role in store.roles() {
            assert_eq!(
                store.services_for_role(&role.id).len(),
                role.recommended_service_ids.len()
            );
        }
    }
}
