//! Static site content and the lookups pages use to read it.
//!
//! The free functions read the embedded store; pages that need to be
//! exercised against other data take a `&ContentStore` instead.

mod blog;
mod case_study;
mod navigation;
mod role;
mod service;
mod site;
mod store;

pub use blog::{BlogPost, BLOG_DATE_FORMAT};
pub use case_study::{metric_label, CaseStudy, Metric, MAX_DISPLAYED_METRICS};
pub use navigation::{is_active, nav_links, FooterLinks, NavItem, NavLink, Navigation};
pub use role::Role;
pub use service::Service;
pub use site::{Brand, ContactInfo, CtaLabels, Meta, SiteConfig, SocialLinks, WhyItWorksItem};
pub use store::{embedded, ContentError, ContentSources, ContentStore, EMBEDDED_SOURCES};

pub fn get_services() -> &'static [Service] {
    embedded().services()
}

pub fn get_roles() -> &'static [Role] {
    embedded().roles()
}

pub fn get_case_studies() -> &'static [CaseStudy] {
    embedded().case_studies()
}

pub fn get_site_config() -> &'static SiteConfig {
    embedded().site_config()
}

pub fn get_navigation() -> &'static Navigation {
    embedded().navigation()
}

pub fn get_blog_posts() -> &'static [BlogPost] {
    embedded().blog_posts()
}

pub fn get_service_by_id(id: &str) -> Option<&'static Service> {
    embedded().service_by_id(id)
}

pub fn get_role_by_id(id: &str) -> Option<&'static Role> {
    embedded().role_by_id(id)
}

pub fn get_case_study_by_id(id: &str) -> Option<&'static CaseStudy> {
    embedded().case_study_by_id(id)
}

pub fn get_services_for_role(role_id: &str) -> Vec<&'static Service> {
    embedded().services_for_role(role_id)
}
