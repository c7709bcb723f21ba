//! Build script validating the static content in `data/`.
//!
//! The data files are embedded with `include_str!` and parsed at runtime
//! without error handling, so any shape mismatch must fail the build here.
//! Checks:
//! - every file parses into the expected shape
//! - service ids are unique
//! - role -> service references resolve (warning only)
//! - blog dates are real `YYYY-MM-DD` days

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

// ============================================================================
// JSON shapes (owned Strings, mirrors src/content)
// ============================================================================

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct ServiceJson {
    id: String,
    title: String,
    summary: String,
    icon: String,
    problems: Vec<String>,
    deliverables: Vec<String>,
    pilot: String,
    outcomes: Vec<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleJson {
    id: String,
    title: String,
    description: String,
    pains: Vec<String>,
    recommended_service_ids: Vec<String>,
    primary_color: String,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct CaseStudyJson {
    id: String,
    title: String,
    client: String,
    problem: String,
    approach: String,
    impact: String,
    metrics: BTreeMap<String, String>,
    quote: String,
    category: String,
    #[serde(default)]
    description: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct TextItemJson {
    title: String,
    description: String,
    icon: String,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SiteJson {
    brand: BTreeMap<String, String>,
    meta: BTreeMap<String, String>,
    contact: BTreeMap<String, String>,
    social: BTreeMap<String, String>,
    cta: BTreeMap<String, String>,
    why_it_works: Vec<TextItemJson>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct LinkJson {
    label: String,
    href: String,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct FooterJson {
    company: Vec<LinkJson>,
    resources: Vec<LinkJson>,
    legal: Vec<LinkJson>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct NavJson {
    navigation: Vec<LinkJson>,
    footer: FooterJson,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogPostJson {
    id: u32,
    title: String,
    excerpt: String,
    date: String,
    read_time: String,
    category: String,
    author: String,
}

const REQUIRED_SITE_KEYS: &[(&str, &[&str])] = &[
    ("brand", &["name", "tagline", "description"]),
    ("meta", &["title", "description"]),
    ("contact", &["email", "phone", "address"]),
    ("social", &["linkedin", "twitter"]),
    ("cta", &["primary", "secondary", "tertiary"]),
];

fn load<T: for<'de> Deserialize<'de>>(data_dir: &Path, file: &str) -> Result<T, String> {
    let path = data_dir.join(file);
    println!("cargo:rerun-if-changed={}", path.display());
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    serde_json::from_str(&contents).map_err(|e| format!("{}: {}", file, e))
}

fn is_iso_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn validate(data_dir: &Path) -> Result<(), String> {
    let services: Vec<ServiceJson> = load(data_dir, "services.json")?;
    let roles: Vec<RoleJson> = load(data_dir, "roles.json")?;
    let _cases: Vec<CaseStudyJson> = load(data_dir, "cases.json")?;
    let site: SiteJson = load(data_dir, "site.json")?;
    let _nav: NavJson = load(data_dir, "nav.json")?;
    let posts: Vec<BlogPostJson> = load(data_dir, "blog.json")?;

    let mut ids = HashSet::new();
    for service in &services {
        if !ids.insert(service.id.as_str()) {
            return Err(format!("services.json: duplicate service id '{}'", service.id));
        }
    }

    for role in &roles {
        for id in &role.recommended_service_ids {
            if !ids.contains(id.as_str()) {
                println!(
                    "cargo:warning=roles.json: role '{}' recommends unknown service '{}'",
                    role.id, id
                );
            }
        }
    }

    let sections = [
        ("brand", &site.brand),
        ("meta", &site.meta),
        ("contact", &site.contact),
        ("social", &site.social),
        ("cta", &site.cta),
    ];
    for (section, keys) in REQUIRED_SITE_KEYS {
        let map = sections
            .iter()
            .find(|(name, _)| name == section)
            .map(|(_, m)| *m)
            .ok_or_else(|| format!("site.json: missing section '{}'", section))?;
        for key in *keys {
            if !map.contains_key(*key) {
                return Err(format!("site.json: missing '{}.{}'", section, key));
            }
        }
    }

    for post in &posts {
        if !is_iso_date(&post.date) {
            return Err(format!(
                "blog.json: post {} has date '{}', expected YYYY-MM-DD",
                post.id, post.date
            ));
        }
    }

    Ok(())
}

fn main() {
    println!("cargo:rerun-if-changed=data");

    let data_dir = Path::new("data");
    if let Err(e) = validate(data_dir) {
        panic!("Invalid site content: {}", e);
    }
}
