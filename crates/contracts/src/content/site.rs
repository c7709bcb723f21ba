use serde::{Deserialize, Serialize};

/// Global brand, contact and call-to-action settings. One per site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub brand: Brand,
    pub meta: Meta,
    pub contact: ContactInfo,
    pub social: SocialLinks,
    pub cta: CtaLabels,
    pub why_it_works: Vec<WhyItWorksItem>,
}

impl SiteConfig {
    /// Document title: "<page> | <brand>", or the meta title for the home page
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) if !page.is_empty() => format!("{} | {}", page, self.brand.name),
            _ => self.meta.title.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub description: String,
}

impl Brand {
    /// Logo monogram: first letter of the first two words, uppercased
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaLabels {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhyItWorksItem {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(name: &str) -> Brand {
        Brand {
            name: name.to_string(),
            tagline: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_brand_initials() {
        assert_eq!(brand("AI Sommelier").initials(), "AS");
        assert_eq!(brand("acme").initials(), "A");
        assert_eq!(brand("big red wine co").initials(), "BR");
        assert_eq!(brand("").initials(), "");
    }

    #[test]
    fn test_page_title() {
        let site = crate::content::get_site_config();
        assert_eq!(
            site.page_title(Some("Blog")),
            format!("Blog | {}", site.brand.name)
        );
        assert_eq!(site.page_title(None), site.meta.title);
        assert_eq!(site.page_title(Some("")), site.meta.title);
    }

    #[test]
    fn test_contact_links() {
        let c = ContactInfo {
            email: "a@b.co".into(),
            phone: "+1 555".into(),
            address: String::new(),
        };
        assert_eq!(c.mailto(), "mailto:a@b.co");
        assert_eq!(c.tel(), "tel:+1 555");
    }
}
