use contracts::content::ContentStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Founder {
    pub name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
    pub background: &'static str,
    pub why_wineries: &'static str,
    pub expertise: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FOUNDER: Founder = Founder {
    name: "Abhishek",
    initials: "AB",
    title: "Founder & AI Architect",
    linkedin: "https://linkedin.com/in/abhishek",
    email: "abhishek@aisommelier.com",
    background: "Abhishek is a Senior ML Engineer and AI architect with extensive experience building production-grade AI systems for manufacturing and consumer experiences. Having worked with both Fortune 500 companies and innovative startups, he brings a practical, results-driven approach to AI implementation.",
    why_wineries: "The wine industry represents a perfect intersection of tradition and innovation. While deeply rooted in centuries-old practices, modern wineries face complex challenges in quality control, demand forecasting, and customer experience that AI is uniquely positioned to solve.",
    expertise: &[
        "Machine Learning",
        "Computer Vision",
        "Natural Language Processing",
        "Production Systems",
        "Data Architecture",
        "Process Automation",
    ],
};

pub const VALUES: &[Value] = &[
    Value {
        title: "Privacy & Security",
        description: "Your data remains yours. We implement enterprise-grade security and ensure full compliance with privacy regulations. No vendor lock-in, complete transparency.",
        icon: "shield",
    },
    Value {
        title: "Cost-Effectiveness",
        description: "Smart implementation focused on ROI. We start small, prove value quickly, and scale thoughtfully to maximize your investment and minimize risk.",
        icon: "dollar-sign",
    },
    Value {
        title: "Ease of Implementation",
        description: "Seamless integration with your existing workflows. Comprehensive training, ongoing support, and systems designed to enhance rather than disrupt your operations.",
        icon: "zap",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct AboutModel {
    pub title: String,
    pub lead: &'static str,
    pub founder: Founder,
    pub values: &'static [Value],
    pub mission: &'static str,
}

pub fn build(store: &ContentStore) -> AboutModel {
    AboutModel {
        title: format!("About {}", store.site_config().brand.name),
        lead: "Bridging the gap between cutting-edge AI technology and the timeless craft of winemaking.",
        founder: FOUNDER,
        values: VALUES,
        mission: "To help wineries embrace AI thoughtfully and successfully, preserving the artistry of winemaking while unlocking new levels of quality, efficiency, and guest experience.",
    }
}

/// Expertise split into two columns, left one gets the extra item
pub fn expertise_columns(items: &[&'static str]) -> (Vec<&'static str>, Vec<&'static str>) {
    let mid = items.len().div_ceil(2);
    (items[..mid].to_vec(), items[mid..].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::icons::lookup;
    use contracts::content::embedded;

    #[test]
    fn test_page_model_is_idempotent() {
        assert_eq!(build(embedded()), build(embedded()));
    }

    #[test]
    fn test_title_uses_brand() {
        assert_eq!(build(embedded()).title, "About AI Sommelier");
    }

    #[test]
    fn test_three_values_with_known_icons() {
        assert_eq!(VALUES.len(), 3);
        for value in VALUES {
            assert!(lookup(value.icon).is_some(), "{}", value.icon);
        }
    }

    #[test]
    fn test_expertise_columns() {
        let (left, right) = expertise_columns(FOUNDER.expertise);
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 3);
        assert_eq!(left[0], "Machine Learning");
        assert_eq!(right[0], "Production Systems");

        let (left, right) = expertise_columns(&["a", "b", "c"]);
        assert_eq!(left, vec!["a", "b"]);
        assert_eq!(right, vec!["c"]);

        let (left, right) = expertise_columns(&[]);
        assert!(left.is_empty() && right.is_empty());
    }
}
