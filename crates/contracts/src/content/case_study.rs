use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of metrics shown on a case study card
pub const MAX_DISPLAYED_METRICS: usize = 4;

/// Success story shown on the home and case studies pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub client: String,
    pub problem: String,
    pub approach: String,
    pub impact: String,
    /// Metric name -> value, in the order the data file declares them
    #[serde(with = "ordered_metrics")]
    pub metrics: Vec<Metric>,
    pub quote: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub key: String,
    pub value: String,
}

impl Metric {
    pub fn label(&self) -> String {
        metric_label(&self.key)
    }
}

impl CaseStudy {
    /// First metrics in declared order, at most [`MAX_DISPLAYED_METRICS`]
    pub fn displayed_metrics(&self) -> &[Metric] {
        let n = self.metrics.len().min(MAX_DISPLAYED_METRICS);
        &self.metrics[..n]
    }
}

/// Turns a camelCase metric key into a display label.
///
/// A space goes in front of every ASCII uppercase letter and the result is
/// trimmed, so `qualityScore` becomes `quality Score`, `ROI` becomes `R O I`
/// and a single lowercase word is returned as is.
pub fn metric_label(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out.trim().to_string()
}

/// JSON object <-> `Vec<Metric>` keeping key order
mod ordered_metrics {
    use super::*;

    pub fn serialize<S>(metrics: &[Metric], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(metrics.len()))?;
        for m in metrics {
            map.serialize_entry(&m.key, &m.value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Metric>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MetricsVisitor;

        impl<'de> Visitor<'de> for MetricsVisitor {
            type Value = Vec<Metric>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of metric name to string value")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut metrics = Vec::with_capacity(access.size_hint().unwrap_or(4));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    metrics.push(Metric { key, value });
                }
                Ok(metrics)
            }
        }

        deserializer.deserialize_map(MetricsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_label_camel_case() {
        assert_eq!(metric_label("qualityScore"), "quality Score");
        assert_eq!(metric_label("costSavings"), "cost Savings");
    }

    #[test]
    fn test_metric_label_single_word_unchanged() {
        assert_eq!(metric_label("roi"), "roi");
    }

    #[test]
    fn test_metric_label_multiple_capitals() {
        assert_eq!(metric_label("averageOrderValue"), "average Order Value");
        assert_eq!(metric_label("costSavingsUSD"), "cost Savings U S D");
        assert_eq!(metric_label("ROI"), "R O I");
        assert_eq!(metric_label("Revenue"), "Revenue");
    }

    #[test]
    fn test_metrics_keep_declared_order() {
        let json = r#"{
            "id": "c1", "title": "t", "client": "c", "problem": "p",
            "approach": "a", "impact": "i", "quote": "q", "category": "cat",
            "metrics": { "zeta": "1", "alpha": "2", "midPoint": "3" }
        }"#;
        let case: CaseStudy = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = case.metrics.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "midPoint"]);
        assert_eq!(case.description, None);
    }

    #[test]
    fn test_displayed_metrics_capped_at_four() {
        let metrics = (0..6)
            .map(|i| Metric {
                key: format!("m{}", i),
                value: i.to_string(),
            })
            .collect();
        let case = CaseStudy {
            id: "c".into(),
            title: String::new(),
            client: String::new(),
            problem: String::new(),
            approach: String::new(),
            impact: String::new(),
            metrics,
            quote: String::new(),
            category: String::new(),
            description: None,
        };
        assert_eq!(case.displayed_metrics().len(), 4);
        assert_eq!(case.displayed_metrics()[3].key, "m3");
    }

    #[test]
    fn test_displayed_metrics_fewer_than_four() {
        let json = r#"{
            "id": "c1", "title": "t", "client": "c", "problem": "p",
            "approach": "a", "impact": "i", "quote": "q", "category": "cat",
            "metrics": { "clubConversion": "+120%" }
        }"#;
        let case: CaseStudy = serde_json::from_str(json).unwrap();
        assert_eq!(case.displayed_metrics().len(), 1);
        assert_eq!(case.displayed_metrics()[0].label(), "club Conversion");
    }
}
