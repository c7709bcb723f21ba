use crate::shared::components::{metric_tiles, MetricTile};
use contracts::content::{CaseStudy, ContentStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateResult {
    pub metric: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Portfolio-wide figures shown under the case list
pub const AGGREGATE_RESULTS: &[AggregateResult] = &[
    AggregateResult {
        metric: "40%",
        label: "Average Cost Reduction",
        description: "Across quality control and operations",
    },
    AggregateResult {
        metric: "60%",
        label: "Improvement in Efficiency",
        description: "Through automation and AI insights",
    },
    AggregateResult {
        metric: "95%",
        label: "Client Satisfaction",
        description: "Would recommend our services",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct CaseEntry {
    pub case: CaseStudy,
    pub tiles: Vec<MetricTile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseStudiesModel {
    pub entries: Vec<CaseEntry>,
    pub aggregates: &'static [AggregateResult],
}

pub fn build(store: &ContentStore) -> CaseStudiesModel {
    CaseStudiesModel {
        entries: store
            .case_studies()
            .iter()
            .map(|case| CaseEntry {
                tiles: metric_tiles(case),
                case: case.clone(),
            })
            .collect(),
        aggregates: AGGREGATE_RESULTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::content::{embedded, Metric};

    #[test]
    fn test_page_model_is_idempotent() {
        assert_eq!(build(embedded()), build(embedded()));
    }

    #[test]
    fn test_every_case_listed_with_at_most_four_tiles() {
        let model = build(embedded());
        assert_eq!(model.entries.len(), embedded().case_studies().len());
        for entry in &model.entries {
            assert!(entry.tiles.len() <= 4);
            assert_eq!(entry.tiles.len(), entry.case.metrics.len().min(4));
        }
    }

    #[test]
    fn test_tiles_keep_declared_order_and_labels() {
        let mut case = embedded().case_studies()[0].clone();
        let keys = [
            "qualityScore",
            "roi",
            "costSavingsUSD",
            "laborHours",
            "extra",
        ];
        case.metrics = keys
            .iter()
            .map(|k| Metric {
                key: k.to_string(),
                value: "1".to_string(),
            })
            .collect();
        let e = embedded();
        let store = ContentStore::new(
            e.services().to_vec(),
            e.roles().to_vec(),
            vec![case],
            e.site_config().clone(),
            e.navigation().clone(),
            e.blog_posts().to_vec(),
        );

        let labels: Vec<String> = build(&store).entries[0]
            .tiles
            .iter()
            .map(|t| t.label.clone())
            .collect();
        assert_eq!(
            labels,
            vec!["quality Score", "roi", "cost Savings U S D", "labor Hours"]
        );
    }

    #[test]
    fn test_aggregates() {
        let metrics: Vec<&str> = AGGREGATE_RESULTS.iter().map(|a| a.metric).collect();
        assert_eq!(metrics, vec!["40%", "60%", "95%"]);
    }
}
