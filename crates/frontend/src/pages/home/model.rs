use crate::shared::components::{metric_tiles, MetricTile};
use contracts::content::{CaseStudy, ContentStore, Service, WhyItWorksItem};

/// Partner names shown in the trust bar
pub const TRUSTED_BY: &[&str] = &[
    "Premium Estate",
    "Heritage Vineyards",
    "Coastal Cellars",
    "Mountain View Winery",
];

/// First case study with its displayed metrics
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedCase {
    pub case: CaseStudy,
    pub tiles: Vec<MetricTile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeModel {
    pub tagline: String,
    pub description: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub services: Vec<Service>,
    pub why_it_works: Vec<WhyItWorksItem>,
    /// None when there are no case studies
    pub featured: Option<FeaturedCase>,
}

pub fn build(store: &ContentStore) -> HomeModel {
    let site = store.site_config();

    HomeModel {
        tagline: site.brand.tagline.clone(),
        description: site.brand.description.clone(),
        cta_primary: site.cta.primary.clone(),
        cta_secondary: site.cta.secondary.clone(),
        services: store.services().to_vec(),
        why_it_works: site.why_it_works.clone(),
        featured: store.case_studies().first().map(|case| FeaturedCase {
            tiles: metric_tiles(case),
            case: case.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::content::embedded;

    #[test]
    fn test_page_model_is_idempotent() {
        assert_eq!(build(embedded()), build(embedded()));
    }

    #[test]
    fn test_shows_all_services_in_order() {
        let model = build(embedded());
        assert_eq!(model.services.as_slice(), embedded().services());
    }

    #[test]
    fn test_featured_case_is_first_with_capped_metrics() {
        let model = build(embedded());
        let featured = model.featured.expect("embedded data has case studies");
        let first = &embedded().case_studies()[0];

        assert_eq!(featured.case.id, first.id);
        assert!(featured.tiles.len() <= 4);
        assert_eq!(featured.tiles.len(), first.displayed_metrics().len());
        assert_eq!(featured.tiles[0].value, first.metrics[0].value);
    }

    #[test]
    fn test_no_case_studies_no_featured() {
        let store = ContentStore::new(
            embedded().services().to_vec(),
            embedded().roles().to_vec(),
            vec![],
            embedded().site_config().clone(),
            embedded().navigation().clone(),
            embedded().blog_posts().to_vec(),
        );
        assert!(build(&store).featured.is_none());
    }
}
