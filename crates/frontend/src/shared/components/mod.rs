pub mod bullet_list;
pub mod case_study_card;
pub mod cta_section;
pub mod metric_card;
pub mod page_hero;
pub mod section;
pub mod service_card;
pub mod ui;

pub use bullet_list::BulletList;
pub use case_study_card::{metric_tiles, CaseQuote, CaseStudyCard, MetricTile, MetricTiles};
pub use cta_section::CtaSection;
pub use metric_card::MetricCard;
pub use page_hero::PageHero;
pub use section::{Section, SectionBackground, SectionHeading, SectionSize};
pub use service_card::ServiceCard;
