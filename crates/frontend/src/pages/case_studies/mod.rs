mod model;
mod view;

pub use model::{build, AggregateResult, CaseEntry, CaseStudiesModel, AGGREGATE_RESULTS};
pub use view::CaseStudiesPage;
