mod model;
mod view;

pub use model::{build, FeaturedCase, HomeModel, TRUSTED_BY};
pub use view::HomePage;
