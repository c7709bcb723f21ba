mod model;
mod view;

pub use model::{build, BlogModel, PostCard};
pub use view::BlogPage;
