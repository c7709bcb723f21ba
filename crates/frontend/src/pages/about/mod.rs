mod model;
mod view;

pub use model::{build, expertise_columns, AboutModel, Founder, Value, FOUNDER, VALUES};
pub use view::AboutPage;
