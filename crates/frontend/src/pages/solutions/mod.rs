mod model;
mod view;

pub use model::{build, ImplementationStep, RolePanel, SolutionsModel, IMPLEMENTATION_STEPS};
pub use view::SolutionsPage;
