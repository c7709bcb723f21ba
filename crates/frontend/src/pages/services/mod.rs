mod model;
mod view;

pub use model::{build, QuickNavLink, ServiceEntry, ServicesModel};
pub use view::ServicesPage;
