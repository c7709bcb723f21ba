use crate::pages::{
    about::AboutPage, blog::BlogPage, case_studies::CaseStudiesPage, contact::ContactPage,
    home::HomePage, not_found::NotFoundPage, services::ServicesPage, solutions::SolutionsPage,
};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/about") view=AboutPage />
            <Route path=path!("/services") view=ServicesPage />
            <Route path=path!("/solutions") view=SolutionsPage />
            <Route path=path!("/case-studies") view=CaseStudiesPage />
            <Route path=path!("/blog") view=BlogPage />
            <Route path=path!("/contact") view=ContactPage />
        </Routes>
    }
}
