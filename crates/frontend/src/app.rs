use crate::layout::Layout;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <Router>
                <Layout>
                    <AppRoutes />
                </Layout>
            </Router>
        </ConfigProvider>
    }
}
