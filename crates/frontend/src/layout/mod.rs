pub mod footer;
pub mod header;

use contracts::content::get_site_config;
use leptos::prelude::*;

/// Site shell: header, routed page content, footer.
///
/// ```text
/// +------------------------------------------+
/// |  Header (logo, nav, CTA / mobile menu)   |
/// +------------------------------------------+
/// |                 <main>                   |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <header::Header />
            <main class="site__main">{children()}</main>
            <footer::Footer />
        </div>
    }
}

/// Sets `document.title` for the current page. `None` gives the site title.
pub fn set_page_title(page: Option<&str>) {
    let title = get_site_config().page_title(page);
    match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document.set_title(&title),
        None => log::warn!("No document, page title not set: {}", title),
    }
}
