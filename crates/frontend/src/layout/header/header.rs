use super::MobileMenu;
use crate::shared::components::ui::LinkButton;
use crate::shared::icons::icon;
use contracts::content::{get_navigation, get_site_config, nav_links, NavLink};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

fn link_class(base: &'static str, active: bool) -> String {
    if active {
        format!("{} {}--active", base, base)
    } else {
        base.to_string()
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let site = get_site_config();
    let nav = get_navigation();
    let menu = MobileMenu::new();
    let pathname = use_location().pathname;

    // Меню закрывается при любой смене маршрута
    Effect::new(move |_| pathname.with(|path| menu.route_changed(path)));

    let desktop_links = move || nav_links(nav.desktop_items(), &pathname.get());
    let mobile_links = move || nav_links(nav.mobile_items(), &pathname.get());

    view! {
        <header class="header">
            <div class="header__inner container">
                <a href="/" class="header__brand">
                    <span class="header__logo">{site.brand.initials()}</span>
                    <span class="header__name">{site.brand.name.clone()}</span>
                </a>

                <nav class="header__nav" aria-label="Main">
                    <For
                        each=desktop_links
                        key=|link| (link.href.clone(), link.active)
                        children=|link: NavLink| {
                            view! {
                                <a href=link.href class=link_class("header__link", link.active)>
                                    {link.label}
                                </a>
                            }
                        }
                    />
                </nav>

                <div class="header__actions">
                    <LinkButton href="/contact" size="sm">
                        {site.cta.primary.clone()}
                    </LinkButton>
                </div>

                <button
                    class="header__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.is_open().to_string()
                    on:click=move |_| menu.toggle()
                >
                    {move || if menu.is_open() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || menu.is_open()>
                <nav class="header__mobile" aria-label="Mobile">
                    <For
                        each=mobile_links
                        key=|link| (link.href.clone(), link.active)
                        children=move |link: NavLink| {
                            view! {
                                <a
                                    href=link.href
                                    class=link_class("header__mobile-link", link.active)
                                    on:click=move |_| menu.close()
                                >
                                    {link.label}
                                </a>
                            }
                        }
                    />
                    <div class="header__mobile-cta" on:click=move |_| menu.close()>
                        <LinkButton href="/contact">{site.cta.primary.clone()}</LinkButton>
                    </div>
                </nav>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_class() {
        assert_eq!(link_class("header__link", false), "header__link");
        assert_eq!(
            link_class("header__link", true),
            "header__link header__link--active"
        );
    }
}
