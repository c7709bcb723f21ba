use crate::shared::date_utils::current_year;
use crate::shared::icons::icon;
use contracts::content::{get_navigation, get_site_config, NavItem};
use leptos::prelude::*;

#[component]
fn FooterColumn(title: &'static str, links: &'static [NavItem]) -> impl IntoView {
    view! {
        <div class="footer__column">
            <h4 class="footer__heading">{title}</h4>
            <ul class="footer__links">
                {links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href.clone() class="footer__link">
                                    {link.label.clone()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let site = get_site_config();
    let footer = &get_navigation().footer;

    view! {
        <footer class="footer">
            <div class="footer__inner container">
                <div class="footer__brand">
                    <a href="/" class="footer__logo">
                        <span class="header__logo">{site.brand.initials()}</span>
                        <span>{site.brand.name.clone()}</span>
                    </a>
                    <p class="footer__tagline">{site.brand.description.clone()}</p>
                    <div class="footer__social">
                        <a
                            href=site.social.linkedin.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn"
                        >
                            {icon("linkedin")}
                        </a>
                        <a
                            href=site.social.twitter.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Twitter"
                        >
                            {icon("twitter")}
                        </a>
                    </div>
                </div>

                <FooterColumn title="Company" links=&footer.company />
                <FooterColumn title="Resources" links=&footer.resources />

                <div class="footer__column">
                    <h4 class="footer__heading">"Contact"</h4>
                    <ul class="footer__links footer__contact">
                        <li>
                            {icon("mail")}
                            <a href=site.contact.mailto() class="footer__link">
                                {site.contact.email.clone()}
                            </a>
                        </li>
                        <li>
                            {icon("phone")}
                            <a href=site.contact.tel() class="footer__link">
                                {site.contact.phone.clone()}
                            </a>
                        </li>
                        <li>
                            {icon("map-pin")}
                            <span>{site.contact.address.clone()}</span>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer__bottom container">
                <p>{format!("© {} {}. All rights reserved.", current_year(), site.brand.name)}</p>
                <div class="footer__legal">
                    {footer
                        .legal
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href.clone() class="footer__link">
                                    {link.label.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
