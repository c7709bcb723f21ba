use super::model::{build, PostCard};
use crate::layout::set_page_title;
use crate::shared::components::ui::{Card, LinkButton};
use crate::shared::components::{PageHero, Section, SectionBackground, SectionSize};
use crate::shared::icons::icon;
use contracts::content::embedded;
use leptos::prelude::*;

#[component]
fn PostTeaser(card: PostCard) -> impl IntoView {
    let PostCard { post, date_label } = card;
    let href = post.href();

    view! {
        <Card class="post-card">
            <div class="post-card__meta">
                <span class="badge badge--primary">{post.category}</span>
                <span class="post-card__meta-item">{icon("calendar")} {date_label}</span>
                <span class="post-card__meta-item">{icon("clock")} {post.read_time}</span>
            </div>
            <h2 class="post-card__title">
                <a href=href.clone()>{post.title}</a>
            </h2>
            <p class="post-card__excerpt">{post.excerpt}</p>
            <div class="post-card__footer">
                <span class="post-card__author">{format!("By {}", post.author)}</span>
                <a href=href class="post-card__more">
                    "Read more"
                    {icon("arrow-right")}
                </a>
            </div>
        </Card>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    set_page_title(Some("Blog"));
    let model = build(embedded());

    view! {
        <PageHero
            title="Insights & Expertise"
            lead="Practical insights on AI implementation, industry trends, and success stories from the intersection of technology and winemaking."
        />

        <Section size=SectionSize::Xl background=SectionBackground::Muted>
            <div class="blog-list">
                {model
                    .posts
                    .into_iter()
                    .map(|card| view! { <PostTeaser card=card /> })
                    .collect_view()}

                <Card class="coming-soon">
                    <h3 class="coming-soon__title">"More Content Coming Soon"</h3>
                    <p class="coming-soon__text">
                        "We're working on comprehensive guides, case study deep-dives, and technical tutorials. Subscribe to our newsletter to be notified when new content is published."
                    </p>
                    <LinkButton href="/contact">"Stay Updated"</LinkButton>
                </Card>
            </div>
        </Section>
    }
}
