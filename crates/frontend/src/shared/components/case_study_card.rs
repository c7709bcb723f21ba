use contracts::content::CaseStudy;
use leptos::prelude::*;

/// Metric prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricTile {
    pub value: String,
    pub label: String,
}

/// Up to four metrics of a case study, labels derived from the metric keys
pub fn metric_tiles(case: &CaseStudy) -> Vec<MetricTile> {
    case.displayed_metrics()
        .iter()
        .map(|m| MetricTile {
            value: m.value.clone(),
            label: m.label(),
        })
        .collect()
}

#[component]
pub fn MetricTiles(tiles: Vec<MetricTile>) -> impl IntoView {
    view! {
        <div class="metric-tiles">
            {tiles
                .into_iter()
                .map(|t| view! {
                    <div class="metric-tiles__item">
                        <div class="metric-tiles__value">{t.value}</div>
                        <div class="metric-tiles__label">{t.label}</div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn CaseQuote(#[prop(into)] quote: String, #[prop(into)] client: String) -> impl IntoView {
    view! {
        <blockquote class="case-quote">
            <p class="case-quote__text">{format!("\u{201c}{}\u{201d}", quote)}</p>
            <footer class="case-quote__author">{format!("\u{2014} {}", client)}</footer>
        </blockquote>
    }
}

/// Full case study: challenge, approach, impact with metrics, quote
#[component]
pub fn CaseStudyCard(case: CaseStudy, tiles: Vec<MetricTile>) -> impl IntoView {
    let CaseStudy {
        title,
        client,
        problem,
        approach,
        impact,
        quote,
        category,
        description,
        ..
    } = case;

    view! {
        <article class="card case-study-card">
            <div class="card__header">
                <div class="case-study-card__meta">
                    <span class="badge badge--primary">{category}</span>
                    <span class="case-study-card__client">{client.clone()}</span>
                </div>
                <h2 class="case-study-card__title">{title}</h2>
                {description.map(|d| view! { <p class="case-study-card__description">{d}</p> })}
            </div>
            <div class="card__content">
                <div class="case-study-card__block">
                    <h3 class="case-study-card__heading case-study-card__heading--challenge">"Challenge"</h3>
                    <p>{problem}</p>
                </div>
                <div class="case-study-card__block">
                    <h3 class="case-study-card__heading case-study-card__heading--approach">"Approach"</h3>
                    <p>{approach}</p>
                </div>
                <div class="case-study-card__block">
                    <h3 class="case-study-card__heading case-study-card__heading--impact">"Impact"</h3>
                    <p>{impact}</p>
                    <MetricTiles tiles=tiles />
                </div>
                <CaseQuote quote=quote client=client />
            </div>
        </article>
    }
}
