use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionBackground {
    #[default]
    Default,
    Muted,
    Primary,
    /// Wine gradient with white text
    Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionSize {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
}

impl SectionBackground {
    fn as_str(&self) -> &'static str {
        match self {
            SectionBackground::Default => "default",
            SectionBackground::Muted => "muted",
            SectionBackground::Primary => "primary",
            SectionBackground::Gradient => "gradient",
        }
    }
}

impl SectionSize {
    fn as_str(&self) -> &'static str {
        match self {
            SectionSize::Sm => "sm",
            SectionSize::Md => "md",
            SectionSize::Lg => "lg",
            SectionSize::Xl => "xl",
        }
    }
}

pub fn section_class(background: SectionBackground, size: SectionSize) -> String {
    format!("section section--{} section--{}", background.as_str(), size.as_str())
}

/// Page section with consistent spacing and background
#[component]
pub fn Section(
    #[prop(optional)]
    background: SectionBackground,
    #[prop(optional)]
    size: SectionSize,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: Option<String>,
    /// Element id, used as an in-page anchor
    #[prop(optional, into)]
    id: Option<String>,
    children: Children,
) -> impl IntoView {
    let classes = format!("{} {}", section_class(background, size), class.unwrap_or_default());

    view! {
        <section class=classes id=id>
            <div class="container">
                {children()}
            </div>
        </section>
    }
}

/// Centered heading block used at the top of most sections
#[component]
pub fn SectionHeading(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2 class="section-heading__title">{title}</h2>
            {subtitle.map(|s| view! { <p class="section-heading__subtitle">{s}</p> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_class_defaults() {
        assert_eq!(
            section_class(SectionBackground::default(), SectionSize::default()),
            "section section--default section--lg"
        );
    }

    #[test]
    fn test_section_class_muted_xl() {
        assert_eq!(
            section_class(SectionBackground::Muted, SectionSize::Xl),
            "section section--muted section--xl"
        );
    }
}
