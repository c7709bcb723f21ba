use leptos::prelude::*;

/// Icon drawn from stroke paths on a 24x24 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDef {
    pub name: &'static str,
    pub paths: &'static [&'static str],
}

/// Used when neither the requested name nor the fallback is known
pub const DEFAULT_ICON: IconDef = IconDef {
    name: "circle",
    paths: &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 8v4l3 3"],
};

const ICONS: &[IconDef] = &[
    // Service icons
    IconDef {
        name: "brain-circuit",
        paths: &["M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"],
    },
    IconDef {
        name: "trending-up",
        paths: &["M13 7h8m0 0v8m0-8l-8 8-4-4-6 6"],
    },
    IconDef {
        name: "message-circle",
        paths: &["M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z"],
    },
    IconDef {
        name: "map",
        paths: &["M9 20l-5.447-2.724A1 1 0 013 16.382V5.618a1 1 0 011.447-.894L9 7m0 13l6-3m-6 3V7m6 10l4.553 2.276A1 1 0 0021 18.382V7.618a1 1 0 00-.553-.894L15 4m0 13V4m0 0L9 7"],
    },
    IconDef {
        name: "database",
        paths: &["M4 7v10c0 2.21 3.582 4 8 4s8-1.79 8-4V7M4 7c0 2.21 3.582 4 8 4s8-1.79 8-4M4 7c0-2.21 3.582-4 8-4s8 1.79 8 4m0 5c0 2.21-3.582 4-8 4s-8-1.79-8-4"],
    },
    // Why-it-works icons
    IconDef {
        name: "bar-chart-3",
        paths: &["M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z"],
    },
    IconDef {
        name: "cpu",
        paths: &["M9 3v2m6-2v2M9 19v2m6-2v2M5 9H3m2 6H3m18-6h-2m2 6h-2M7 19h10a2 2 0 002-2V7a2 2 0 00-2-2H7a2 2 0 00-2 2v10a2 2 0 002 2zM9 9h6v6H9V9z"],
    },
    IconDef {
        name: "users",
        paths: &["M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197m13.5-9a3 3 0 11-6 0 3 3 0 016 0z"],
    },
    // Values
    IconDef {
        name: "shield",
        paths: &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
    },
    IconDef {
        name: "dollar-sign",
        paths: &["M12 1v22", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
    },
    IconDef {
        name: "zap",
        paths: &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
    },
    // UI
    IconDef {
        name: "arrow-right",
        paths: &["M5 12h14", "M12 5l7 7-7 7"],
    },
    IconDef {
        name: "sparkles",
        paths: &["M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9z", "M19 3v4", "M21 5h-4"],
    },
    IconDef {
        name: "menu",
        paths: &["M4 6h16", "M4 12h16", "M4 18h16"],
    },
    IconDef {
        name: "x",
        paths: &["M18 6L6 18", "M6 6l12 12"],
    },
    IconDef {
        name: "check-circle",
        paths: &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4L12 14.01l-3-3"],
    },
    IconDef {
        name: "external-link",
        paths: &["M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6", "M15 3h6v6", "M10 14L21 3"],
    },
    IconDef {
        name: "calendar",
        paths: &["M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "M16 2v4", "M8 2v4", "M3 10h18"],
    },
    IconDef {
        name: "clock",
        paths: &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 6v6l4 2"],
    },
    // Contact
    IconDef {
        name: "mail",
        paths: &["M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "M22 6l-10 7L2 6"],
    },
    IconDef {
        name: "phone",
        paths: &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"],
    },
    IconDef {
        name: "map-pin",
        paths: &["M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z", "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z"],
    },
    IconDef {
        name: "linkedin",
        paths: &["M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z", "M2 9h4v12H2z", "M4 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4z"],
    },
    IconDef {
        name: "twitter",
        paths: &["M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"],
    },
];

pub fn lookup(name: &str) -> Option<&'static IconDef> {
    ICONS.iter().find(|def| def.name == name)
}

/// Resolves `name`, then `fallback`, then [`DEFAULT_ICON`]
pub fn resolve(name: &str, fallback: &str) -> &'static IconDef {
    lookup(name).or_else(|| lookup(fallback)).unwrap_or(&DEFAULT_ICON)
}

fn render(def: &'static IconDef, class: String) -> AnyView {
    view! {
        <svg
            class=class
            width="20"
            height="20"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {def.paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}

/// Icon by name with the default fallback
pub fn icon(name: &str) -> AnyView {
    render(resolve(name, DEFAULT_ICON.name), "icon".to_string())
}

/// Icon component with an explicit fallback for data-driven names
#[component]
pub fn Icon(
    #[prop(into)]
    name: String,
    /// Icon used when `name` is not in the table
    #[prop(optional)]
    fallback: Option<&'static str>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let def = resolve(&name, fallback.unwrap_or(DEFAULT_ICON.name));
    render(def, format!("icon {}", class.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icon_resolves_to_itself() {
        assert_eq!(resolve("database", "cpu").name, "database");
    }

    #[test]
    fn test_unknown_icon_uses_fallback() {
        assert_eq!(resolve("rocket", "brain-circuit").name, "brain-circuit");
        assert_eq!(resolve("rocket", "cpu").name, "cpu");
    }

    #[test]
    fn test_unknown_fallback_uses_default() {
        assert_eq!(resolve("rocket", "also-missing"), &DEFAULT_ICON);
    }

    #[test]
    fn test_icon_names_unique() {
        let mut names: Vec<&str> = ICONS.iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ICONS.len());
    }

    #[test]
    fn test_embedded_content_icons_are_known() {
        for service in contracts::content::get_services() {
            assert!(lookup(&service.icon).is_some(), "{}", service.icon);
        }
        for item in &contracts::content::get_site_config().why_it_works {
            assert!(lookup(&item.icon).is_some(), "{}", item.icon);
        }
    }
}
