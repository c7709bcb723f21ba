use contracts::content::{ContentStore, Service};

/// Service with its 1-based position on the page
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceEntry {
    pub number: usize,
    pub service: Service,
}

/// Sidebar link to a service card on the same page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickNavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServicesModel {
    pub entries: Vec<ServiceEntry>,
    pub quick_nav: Vec<QuickNavLink>,
}

pub fn build(store: &ContentStore) -> ServicesModel {
    let services = store.services();

    ServicesModel {
        entries: services
            .iter()
            .enumerate()
            .map(|(i, service)| ServiceEntry {
                number: i + 1,
                service: service.clone(),
            })
            .collect(),
        quick_nav: services
            .iter()
            .map(|service| QuickNavLink {
                label: service.title.clone(),
                href: service.anchor(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::content::embedded;

    #[test]
    fn test_page_model_is_idempotent() {
        assert_eq!(build(embedded()), build(embedded()));
    }

    #[test]
    fn test_entries_numbered_from_one_in_order() {
        let model = build(embedded());
        let services = embedded().services();

        assert_eq!(model.entries.len(), services.len());
        for (i, entry) in model.entries.iter().enumerate() {
            assert_eq!(entry.number, i + 1);
            assert_eq!(entry.service.id, services[i].id);
        }
    }

    #[test]
    fn test_quick_nav_points_at_service_anchors() {
        let model = build(embedded());
        assert_eq!(model.quick_nav.len(), model.entries.len());
        for (link, entry) in model.quick_nav.iter().zip(&model.entries) {
            assert_eq!(link.href, format!("#{}", entry.service.id));
            assert_eq!(link.label, entry.service.title);
        }
    }
}
