use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    PageView { path: String },
    CtaClick { label: String, location: String },
    ContactSubmitted { service: String },
    SliderUsed { label: String },
    NavMenuToggled { open: bool },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageView { .. } => "page_view",
            AnalyticsEvent::CtaClick { .. } => "cta_click",
            AnalyticsEvent::ContactSubmitted { .. } => "contact_submitted",
            AnalyticsEvent::SliderUsed { .. } => "slider_used",
            AnalyticsEvent::NavMenuToggled { .. } => "nav_menu_toggled",
        }
    }

    pub fn cta(label: &str, location: &str) -> Self {
        AnalyticsEvent::CtaClick {
            label: label.to_string(),
            location: location.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn events_serialize_with_event_tag() {
        let event = AnalyticsEvent::PageView { path: "/contact".to_string() };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"event": "page_view", "path": "/contact"})
        );

        let event = AnalyticsEvent::cta("Get a Quote", "hero");
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"event": "cta_click", "label": "Get a Quote", "location": "hero"})
        );

        let event = AnalyticsEvent::NavMenuToggled { open: true };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"event": "nav_menu_toggled", "open": true})
        );
    }

    #[test]
    fn name_matches_serialized_tag() {
        let events = [
            AnalyticsEvent::PageView { path: "/".into() },
            AnalyticsEvent::cta("Call", "footer"),
            AnalyticsEvent::ContactSubmitted { service: "deep".into() },
            AnalyticsEvent::SliderUsed { label: "Kitchen".into() },
            AnalyticsEvent::NavMenuToggled { open: false },
        ];
        for event in events {
            let value = serde_json::to_value(&event).unwrap();
            assert_eq!(value["event"].as_str(), Some(event.name()));
        }
    }
}
