use std::rc::Rc;

use yew::prelude::*;

use crate::analytics::events::AnalyticsEvent;
use crate::config;

/// Where tracked events end up. Transport is the sink's business.
pub trait AnalyticsSink {
    fn report(&self, event: &AnalyticsEvent);
}

/// Writes every event as JSON to the log.
pub struct ConsoleSink;

impl AnalyticsSink for ConsoleSink {
    fn report(&self, event: &AnalyticsEvent) {
        match serde_json::to_string(event) {
            Ok(json) => log::info!("analytics {}", json),
            Err(e) => log::warn!("Failed to serialize {} event: {}", event.name(), e),
        }
    }
}

pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn report(&self, _event: &AnalyticsEvent) {}
}

/// Cloneable handle passed to components through context.
#[derive(Clone)]
pub struct Analytics {
    sink: Rc<dyn AnalyticsSink>,
}

impl PartialEq for Analytics {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sink, &other.sink)
    }
}

impl Default for Analytics {
    fn default() -> Self {
        if config::analytics_enabled() {
            Self::new(ConsoleSink)
        } else {
            Self::new(NullSink)
        }
    }
}

impl Analytics {
    pub fn new<S: AnalyticsSink + 'static>(sink: S) -> Self {
        Self { sink: Rc::new(sink) }
    }

    pub fn track(&self, event: AnalyticsEvent) {
        self.sink.report(&event);
    }
}

/// Reports through the app's analytics context when one is mounted.
pub fn track(analytics: &Option<Analytics>, event: AnalyticsEvent) {
    if let Some(analytics) = analytics {
        analytics.track(event);
    }
}

#[hook]
pub fn use_analytics() -> Option<Analytics> {
    use_context::<Analytics>()
}
