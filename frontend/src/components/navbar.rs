use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::events::AnalyticsEvent;
use crate::analytics::tracker::{track, use_analytics};
use crate::config;
use crate::utils::listener::Subscription;
use crate::utils::timing::{now_ms, Debounce, Throttle};
use crate::Route;

const MENU_ID: &str = "primary-navigation";

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD_PX
}

pub fn is_desktop_width(width: f64) -> bool {
    width >= config::MOBILE_BREAKPOINT_PX
}

pub fn header_classes(scrolled: bool, menu_open: bool) -> Vec<&'static str> {
    let mut classes = vec!["site-header"];
    if scrolled {
        classes.push("scrolled");
    }
    if menu_open {
        classes.push("menu-open");
    }
    classes
}

fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[function_component]
pub fn Navbar() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| is_scrolled(current_scroll_y()));
    let analytics = use_analytics();

    // Header state follows scroll position, throttled. A trailing update
    // catches the final position when the last events of a burst were dropped.
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let throttle = Rc::new(RefCell::new(Throttle::new(config::SCROLL_THROTTLE_MS)));
                let settle = {
                    let throttle = throttle.clone();
                    let scrolled = scrolled.clone();
                    Debounce::new(config::SCROLL_THROTTLE_MS as u32, move || {
                        if throttle.borrow_mut().take_trailing() {
                            scrolled.set(is_scrolled(current_scroll_y()));
                        }
                    })
                };
                let subscription = window().and_then(|win| {
                    Subscription::new(&win, "scroll", move |_: Event| {
                        if throttle.borrow_mut().allow(now_ms()) {
                            scrolled.set(is_scrolled(current_scroll_y()));
                        }
                        settle.call();
                    })
                    .map_err(|e| log::warn!("Failed to watch scrolling: {:?}", e))
                    .ok()
                });
                move || drop(subscription)
            },
            (),
        );
    }

    // Escape closes the menu; so does growing past the mobile breakpoint.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let mut subscriptions = Vec::new();
                if let Some(win) = window() {
                    if let Some(document) = win.document() {
                        let menu_open = menu_open.clone();
                        match Subscription::new(&document, "keydown", move |e: Event| {
                            let is_escape = e
                                .dyn_ref::<KeyboardEvent>()
                                .map(|k| k.key() == "Escape")
                                .unwrap_or(false);
                            if is_escape {
                                menu_open.set(false);
                            }
                        }) {
                            Ok(sub) => subscriptions.push(sub),
                            Err(e) => log::warn!("Failed to watch keyboard: {:?}", e),
                        }
                    }

                    let debounce = Debounce::new(config::RESIZE_DEBOUNCE_MS, move || {
                        let width = window()
                            .and_then(|w| w.inner_width().ok())
                            .and_then(|v| v.as_f64())
                            .unwrap_or(0.0);
                        if is_desktop_width(width) {
                            menu_open.set(false);
                        }
                    });
                    match Subscription::new(&win, "resize", move |_: Event| debounce.call()) {
                        Ok(sub) => subscriptions.push(sub),
                        Err(e) => log::warn!("Failed to watch resizing: {:?}", e),
                    }
                }
                move || drop(subscriptions)
            },
            (),
        );
    }

    // Body scroll lock while the mobile menu is open.
    {
        let open = *menu_open;
        use_effect_with_deps(
            move |open| {
                let body = window().and_then(|w| w.document()).and_then(|d| d.body());
                if let Some(body) = &body {
                    let _ = body.class_list().toggle_with_force("nav-open", *open);
                }
                move || {
                    if let Some(body) = body {
                        let _ = body.class_list().remove_1("nav-open");
                    }
                }
            },
            open,
        );
    }

    let toggle = {
        let menu_open = menu_open.clone();
        let analytics = analytics.clone();
        Callback::from(move |_: MouseEvent| {
            let open = !*menu_open;
            menu_open.set(open);
            track(&analytics, AnalyticsEvent::NavMenuToggled { open });
        })
    };

    let close = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let quote_click = {
        let close = close.clone();
        Callback::from(move |e: MouseEvent| {
            track(&analytics, AnalyticsEvent::cta("Get a Free Quote", "header"));
            close.emit(e);
        })
    };

    let links = [
        (Route::Home, "Home"),
        (Route::Services, "Services"),
        (Route::Contact, "Contact"),
    ];

    html! {
        <header class={classes!(header_classes(*scrolled, *menu_open))}>
            <div class="nav-container">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <i class="fas fa-spray-can-sparkles"></i>{config::BUSINESS_NAME}
                </Link<Route>>
                <button
                    class="nav-toggle"
                    aria-controls={MENU_ID}
                    aria-expanded={(*menu_open).to_string()}
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    onclick={toggle}
                >
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                </button>
                <nav id={MENU_ID} class={classes!("nav-menu", (*menu_open).then_some("open"))}>
                    <ul>
                        { for links.into_iter().map(|(route, label)| html! {
                            <li onclick={close.clone()}>
                                <Link<Route> to={route} classes="nav-link">{label}</Link<Route>>
                            </li>
                        }) }
                        <li onclick={quote_click}>
                            <Link<Route> to={Route::Contact} classes="nav-cta">{"Get a Free Quote"}</Link<Route>>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_turns_solid_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn header_classes_reflect_state() {
        assert_eq!(header_classes(false, false), vec!["site-header"]);
        assert_eq!(header_classes(true, false), vec!["site-header", "scrolled"]);
        assert_eq!(
            header_classes(true, true),
            vec!["site-header", "scrolled", "menu-open"]
        );
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(!is_desktop_width(767.0));
        assert!(is_desktop_width(768.0));
    }

    #[test]
    fn flick_back_to_top_settles_unscrolled() {
        let mut throttle = Throttle::new(config::SCROLL_THROTTLE_MS);
        let events = [(0.0, 300.0), (60.0, 0.0)];
        let mut scrolled = false;
        for (now, y) in events {
            if throttle.allow(now) {
                scrolled = is_scrolled(y);
            }
        }
        assert!(scrolled);

        // Scrolling has gone quiet at the top.
        let (_, resting_y) = events[events.len() - 1];
        if throttle.take_trailing() {
            scrolled = is_scrolled(resting_y);
        }
        assert!(!scrolled);
        assert_eq!(header_classes(scrolled, false), vec!["site-header"]);
    }
}
