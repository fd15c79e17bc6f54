//! Navigation Header Component
//!
//! Horizontal header with app title, nav links, and the points balance.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_engine, use_engine_ready};

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Packs,
    Album,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Packs => "Packs",
            NavLocation::Album => "Album",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Packs => Route::Packs {},
            NavLocation::Album => Route::Album {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Navigation Header component
///
/// - Left: "Holocron" title
/// - Center: Navigation links
/// - Right: Points balance
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();

    let mut points: Signal<Option<u32>> = use_signal(|| None);

    let locations = [NavLocation::Home, NavLocation::Packs, NavLocation::Album];

    // Load the balance when the engine is ready
    use_effect(move || {
        if engine_ready() {
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    if let Ok(balance) = eng.points() {
                        points.set(Some(balance));
                    }
                }
            });
        }
    });

    rsx! {
        header { class: "nav-header",
            Link { class: "nav-title", to: Route::Home {}, "Holocron" }

            nav { class: "nav-links",
                for location in locations {
                    Link {
                        class: if location == props.current { "nav-link nav-link--active" } else { "nav-link" },
                        to: location.route(),
                        {location.display_name()}
                    }
                }
            }

            div { class: "nav-points",
                match points() {
                    Some(balance) => rsx! { span { "{balance} pts" } },
                    None => rsx! { span { class: "nav-points--loading", "..." } },
                }
            }
        }
    }
}
