//! The fixed route table.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::views::{About, Home, NotFound, Vote};

#[derive(Routable, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/vote")]
    Vote,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Symbolic name of the route, as reported to navigation subscribers.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Vote => "vote",
            Route::About => "about",
            Route::NotFound => "not-found",
        }
    }

    /// The table entry for this route, `None` for the not-found state.
    pub fn entry(&self) -> Option<&'static RouteEntry> {
        ROUTES.iter().find(|entry| entry.route == *self)
    }
}

/// A path pattern bound to a named view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub route: Route,
}

pub static ROUTES: [RouteEntry; 3] = [
    RouteEntry {
        path: "/",
        name: "home",
        route: Route::Home,
    },
    RouteEntry {
        path: "/vote",
        name: "vote",
        route: Route::Vote,
    },
    RouteEntry {
        path: "/about",
        name: "about",
        route: Route::About,
    },
];

/// Looks `path` up with the router's matcher.
///
/// Returns `None` when the path falls through to the not-found state.
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    Route::recognize(path).and_then(|route| route.entry())
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Vote => html! { <Vote /> },
        Route::About => html! { <About /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
