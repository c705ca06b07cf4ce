//! Post-navigation notification.
//!
//! [`NavigationObserver`] sits inside the router and, after every completed
//! navigation (the initial page load included), calls each registered
//! [`NavigationSubscriber`] once with the resolved path and route name.

use std::fmt;
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Receives a call after each completed navigation.
pub trait NavigationSubscriber {
    fn on_navigated(&self, path: &str, name: &str);
}

impl<F> NavigationSubscriber for F
where
    F: Fn(&str, &str),
{
    fn on_navigated(&self, path: &str, name: &str) {
        self(path, name)
    }
}

/// The subscribers attached to a router, fixed once the app is mounted.
#[derive(Clone)]
pub struct NavigationHooks {
    subscribers: Rc<[Rc<dyn NavigationSubscriber>]>,
}

impl NavigationHooks {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn builder() -> NavigationHooksBuilder {
        NavigationHooksBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Notifies every subscriber, in registration order, that `route` was
    /// reached through `path`.
    ///
    /// Known routes report their own path; the not-found route reports the
    /// path that was requested.
    pub fn completed(&self, path: &str, route: Route) {
        let path = match route.entry() {
            Some(entry) => entry.path,
            None => path,
        };
        let name = route.name();
        log::debug!("navigated to {path} ({name})");

        for subscriber in self.subscribers.iter() {
            subscriber.on_navigated(path, name);
        }
    }
}

impl Default for NavigationHooks {
    fn default() -> Self {
        NavigationHooksBuilder::default().build()
    }
}

impl PartialEq for NavigationHooks {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.subscribers, &other.subscribers)
    }
}

impl fmt::Debug for NavigationHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationHooks")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[derive(Default)]
pub struct NavigationHooksBuilder {
    subscribers: Vec<Rc<dyn NavigationSubscriber>>,
}

impl NavigationHooksBuilder {
    pub fn subscribe<S>(mut self, subscriber: S) -> Self
    where
        S: NavigationSubscriber + 'static,
    {
        self.subscribers.push(Rc::new(subscriber));
        self
    }

    pub fn subscribe_rc(mut self, subscriber: Rc<dyn NavigationSubscriber>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    pub fn build(self) -> NavigationHooks {
        NavigationHooks {
            subscribers: self.subscribers.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationObserverProps {
    pub hooks: NavigationHooks,
}

/// The route the router is showing for the current location, with the
/// requested path (basename stripped).
///
/// The route comes from [`use_route`], the same lookup [`Switch`] renders
/// from, so reports always match what is on screen.
#[hook]
pub(crate) fn use_navigation_target() -> Option<(String, Route)> {
    let location = use_location();
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    location.map(|location| {
        let basename = navigator.as_ref().and_then(|n| n.basename());
        (strip_basename(location.path(), basename).to_owned(), route)
    })
}

/// Renders nothing; reports each location change to `hooks`.
#[function_component]
pub fn NavigationObserver(props: &NavigationObserverProps) -> Html {
    let location = use_location();
    let target = use_navigation_target();

    {
        let hooks = props.hooks.clone();
        use_effect_with(location, move |_| {
            if let Some((path, route)) = target {
                hooks.completed(&path, route);
            }
        });
    }

    Html::default()
}

/// Drops `basename` from `path`; the bare basename is left as requested.
fn strip_basename<'a>(path: &'a str, basename: Option<&str>) -> &'a str {
    match basename {
        Some(base) if !base.is_empty() => match path.strip_prefix(base) {
            Some(rest) if rest.starts_with('/') => rest,
            _ => path,
        },
        _ => path,
    }
}
