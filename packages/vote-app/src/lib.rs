//! A small voting site: three routes, optional page-view reporting, and the
//! bootstrap that mounts it at `#app`.

mod analytics;
mod config;
mod host;
mod navigation;
mod routes;
mod views;

pub use analytics::PageViewReporter;
pub use config::{AppConfig, MOUNT_POINT};
pub use host::{App, AppHost, AppProps, AppShell, MountError};
pub use navigation::{
    NavigationHooks, NavigationHooksBuilder, NavigationObserver, NavigationSubscriber,
};
pub use routes::{resolve, switch, Route, RouteEntry, ROUTES};
pub use views::{About, Home, Nav, NotFound, Vote};
