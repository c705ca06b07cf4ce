//! Composes the router, the navigation subscribers and the page mount.

use page_analytics::AnalyticsSink;
use thiserror::Error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::PageViewReporter;
use crate::config::AppConfig;
use crate::navigation::{
    NavigationHooks, NavigationHooksBuilder, NavigationObserver, NavigationSubscriber,
};
use crate::routes::{switch, Route};
use crate::views::Nav;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("no element matches mount point `{0}`")]
    MissingMountPoint(String),
    #[error("could not look up mount point: {0}")]
    Dom(String),
}

#[derive(Properties, PartialEq, Debug, Clone, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub basename: Option<AttrValue>,
    #[prop_or_default]
    pub hooks: NavigationHooks,
}

/// The application root: a browser-history router around [`AppShell`].
#[function_component]
pub fn App(props: &AppProps) -> Html {
    html! {
        <BrowserRouter basename={props.basename.clone()}>
            <AppShell hooks={props.hooks.clone()} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppShellProps {
    #[prop_or_default]
    pub hooks: NavigationHooks,
}

/// Everything below the router. Works under any history implementation.
#[function_component]
pub fn AppShell(props: &AppShellProps) -> Html {
    html! {
        <>
            <NavigationObserver hooks={props.hooks.clone()} />
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
        </>
    }
}

/// Builds the application once and mounts it once.
///
/// Subscribers are registered before [`AppHost::mount`], which consumes the
/// host, so every navigation (the first one included) is observed and the
/// application cannot be mounted twice.
pub struct AppHost {
    config: AppConfig,
    hooks: NavigationHooksBuilder,
}

impl AppHost {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            hooks: NavigationHooks::builder(),
        }
    }

    pub fn subscribe<S>(mut self, subscriber: S) -> Self
    where
        S: NavigationSubscriber + 'static,
    {
        self.hooks = self.hooks.subscribe(subscriber);
        self
    }

    /// Attaches a [`PageViewReporter`] for `sink` when analytics is enabled
    /// in the config; otherwise the sink is dropped.
    pub fn with_analytics<S>(self, sink: S) -> Self
    where
        S: AnalyticsSink + 'static,
    {
        if !self.config.analytics {
            log::debug!("analytics disabled, not reporting page views");
            return self;
        }
        self.subscribe(PageViewReporter::new(sink))
    }

    pub fn into_props(self) -> AppProps {
        AppProps {
            basename: self.config.basename(),
            hooks: self.hooks.build(),
        }
    }

    /// Renders the application into the element matching `selector`.
    #[cfg(feature = "csr")]
    pub fn mount(self, selector: &str) -> Result<yew::AppHandle<App>, MountError> {
        let root = gloo::utils::document()
            .query_selector(selector)
            .map_err(|e| MountError::Dom(format!("{e:?}")))?
            .ok_or_else(|| MountError::MissingMountPoint(selector.to_owned()))?;

        let props = self.into_props();
        log::info!(
            "mounting at {selector} (basename {:?}, {} navigation subscriber(s))",
            props.basename,
            props.hooks.len()
        );
        Ok(yew::Renderer::<App>::with_root_and_props(root, props).render())
    }
}
