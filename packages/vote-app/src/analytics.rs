use page_analytics::{AnalyticsSink, PageView};

use crate::navigation::NavigationSubscriber;

/// Reports one `page_view` event per completed navigation.
///
/// Sink failures are logged and dropped; navigation never waits on them.
#[derive(Debug)]
pub struct PageViewReporter<S> {
    sink: S,
}

impl<S: AnalyticsSink> PageViewReporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S: AnalyticsSink> NavigationSubscriber for PageViewReporter<S> {
    fn on_navigated(&self, path: &str, name: &str) {
        let view = PageView::new(path, name);
        if let Err(e) = view.emit(&self.sink) {
            log::debug!("dropping page view for {path}: {e}");
        }
    }
}
