//! Navigation seam between page logic and the router.

use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::rc::Rc;

pub trait Navigator {
    /// Change the URL without adding a history entry.
    fn replace(&self, url: &str);
    /// Leave the current page; adds a history entry.
    fn redirect(&self, url: &str);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn replace(&self, url: &str) {
        (**self).replace(url)
    }

    fn redirect(&self, url: &str) {
        (**self).redirect(url)
    }
}

/// `Navigator` backed by `leptos_router`.
///
/// Must be created inside a component under `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |url: &str, options: NavigateOptions| navigate(url, options)),
        }
    }
}

impl Navigator for RouterNavigator {
    fn replace(&self, url: &str) {
        log::debug!("navigate (replace) -> {}", url);
        (self.navigate)(
            url,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    }

    fn redirect(&self, url: &str) {
        log::debug!("navigate -> {}", url);
        (self.navigate)(url, NavigateOptions::default());
    }
}

#[cfg(test)]
pub mod testing {
    use super::Navigator;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NavCall {
        Replace(String),
        Redirect(String),
    }

    /// Records calls instead of navigating.
    #[derive(Default)]
    pub struct RecordingNavigator {
        pub calls: RefCell<Vec<NavCall>>,
    }

    impl RecordingNavigator {
        pub fn calls(&self) -> Vec<NavCall> {
            self.calls.borrow().clone()
        }

        pub fn last_replace(&self) -> Option<String> {
            self.calls.borrow().iter().rev().find_map(|call| match call {
                NavCall::Replace(url) => Some(url.clone()),
                NavCall::Redirect(_) => None,
            })
        }
    }

    impl Navigator for RecordingNavigator {
        fn replace(&self, url: &str) {
            self.calls.borrow_mut().push(NavCall::Replace(url.to_string()));
        }

        fn redirect(&self, url: &str) {
            self.calls.borrow_mut().push(NavCall::Redirect(url.to_string()));
        }
    }
}
