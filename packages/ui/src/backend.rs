use std::ops::Deref;
use std::rc::Rc;

use api::Backend;
use dioxus::prelude::*;

/// The backend every page submits through, shared via context.
#[derive(Clone)]
pub struct BackendHandle(Rc<dyn Backend>);

impl BackendHandle {
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self(Rc::new(backend))
    }
}

impl Deref for BackendHandle {
    type Target = dyn Backend;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[component]
pub fn BackendProvider(backend: BackendHandle, children: Element) -> Element {
    use_context_provider(|| backend.clone());
    rsx! {
        {children}
    }
}

pub fn use_backend() -> BackendHandle {
    use_context::<BackendHandle>()
}
