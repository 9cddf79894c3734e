use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::PortfolioError;
use crate::reveal::state::Visibility;
use crate::reveal::watch::{VisibilitySource, Watch, WatchOptions};

/// `VisibilitySource` backed by the browser's `IntersectionObserver`.
pub struct IntersectionSource;

struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Watch for IntersectionWatch {
    fn disengage(&self) {
        self.observer.disconnect();
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl VisibilitySource for IntersectionSource {
    type Target = Element;

    fn watch(
        &self,
        target: &Element,
        options: &WatchOptions,
        mut on_change: Box<dyn FnMut(Visibility)>,
    ) -> Result<Box<dyn Watch>, PortfolioError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(Visibility::new(entry.intersection_ratio(), entry.is_intersecting()));
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut init = IntersectionObserverInit::new();
        #[allow(deprecated)]
        init.threshold(&JsValue::from_f64(options.threshold));

        // Throws when the constructor is missing (old browsers, some webviews).
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| PortfolioError::ObserverUnavailable(format!("{:?}", e)))?;
        observer.observe(target);

        Ok(Box::new(IntersectionWatch {
            observer,
            _callback: callback,
        }))
    }
}
