use dioxus::prelude::*;

use crate::api::ApiError;

/// Signal bundle for one API call: a loading flag plus the settled result.
pub struct ApiState<T: Clone + 'static> {
    pub loading: Signal<bool>,
    pub data: Signal<Option<Result<T, ApiError>>>,
}

// Copy like the signals it wraps, so effects and spawned futures can
// capture it without moving it out of the component body.
impl<T: Clone + 'static> Copy for ApiState<T> {}

impl<T: Clone + 'static> Clone for ApiState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + 'static> ApiState<T> {
    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn error(&self) -> Option<ApiError> {
        self.data.read().as_ref()?.as_ref().err().cloned()
    }

    pub fn value(&self) -> Option<T> {
        self.data.read().as_ref()?.as_ref().ok().cloned()
    }

    pub fn has_data(&self) -> bool {
        self.data.read().is_some()
    }
}

pub fn use_api_state<T: Clone + 'static>() -> ApiState<T> {
    ApiState {
        loading: use_signal(|| true),
        data: use_signal(|| None),
    }
}
