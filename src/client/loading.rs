//! Loading flag guard
//!
//! `LoadingGuard` sets `loading` when created and resets it when dropped, so
//! every exit from a submission leaves the form usable again.

use crate::client::state::FormState;
use std::ops::{Deref, DerefMut};

pub(crate) struct LoadingGuard<'a> {
    state: &'a mut FormState,
}

impl<'a> LoadingGuard<'a> {
    pub(crate) fn engage(state: &'a mut FormState) -> Self {
        state.set_loading(true);
        Self { state }
    }
}

impl Deref for LoadingGuard<'_> {
    type Target = FormState;

    fn deref(&self) -> &FormState {
        self.state
    }
}

impl DerefMut for LoadingGuard<'_> {
    fn deref_mut(&mut self) -> &mut FormState {
        self.state
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.set_loading(false);
    }
}
