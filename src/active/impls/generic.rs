use crate::active::{visible_controls, Controls, Menu, PageRenderer};

/// A menu that only offers navigation and stopping.
pub struct GenericMenu<R> {
    renderer: R,
}

impl<R> GenericMenu<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }
}

impl<R: PageRenderer> Menu for GenericMenu<R> {
    type Renderer = R;

    fn renderer(&self) -> &Self::Renderer {
        &self.renderer
    }

    fn controls(&self, max_pages: Option<usize>) -> Controls {
        visible_controls(max_pages) | Controls::STOP
    }
}
