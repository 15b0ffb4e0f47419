use std::rc::Rc;
use yew::prelude::*;

use crate::models::palette::StateColorRegistry;

/// Color registry provided at the app root, or the standard one when a
/// component is mounted without a provider.
#[hook]
pub fn use_palette() -> Rc<StateColorRegistry> {
    use_context::<Rc<StateColorRegistry>>()
        .unwrap_or_else(|| Rc::new(StateColorRegistry::standard()))
}
