use std::rc::Rc;

use yew::prelude::*;

use crate::utils::current_query_params;

/// Ambient query parameters, captured once per mount. Tracking and
/// deep-link parameters ride along into submissions and redirects.
#[hook]
pub fn use_query_params() -> Rc<Vec<(String, String)>> {
    use_memo((), |_| current_query_params())
}
