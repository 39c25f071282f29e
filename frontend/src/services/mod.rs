//! Network calls made by the page: the two workflow endpoints and the
//! static induction fragment.

pub mod content;
pub mod site_data;
pub mod submission;
