//! Product catalog page
//!
//! MVVM split:
//! - view_model.rs: reactive wrapper around the catalog controller, commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductCatalogPage;
pub use view_model::ProductCatalogVm;
