//! slugifier_core: the slug transform and the state behind the slug form.
//! No terminal or clipboard code lives here.

pub mod config;
pub mod feedback;
pub mod form;
pub mod logging;
pub mod params;
pub mod slug;
pub mod timer;

pub use form::SlugForm;
pub use params::Separator;
pub use slug::normalize;
