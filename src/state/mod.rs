mod form;
mod persistence;

pub use form::DietForm;
pub use persistence::{load_form, save_form};
