//! Common reusable UI components

pub mod form;
pub mod modal;
pub mod spinner;

pub use form::{CheckboxField, FormField, TextAreaField};
pub use modal::Modal;
pub use spinner::{Spinner, SpinnerSize};
