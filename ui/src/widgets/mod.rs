mod customization;
mod input_form;
mod notice;
mod preview;

pub use customization::customization;
pub use input_form::input_form;
pub use notice::notice;
pub use preview::preview;
