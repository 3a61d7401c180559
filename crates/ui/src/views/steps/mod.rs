mod choice;
mod info;
mod lead;
mod number;

pub use choice::ChoiceStep;
pub use info::InfoStep;
pub use lead::LeadStep;
pub use number::NumberStep;
