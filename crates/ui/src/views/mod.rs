mod offer;
mod processing;
mod quiz;
mod state;
mod steps;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use offer::OfferView;
pub use processing::ProcessingView;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
