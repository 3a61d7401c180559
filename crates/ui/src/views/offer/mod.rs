mod player;
mod view;

pub use view::OfferView;
