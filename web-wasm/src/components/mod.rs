pub mod countdown_panel;
pub mod distance_card;
pub mod header;
pub mod location_modal;
pub mod photo_gallery;
