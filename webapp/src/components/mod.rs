pub mod footer;
pub mod icons;
pub mod media_card;
pub mod navigation;
pub mod password_gate;
pub mod scroll;
pub mod text;
