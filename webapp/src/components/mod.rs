pub mod layout;
pub mod navigation;
pub mod product_card;
pub mod scroll;
pub mod theme;
