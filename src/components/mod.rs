pub mod cart_panel;
pub mod order_modal;
pub mod product_grid;
pub mod shop;
pub mod toast;

pub use cart_panel::CartPanel;
pub use order_modal::OrderModal;
pub use product_grid::ProductGrid;
pub use shop::Shop;
pub use toast::Toast;
