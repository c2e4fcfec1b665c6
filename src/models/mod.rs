pub mod cart;
pub mod device;
pub mod money;
pub mod order;
pub mod product;
pub mod shop_state;
pub mod shop_store;

pub use cart::{Cart, CartLine};
pub use device::{detect_mobile, is_mobile_user_agent};
pub use money::{format_amount, format_price};
pub use order::{OrderFlow, OrderReceipt};
pub use product::{Catalog, ImageSet, Product, ProductId, ProductRecord};
pub use shop_state::{ShopEvent, ShopState, TransientMessage};
pub use shop_store::{current_timestamp_ms, ShopStore};
