mod back_to_top;
mod notification;
mod share_menu;

pub use back_to_top::BackToTop;
pub use notification::NotificationToast;
pub use share_menu::ShareMenuOverlay;
