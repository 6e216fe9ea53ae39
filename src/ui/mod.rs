//! UI layer - the imperative half of rendering.
//!
//! A [`Surface`] receives finished view models and puts them on screen. The
//! storefront ships two: [`TerminalSurface`] for the interactive binary and
//! [`HtmlDocument`], which keeps the rendered markup of each page region in memory.

/// In-memory HTML document surface
pub mod document;
/// Cart modal state machine
pub mod modal;
/// Toast notifications and their lifecycle
pub mod notify;
/// Line-oriented terminal surface
pub mod terminal;

pub use document::HtmlDocument;
pub use modal::{ModalEvent, ModalState};
pub use notify::{Notifier, Toast, ToastKind, ToastPolicy};
pub use terminal::TerminalSurface;

use crate::{
    errors::Result,
    view::{BadgeView, CartPanelView, ProductDetailView, ProductGridView},
};

/// Target of every UI update.
///
/// Each method replaces the named region wholesale; surfaces keep no derived
/// state of their own beyond what they need to avoid redrawing unchanged regions.
pub trait Surface {
    /// Redraws the product grid.
    fn show_products(&mut self, grid: &ProductGridView) -> Result<()>;

    /// Shows one product in detail.
    fn show_product_detail(&mut self, detail: &ProductDetailView) -> Result<()>;

    /// Redraws the cart panel (list and total).
    fn show_cart(&mut self, panel: &CartPanelView) -> Result<()>;

    /// Updates the count bubble on the cart icon.
    fn show_badge(&mut self, badge: BadgeView) -> Result<()>;

    /// Shows or hides the cart modal.
    fn show_modal(&mut self, state: ModalState) -> Result<()>;

    /// Redraws the notification area.
    fn show_toasts(&mut self, toasts: &[Toast]) -> Result<()>;

    /// Lists the catalog's categories.
    fn show_categories(&mut self, categories: &[String]) -> Result<()>;
}
