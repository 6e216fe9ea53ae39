//! Line-oriented terminal surface for the interactive binary.
//!
//! The grid is reprinted on every update; the cart panel only while the modal is
//! open. Toasts are printed once when they first appear; their exit animation has
//! no terminal equivalent.

use crate::{
    errors::Result,
    ui::{ModalState, Surface, Toast, ToastKind},
    view::{BadgeView, CartPanelView, ProductCardView, ProductDetailView, ProductGridView},
};
use std::{collections::HashSet, io::Write};

/// Writes storefront updates as plain text to `W`
#[derive(Debug)]
pub struct TerminalSurface<W: Write> {
    out: W,
    modal: ModalState,
    last_panel: Option<CartPanelView>,
    last_badge: Option<BadgeView>,
    printed_toasts: HashSet<u64>,
}

impl<W: Write> TerminalSurface<W> {
    /// Creates a surface writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            modal: ModalState::Closed,
            last_panel: None,
            last_badge: None,
            printed_toasts: HashSet::new(),
        }
    }

    /// Consumes the surface and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_card(&mut self, card: &ProductCardView) -> Result<()> {
        writeln!(self.out, "[{}] {}", card.id, card.title)?;
        writeln!(
            self.out,
            "    {} ({})  {}  {}  {}  <{}>",
            card.stars(),
            card.rating_count,
            card.price,
            card.original_price,
            card.discount_label(),
            card.button_label()
        )?;
        Ok(())
    }

    fn print_panel(&mut self, panel: &CartPanelView) -> Result<()> {
        writeln!(self.out, "---- Cart ----")?;
        if let Some(placeholder) = panel.placeholder() {
            writeln!(self.out, "  {placeholder}")?;
        }
        for row in &panel.rows {
            writeln!(self.out, "  [{}] {}", row.product_id, row.title)?;
            writeln!(self.out, "      {}", row.price_line)?;
        }
        writeln!(self.out, "  Total: ₹{}", panel.total)?;
        writeln!(self.out, "--------------")?;
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn show_products(&mut self, grid: &ProductGridView) -> Result<()> {
        match grid {
            ProductGridView::Cards(cards) => {
                for card in cards {
                    self.print_card(card)?;
                }
            }
            other => writeln!(self.out, "{}", other.placeholder().unwrap_or_default())?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_product_detail(&mut self, detail: &ProductDetailView) -> Result<()> {
        self.print_card(&detail.card)?;
        if let Some(category) = &detail.category {
            writeln!(self.out, "    Category: {category}")?;
        }
        if let Some(description) = &detail.description {
            writeln!(self.out, "    {description}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_cart(&mut self, panel: &CartPanelView) -> Result<()> {
        if self.modal.is_open() {
            self.print_panel(panel)?;
            self.out.flush()?;
        }
        self.last_panel = Some(panel.clone());
        Ok(())
    }

    fn show_badge(&mut self, badge: BadgeView) -> Result<()> {
        if self.last_badge == Some(badge) {
            return Ok(());
        }
        if badge.is_visible() {
            writeln!(self.out, "Cart: {} item(s)", badge.count)?;
        } else if self.last_badge.is_some() {
            writeln!(self.out, "Cart is empty")?;
        }
        self.last_badge = Some(badge);
        Ok(())
    }

    fn show_modal(&mut self, state: ModalState) -> Result<()> {
        let was_open = self.modal.is_open();
        self.modal = state;
        if state.is_open() && !was_open {
            if let Some(panel) = self.last_panel.clone() {
                self.print_panel(&panel)?;
            }
        } else if !state.is_open() && was_open {
            writeln!(self.out, "(cart closed)")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_toasts(&mut self, toasts: &[Toast]) -> Result<()> {
        for toast in toasts {
            if self.printed_toasts.insert(toast.id) {
                let marker = match toast.kind {
                    ToastKind::Success => "✔",
                    ToastKind::Error => "✖",
                };
                writeln!(self.out, "{marker} {}", toast.message)?;
            }
        }
        let live: HashSet<u64> = toasts.iter().map(|t| t.id).collect();
        self.printed_toasts.retain(|id| live.contains(id));
        self.out.flush()?;
        Ok(())
    }

    fn show_categories(&mut self, categories: &[String]) -> Result<()> {
        writeln!(self.out, "Categories: {}", categories.join(", "))?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::CartStore,
        test_utils::*,
        ui::{Notifier, ToastPolicy},
        view,
    };
    use tokio::time::Instant;

    fn output(surface: TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn test_grid_lines() -> Result<()> {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.show_products(&view::product_grid(&[sample_product(
            3,
            "Sony WH-1000XM5",
            27990,
            34990,
        )]))?;

        let text = output(surface);
        assert!(text.contains("[3] Sony WH-1000XM5"));
        assert!(text.contains("₹27,990  ₹34,990  20% off  <Add to Cart>"));
        Ok(())
    }

    #[test]
    fn test_product_detail_lines() -> Result<()> {
        let mut surface = TerminalSurface::new(Vec::new());
        let catalog = sample_catalog();
        surface.show_product_detail(&view::product_detail(&catalog[6]))?;

        let text = output(surface);
        assert!(text.contains("[7] AirPods Pro (2nd Generation) with MagSafe Case"));
        assert!(text.contains("    Category: Electronics"));
        assert!(text.contains("    Premium wireless earbuds with active noise cancellation"));
        Ok(())
    }

    #[test]
    fn test_cart_printed_only_while_open() -> Result<()> {
        let mut surface = TerminalSurface::new(Vec::new());
        let mut cart = CartStore::new();
        cart.add(&sample_product(7, "AirPods Pro", 24900, 29900));

        surface.show_cart(&view::cart_panel(&cart))?;
        surface.show_modal(ModalState::Open)?;
        surface.show_modal(ModalState::Closed)?;
        surface.show_cart(&view::cart_panel(&CartStore::new()))?;

        let text = output(surface);
        assert_eq!(text.matches("---- Cart ----").count(), 1);
        assert!(text.contains("₹24,900 x 1"));
        assert!(text.contains("Total: ₹24,900"));
        assert!(!text.contains("Your cart is empty"));
        Ok(())
    }

    #[test]
    fn test_each_toast_printed_once() -> Result<()> {
        let mut surface = TerminalSurface::new(Vec::new());
        let mut notifier = Notifier::new(ToastPolicy::Single);
        notifier.show("Cart updated", ToastKind::Success, Instant::now());

        surface.show_toasts(notifier.toasts())?;
        surface.show_toasts(notifier.toasts())?;

        assert_eq!(output(surface).matches("✔ Cart updated").count(), 1);
        Ok(())
    }
}
