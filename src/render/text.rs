use std::io::{self, Write};

use super::Renderer;
use crate::derivation::{ItemRow, View};
use crate::format::{format_currency, format_time, trend_icon};

/// Plain-text renderer for terminals and logs.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_categories(&mut self, view: &View) -> io::Result<()> {
        let buttons: Vec<String> = view
            .categories
            .iter()
            .map(|button| {
                if button.active {
                    format!("[{}]", button.label)
                } else {
                    format!(" {} ", button.label)
                }
            })
            .collect();
        writeln!(self.out, "{}", buttons.join(" "))
    }

    fn write_row(&mut self, view: &View, row: &ItemRow) -> io::Result<()> {
        let checkbox = match (row.selected, row.selectable) {
            (true, _) => "[x]",
            (false, true) => "[ ]",
            (false, false) => "[-]",
        };

        write!(
            self.out,
            "{} {:<20} {}: {}x  {} {}  {}: {}",
            checkbox,
            row.name,
            view.labels.quantity,
            row.count,
            format_currency(row.price),
            trend_icon(row.trend),
            view.labels.total,
            format_currency(row.line_total),
        )?;

        match (&row.supply_label, row.supply_level) {
            (Some(label), Some(level)) => write!(self.out, "  ({} {})", label, level.normalize())?,
            (Some(label), None) => write!(self.out, "  ({})", label)?,
            _ => {}
        }
        writeln!(self.out)?;
        writeln!(self.out, "    {}", row.image_url)
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &View) -> io::Result<()> {
        writeln!(self.out, "== {} ==", view.title)?;
        if let Some(info) = &view.labels.market_info {
            writeln!(self.out, "{}", info)?;
        }
        self.write_categories(view)?;

        for row in &view.rows {
            self.write_row(view, row)?;
        }

        self.render_totals(view)?;
        self.render_timer(view)
    }

    fn render_totals(&mut self, view: &View) -> io::Result<()> {
        let sell = if view.totals.can_sell {
            format!("<{}>", view.labels.sell)
        } else {
            format!("<{}: disabled>", view.labels.sell)
        };

        writeln!(
            self.out,
            "{}: {}  {}",
            view.labels.total_value,
            format_currency(view.totals.selected_total),
            sell
        )?;
        self.out.flush()
    }

    fn render_timer(&mut self, view: &View) -> io::Result<()> {
        if let Some(remaining) = view.remaining_ms {
            writeln!(
                self.out,
                "{}: {}",
                view.labels.next_update,
                format_time(remaining)
            )?;
        }
        self.out.flush()
    }

    fn hide(&mut self) -> io::Result<()> {
        writeln!(self.out, "-- closed --")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::derive_categories;
    use crate::state::{selection, MarketConfig, MarketItem, Trend, ViewState};
    use rust_decimal_macros::dec;

    fn rendered(state: &ViewState, now_ms: i64) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&View::capture(state, now_ms)).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    fn weed_state() -> ViewState {
        let items = vec![MarketItem::new("weed", "Weed", "drugs", dec!(100))];
        let mut state = ViewState::new();
        state.market = Some(MarketConfig {
            name: "Grove Street".to_string(),
            items: items.clone(),
        });
        state.categories = derive_categories(&items);
        state.inventory = items;
        state.player_inventory.set("weed", 3);
        state.translations = [
            ("quantity", "Qty"),
            ("total", "Total"),
            ("total_value", "Total value"),
            ("sell_all", "Sell all"),
            ("next_update", "Next update"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        state
    }

    #[test]
    fn test_render_full() {
        let mut state = weed_state();
        state.prices.insert("weed".to_string(), dec!(1500));
        state.trends.insert("weed".to_string(), Trend::Up);
        state.next_update_ms = Some(125_000);
        selection::toggle(&mut state, "weed", true);

        let text = rendered(&state, 0);

        assert!(text.contains("== Grove Street =="));
        assert!(text.contains("[All]  drugs "));
        assert!(text.contains("[x] Weed"));
        assert!(text.contains("Qty: 3x  $1,500 ↑  Total: $4,500"));
        assert!(text.contains("Total value: $4,500  <Sell all>"));
        assert!(text.contains("Next update: 2:05"));
    }

    #[test]
    fn test_render_nothing_selected() {
        let state = weed_state();
        let text = rendered(&state, 0);

        assert!(text.contains("[ ] Weed"));
        assert!(text.contains("Total value: $0  <Sell all: disabled>"));
        // No deadline, no timer line
        assert!(!text.contains("Next update"));
    }

    #[test]
    fn test_render_supply_label() {
        let mut state = weed_state();
        state.supply_demand_enabled = true;
        state.trends.insert("weed".to_string(), Trend::Down);
        state
            .translations
            .insert("supply_high".to_string(), "High supply".to_string());

        let text = rendered(&state, 0);
        assert!(text.contains("(High supply)"));

        state.supply_levels.insert("weed".to_string(), dec!(0.80));
        let text = rendered(&state, 0);
        assert!(text.contains("(High supply 0.8)"));
    }

    #[test]
    fn test_render_image_link() {
        let mut state = weed_state();
        let text = rendered(&state, 0);
        assert!(text.contains("    nui://inventory/web/dist/assets/items/default.png"));

        state.inventory_link = Some("nui://items/%s.png".to_string());
        let text = rendered(&state, 0);
        assert!(text.contains("    nui://items/weed.png"));
    }

    #[test]
    fn test_hide() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.hide().unwrap();
        assert_eq!(String::from_utf8(renderer.into_inner()).unwrap(), "-- closed --\n");
    }
}
