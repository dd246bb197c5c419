use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::engine::{Icon, ViewId};

// Rows above the first item (brand mark and a gap), and rows per item.
const ITEM_TOP: u16 = 2;
const ITEM_PITCH: u16 = 2;

/// Which view sits under terminal row `row` of the rail drawn at `area`.
pub(super) fn item_at(area: Rect, row: u16) -> Option<ViewId> {
    let rel = row.checked_sub(area.y + ITEM_TOP)?;
    if rel % ITEM_PITCH != 0 {
        return None;
    }
    ViewId::ALL.get(usize::from(rel / ITEM_PITCH)).copied()
}

pub(super) fn draw(
    frame: &mut ratatui::Frame,
    area: Rect,
    expanded: bool,
    current: Option<ViewId>,
) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            if expanded { " ▲ Prism" } else { " ▲" },
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for view in ViewId::ALL {
        let style = if Some(view) == current {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let text = if expanded {
            format!(" {} {}", Icon::for_view(view).glyph(), view.label())
        } else {
            format!(" {}", Icon::for_view(view).glyph())
        };
        lines.push(Line::from(Span::styled(text, style)));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
