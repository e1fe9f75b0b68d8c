use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x.saturating_add(x_offset);
    let popup_y = anchor.y.saturating_sub(height);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset.saturating_mul(2))),
        height: height.min(anchor.y),
    }
}

/// Rect directly under `anchor`, clamped to the bottom of the frame
pub fn popup_below_anchor(frame_area: Rect, anchor: Rect, width: u16, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let frame_bottom = frame_area.y.saturating_add(frame_area.height);

    Rect {
        x: anchor.x,
        y: popup_y.min(frame_bottom),
        width: width.min(frame_area.right().saturating_sub(anchor.x)),
        height: height.min(frame_bottom.saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
