use ratatui::layout::{Constraint, Layout, Rect};

/// Rows taken by the bordered draft input and by the bordered footer.
const BAR_HEIGHT: u16 = 3;

/// Size of the "Loading..." box.
const LOADING_WIDTH: u16 = 24;
const LOADING_HEIGHT: u16 = 3;

/// Draft input on top, item list in the middle, counter and filter tabs at
/// the bottom. The list gets whatever is left.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, list, footer] = Layout::vertical([
        Constraint::Length(BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(BAR_HEIGHT),
    ])
    .areas(area);
    (header, list, footer)
}

/// Fixed-size box centered over the list, shrunk to fit small terminals.
pub fn loading_rect(list: Rect) -> Rect {
    let width = LOADING_WIDTH.min(list.width);
    let height = LOADING_HEIGHT.min(list.height);
    Rect {
        x: list.x + (list.width - width) / 2,
        y: list.y + (list.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_takes_the_space_between_bars() {
        let (header, list, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header, Rect::new(0, 0, 80, 3));
        assert_eq!(list, Rect::new(0, 3, 80, 18));
        assert_eq!(footer, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn loading_box_is_centered_in_the_list() {
        let popup = loading_rect(Rect::new(0, 3, 80, 18));
        assert_eq!(popup, Rect::new(28, 10, 24, 3));
    }

    #[test]
    fn loading_box_fits_narrow_lists() {
        let list = Rect::new(0, 3, 10, 2);
        let popup = loading_rect(list);
        assert_eq!(popup, list);
    }
}
