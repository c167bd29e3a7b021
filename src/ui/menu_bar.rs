// Menu bar component - 해석된 메뉴 제목을 한 줄로 표시
//
// 미리보기용 비대화형 렌더러

use crate::core::ResolvedMenu;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 메뉴바 컴포넌트
pub struct MenuBar<'a> {
    /// 메뉴 목록
    menus: &'a [ResolvedMenu<'a>],
    /// 강조할 메뉴 인덱스 (열린 드롭다운)
    selected_menu: Option<usize>,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 선택된 메뉴 배경색
    selected_bg: Color,
    /// 선택된 메뉴 전경색
    selected_fg: Color,
}

impl<'a> MenuBar<'a> {
    pub fn new(menus: &'a [ResolvedMenu<'a>]) -> Self {
        Self {
            menus,
            selected_menu: None,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            selected_bg: Color::Rgb(0, 120, 212),
            selected_fg: Color::White,
        }
    }

    /// 선택된 메뉴 인덱스 설정
    pub fn selected_menu(mut self, index: Option<usize>) -> Self {
        self.selected_menu = index;
        self
    }

    /// 메뉴 제목의 x 위치 계산 (드롭다운 배치용)
    pub fn get_menu_x_position(&self, menu_index: usize) -> u16 {
        let mut x = 0u16;

        for (i, menu) in self.menus.iter().enumerate() {
            // 메뉴 사이 여백 (첫 메뉴 제외)
            if i > 0 {
                x = x.saturating_add(1);
            }

            if i == menu_index {
                break;
            }

            // 양쪽 공백(2) + 제목 (전각 문자 너비 고려)
            let title_width = u16::try_from(menu.text().width()).unwrap_or(u16::MAX);
            x = x.saturating_add(title_width.saturating_add(2));
        }

        x
    }
}

impl Widget for MenuBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = Vec::new();
        for (i, menu) in self.menus.iter().enumerate() {
            let style = if self.selected_menu == Some(i) {
                Style::default()
                    .fg(self.selected_fg)
                    .bg(self.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.fg_color)
            };

            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {} ", menu.text()), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{catalog_items, identify_menus};
    use crate::models::MenuRegistry;

    fn registry() -> MenuRegistry {
        MenuRegistry {
            menu_items: catalog_items(),
            ..MenuRegistry::default()
        }
        .with_menubar("file edit")
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_menu_x_position() {
        let registry = registry();
        let menus = identify_menus("", &registry);
        let menu_bar = MenuBar::new(&menus);

        assert_eq!(menu_bar.get_menu_x_position(0), 0);
        // " File " (6) + 여백 1
        assert_eq!(menu_bar.get_menu_x_position(1), 7);
    }

    #[test]
    fn test_render_titles() {
        let registry = registry();
        let menus = identify_menus("", &registry);

        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        MenuBar::new(&menus).selected_menu(Some(1)).render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), " File   Edit        ");
        assert_eq!(buf.cell((8, 0)).map(|c| c.fg), Some(Color::White));
    }
}
