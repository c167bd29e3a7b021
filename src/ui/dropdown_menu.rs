// Dropdown menu component - 해석된 메뉴 항목 목록 표시
//
// 구분선, 단축키, 서브메뉴 화살표, 비활성 항목을 그리는 미리보기 위젯

use crate::core::shortcut_display;
use crate::models::{MenuEntry, MenuItemSpec};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 드롭다운 최소 너비
const MIN_WIDTH: u16 = 15;

/// 드롭다운 메뉴 위젯
pub struct DropdownMenu<'a> {
    /// 표시할 항목
    entries: &'a [MenuEntry<'a>],
    /// 강조할 항목 인덱스
    selected_item: Option<usize>,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 선택 배경색
    selected_bg: Color,
    /// 선택 전경색
    selected_fg: Color,
    /// 비활성 색상
    disabled_color: Color,
    /// 테두리 색상
    border_color: Color,
    /// 단축키 색상
    shortcut_color: Color,
}

impl<'a> DropdownMenu<'a> {
    pub fn new(entries: &'a [MenuEntry<'a>]) -> Self {
        Self {
            entries,
            selected_item: None,
            bg_color: Color::Rgb(45, 45, 45),
            fg_color: Color::Rgb(212, 212, 212),
            selected_bg: Color::Rgb(0, 120, 212),
            selected_fg: Color::White,
            disabled_color: Color::Rgb(100, 100, 100),
            border_color: Color::Rgb(60, 60, 60),
            shortcut_color: Color::Rgb(150, 150, 150),
        }
    }

    /// 강조할 항목 설정
    pub fn selected_item(mut self, index: Option<usize>) -> Self {
        self.selected_item = index;
        self
    }

    /// 오른쪽 열 텍스트 (서브메뉴 화살표 또는 단축키)
    ///
    /// 항목에 단축키가 없으면 카탈로그의 단축키를 쓴다.
    fn right_text(item: &MenuItemSpec) -> Option<&str> {
        if item.has_submenu() {
            Some("▶")
        } else {
            item.shortcut
                .as_deref()
                .or_else(|| shortcut_display(&item.id))
        }
    }

    /// 드롭다운 너비 계산 (테두리 포함)
    pub fn calculate_width(&self) -> u16 {
        let items = self.entries.iter().filter_map(MenuEntry::item);

        let max_label = items.clone().map(|item| item.text.width()).max().unwrap_or(0);
        let max_right = items
            .filter_map(Self::right_text)
            .map(|text| text.width())
            .max()
            .unwrap_or(0);

        // 테두리(2) + 레이블 + 간격(2) + 오른쪽 열 + 패딩(2)
        let width = max_label + 2 + max_right + 2 + 2;
        u16::try_from(width).unwrap_or(u16::MAX).max(MIN_WIDTH)
    }

    /// 드롭다운 높이 계산 (테두리 포함)
    pub fn calculate_height(&self) -> u16 {
        u16::try_from(self.entries.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }

    /// 항목 한 줄 렌더링
    fn render_entry(&self, entry: &MenuEntry<'_>, is_selected: bool, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(2);

        let item = match entry {
            MenuEntry::Separator => {
                let line = "─".repeat(inner_width as usize);
                let span = Span::styled(&line, Style::default().fg(self.border_color));
                buf.set_span(area.x + 1, area.y, &span, inner_width);
                return;
            }
            MenuEntry::Item(item) => item,
        };

        let (bg, fg) = if is_selected && item.enabled {
            (self.selected_bg, self.selected_fg)
        } else if item.enabled {
            (self.bg_color, self.fg_color)
        } else {
            (self.bg_color, self.disabled_color)
        };

        // 배경 채우기 (테두리 안쪽)
        for x in area.x + 1..area.x + 1 + inner_width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_bg(bg);
            }
        }

        buf.set_span(
            area.x + 1,
            area.y,
            &Span::styled(item.text.as_str(), Style::default().fg(fg).bg(bg)),
            inner_width,
        );

        if let Some(right_text) = Self::right_text(item) {
            let right_width = right_text.width() as u16;
            let right_style = if is_selected && item.enabled {
                Style::default().fg(self.selected_fg).bg(bg)
            } else {
                Style::default().fg(self.shortcut_color).bg(bg)
            };
            let right_x = (area.x + area.width).saturating_sub(right_width + 1);
            buf.set_span(
                right_x,
                area.y,
                &Span::styled(right_text, right_style),
                right_width,
            );
        }
    }
}

impl Widget for DropdownMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.entries.is_empty() || area.height < 3 {
            return;
        }

        let dropdown_area = Rect {
            x: area.x,
            y: area.y,
            width: self.calculate_width().min(area.width),
            height: self.calculate_height().min(area.height),
        };

        Clear.render(dropdown_area, buf);

        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color))
            .render(dropdown_area, buf);

        let visible = (dropdown_area.height - 2) as usize;
        for (i, entry) in self.entries.iter().take(visible).enumerate() {
            let entry_area = Rect {
                x: dropdown_area.x,
                y: dropdown_area.y + 1 + i as u16,
                width: dropdown_area.width,
                height: 1,
            };
            self.render_entry(entry, self.selected_item == Some(i), entry_area, buf);
        }
    }
}
