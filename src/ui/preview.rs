// Preview - 메뉴바와 열린 드롭다운을 화면 밖 버퍼에 렌더링

use super::{DropdownMenu, MenuBar};
use crate::core::ResolvedMenu;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// 미리보기 옵션
#[derive(Debug, Clone)]
pub struct PreviewOptions {
    /// 출력 너비
    pub width: u16,
    /// 펼쳐 보일 메뉴 (키 또는 제목)
    pub open: Option<String>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 80,
            open: None,
        }
    }
}

/// 키 또는 제목(대소문자 무시)으로 메뉴 찾기
pub fn find_menu(menus: &[ResolvedMenu<'_>], name: &str) -> Option<usize> {
    menus
        .iter()
        .position(|menu| menu.key() == name || menu.text().eq_ignore_ascii_case(name))
}

/// 메뉴바(+ 열린 드롭다운) 렌더링
pub fn render_preview(menus: &[ResolvedMenu<'_>], options: &PreviewOptions) -> Buffer {
    let open_index = options
        .open
        .as_deref()
        .and_then(|name| find_menu(menus, name));
    let entries = open_index
        .map(|index| menus[index].get_items())
        .unwrap_or_default();

    let menu_bar = MenuBar::new(menus).selected_menu(open_index);
    let dropdown = DropdownMenu::new(&entries);

    let dropdown_height = if entries.is_empty() {
        0
    } else {
        dropdown.calculate_height()
    };
    // 버퍼 넓이(width * height)는 u16 범위를 넘을 수 없음
    let height = dropdown_height.saturating_add(1);
    let width = options.width.min(u16::MAX / height);
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let area = buf.area;

    let dropdown_x = open_index
        .map(|index| menu_bar.get_menu_x_position(index))
        .unwrap_or(0)
        .min(area.width.saturating_sub(1));
    menu_bar.render(Rect::new(area.x, area.y, area.width, 1), &mut buf);

    if dropdown_height > 0 {
        let dropdown_area = Rect::new(
            dropdown_x,
            area.y + 1,
            area.width.saturating_sub(dropdown_x),
            area.height - 1,
        );
        dropdown.render(dropdown_area, &mut buf);
    }

    buf
}

/// 버퍼를 텍스트 줄로 변환 (뒤쪽 공백 제거)
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            let line: String = (area.x..area.x + area.width)
                .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}
