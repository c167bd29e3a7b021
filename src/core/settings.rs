// Editor settings - 에디터 설정 조회

/// 메뉴 해석에 필요한 에디터 설정
pub trait EditorSettings {
    /// 모든 메뉴에서 제외할 항목 이름 (공백 또는 쉼표 구분)
    fn removed_menu_items(&self) -> &str;
}

impl EditorSettings for str {
    fn removed_menu_items(&self) -> &str {
        self
    }
}

impl EditorSettings for String {
    fn removed_menu_items(&self) -> &str {
        self.as_str()
    }
}
