use std::io::Write;
use tab_override::{
    EditableSurface, Key, KeyEvent, KeyOutcome, MemorySurface, Modifiers, SelectionRange,
    Settings, TabOverride,
};

fn tab() -> KeyEvent {
    KeyEvent::down(Key::Tab, Modifiers::NONE)
}

fn shift_tab() -> KeyEvent {
    KeyEvent::down(Key::Tab, Modifiers::SHIFT)
}

fn enabled(value: &str, selection: SelectionRange) -> (TabOverride, MemorySurface) {
    let area = MemorySurface::new(1u64, value).with_selection(selection);
    let mut tabs = TabOverride::new();
    assert!(tabs.enable(&area));
    (tabs, area)
}

#[test]
fn tab_at_caret_inserts_unit() {
    let (tabs, mut area) = enabled("abc", SelectionRange::caret(1));
    assert_eq!(tabs.handle_key(&mut area, &tab()), KeyOutcome::Handled);
    assert_eq!(area.value(), "a\tbc");
    assert_eq!(area.selection(), Some(SelectionRange::caret(2)));
}

#[test]
fn tab_over_two_lines_indents_both() {
    let (tabs, mut area) = enabled("line1\nline2", SelectionRange::new(0, 11));
    tabs.handle_key(&mut area, &tab());
    assert_eq!(area.value(), "\tline1\n\tline2");
    assert_eq!(area.selection(), Some(SelectionRange::new(1, 13)));
}

#[test]
fn shift_tab_over_two_lines_restores_them() {
    let (tabs, mut area) = enabled("\tline1\n\tline2", SelectionRange::new(1, 13));
    tabs.handle_key(&mut area, &shift_tab());
    assert_eq!(area.value(), "line1\nline2");
    assert_eq!(area.selection(), Some(SelectionRange::new(0, 11)));
}

#[test]
fn shift_tab_at_caret_removes_preceding_unit() {
    let (tabs, mut area) = enabled("\thello", SelectionRange::caret(1));
    tabs.handle_key(&mut area, &shift_tab());
    assert_eq!(area.value(), "hello");
    assert_eq!(area.selection(), Some(SelectionRange::caret(0)));
}

#[test]
fn space_unit_is_inserted_into_empty_text() {
    let (mut tabs, mut area) = enabled("", SelectionRange::caret(0));
    assert!(tabs.set_indent_width(Some(4)));
    assert_eq!(tabs.tab_size(), 4);

    tabs.handle_key(&mut area, &tab());
    assert_eq!(area.value(), "    ");
    assert_eq!(area.selection(), Some(SelectionRange::caret(4)));
}

#[test]
fn mixed_eligibility_only_outdents_indented_lines() {
    let (tabs, mut area) = enabled("\ta\nb\n\tc", SelectionRange::new(1, 7));
    tabs.handle_key(&mut area, &shift_tab());
    assert_eq!(area.value(), "a\nb\nc");
    assert_eq!(area.selection(), Some(SelectionRange::new(0, 5)));
}

#[test]
fn disabled_surface_keeps_default_tab() {
    let (mut tabs, mut area) = enabled("abc", SelectionRange::caret(1));
    assert!(tabs.disable(&area));
    assert!(!tabs.disable(&area));

    assert_eq!(tabs.handle_key(&mut area, &tab()), KeyOutcome::Ignored);
    assert_eq!(area.value(), "abc");
}

#[test]
fn bulk_enable_skips_single_line_fields() {
    let first = MemorySurface::new(1u64, "");
    let second = MemorySurface::new(2u64, "");
    let field = MemorySurface::single_line(3u64, "");
    let mut tabs = TabOverride::new();

    assert_eq!(tabs.enable_all([&first, &second, &field]), 2);
    assert!(!tabs.is_enabled(field.id()));
    assert_eq!(tabs.disable_all([&first, &second, &field]), 2);
    assert!(!tabs.is_enabled(first.id()));
}

#[test]
fn settings_file_configures_the_unit() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[indent]\nwidth = 2").unwrap();

    let settings = Settings::load(file.path()).unwrap();
    let tabs = TabOverride::from_settings(&settings);
    assert_eq!(tabs.indent_unit().as_str(), "  ");

    let mut area = MemorySurface::new(1u64, "x\ny").with_selection(SelectionRange::new(0, 3));
    let mut tabs = tabs;
    tabs.enable(&area);
    tabs.handle_key(&mut area, &tab());
    assert_eq!(area.value(), "  x\n  y");
    assert_eq!(area.selection(), Some(SelectionRange::new(2, 7)));
}
