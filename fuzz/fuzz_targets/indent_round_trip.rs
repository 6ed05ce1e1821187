#![no_main]

use indent_core::{IndentUnit, SelectionRange, indent, outdent};
use libfuzzer_sys::fuzz_target;
use std::num::NonZeroUsize;

fuzz_target!(|data: &[u8]| {
    let [a, b, width, rest @ ..] = data else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let unit = match NonZeroUsize::new(usize::from(*width % 5)) {
        Some(spaces) => IndentUnit::spaces(spaces),
        None => IndentUnit::tab(),
    };
    let selection = SelectionRange::new(usize::from(*a), usize::from(*b)).clamped(text);

    let indented = indent(text, selection, &unit);
    assert!(indented.selection.end <= indented.text.len());
    assert!(indented.text.is_char_boundary(indented.selection.start));
    assert!(indented.text.is_char_boundary(indented.selection.end));

    let restored = outdent(&indented.text, indented.selection, &unit);
    assert_eq!(restored.text, text);
    assert_eq!(restored.selection, selection);

    let outdented = outdent(text, selection, &unit);
    assert!(outdented.selection.start <= outdented.selection.end);
    assert!(outdented.selection.end <= outdented.text.len());
    assert!(outdented.text.is_char_boundary(outdented.selection.start));
    assert!(outdented.text.is_char_boundary(outdented.selection.end));
});
