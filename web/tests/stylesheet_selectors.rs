//! Guards the selectors the shared UI components render against.

const MAIN_CSS: &str = include_str!("../assets/main.css");

const REQUIRED_SELECTORS: &[&str] = &[
    ".hidden",
    ".visually-hidden",
    ".navbar__link",
    ".qr-type-option.active",
    ".qr-type-content",
    ".tabs__tab.active",
    ".template-card.selected",
    ".accordion-content",
    ".preview-loading",
    ".history__empty",
    ".modal-backdrop",
    ".toast--success",
    ".toast--info",
    ".toast--warning",
    ".toast--error",
    ".analytics-card",
    ".analytics-card--wide",
    ".analytics__placeholder",
    ".chart__swatch",
];

#[test]
fn component_selectors_are_styled() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|selector| !MAIN_CSS.contains(*selector))
        .collect();
    assert!(missing.is_empty(), "unstyled selectors: {missing:?}");
}

#[test]
fn braces_are_balanced() {
    let mut depth = 0i32;
    for (line_no, line) in MAIN_CSS.lines().enumerate() {
        for c in line.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            assert!(depth >= 0, "unexpected closing brace on line {}", line_no + 1);
        }
    }
    assert_eq!(depth, 0, "unclosed block in main.css");
}
