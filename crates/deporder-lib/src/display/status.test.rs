use super::*;

fn render(f: impl FnOnce(&mut StatusDisplay<'_>) -> io::Result<()>) -> String {
    let mut buffer = Vec::new();
    {
        let mut status = StatusDisplay::new(&mut buffer, Styling::plain());
        f(&mut status).unwrap();
    }
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_success_and_error_with_details() {
    let output = render(|s| {
        s.success("Backend", "ordered")?;
        s.error("Frontend", "")
    });
    assert_eq!(output, "✓ Backend: ordered\n✗ Frontend\n");
}

#[test]
fn test_plain_styling_has_no_escape_codes() {
    let output = render(|s| {
        s.warning("careful")?;
        s.info("note")?;
        s.emphasis("Title")?;
        s.subtle("hint")?;
        s.working("Analyzing app.deps.json")
    });
    assert!(!output.contains('\u{1b}'));
    assert_eq!(
        output,
        "! careful\n· note\nTitle\nhint\n→ Analyzing app.deps.json\n"
    );
}

#[test]
fn test_list_uses_bullets() {
    let output = render(|s| s.list(&["A", "B"]));
    assert_eq!(output, "  • A\n  • B\n");
}

#[test]
fn test_forced_colors_emit_escape_codes() {
    let mut buffer = Vec::new();
    {
        let mut status = StatusDisplay::new(&mut buffer, Styling::new(true));
        status.success("ok", "").unwrap();
    }
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains('\u{1b}'));
    assert!(output.contains("ok"));
}
