use rwrapped::ui::messages::{Level, format_message};

#[test]
fn test_message_carries_icon_and_text() {
    let ok = format_message(Level::Success, "Import completed: 4 plays");
    assert!(ok.contains("✅"));
    assert!(ok.ends_with(" Import completed: 4 plays"));

    let err = format_message(Level::Error, 42);
    assert!(err.contains("❌"));
    assert!(err.ends_with(" 42"));
}
