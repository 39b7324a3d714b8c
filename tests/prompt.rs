use std::io::Cursor;

use ogg_reencode::prompt::confirm;

fn answer(input: &str) -> (bool, String) {
    let mut output = Vec::new();
    let confirmed = confirm(Cursor::new(input), &mut output, 3).expect("prompt should not fail");
    (confirmed, String::from_utf8(output).expect("prompt output is utf-8"))
}

#[test]
fn prompt_shows_count_and_question() {
    let (_, output) = answer("y\n");
    assert!(output.contains("re-encode 3 .ogg file(s)"));
    assert!(output.contains("Continue? (Y/N)"));
}

#[test]
fn y_in_either_case_confirms() {
    assert!(answer("y\n").0);
    assert!(answer("  Y \r\n").0);
}

#[test]
fn anything_else_declines() {
    assert!(!answer("n\n").0);
    assert!(!answer("yes\n").0);
    assert!(!answer("\n").0);
}

#[test]
fn end_of_input_declines() {
    assert!(!answer("").0);
}
