// Row and JSON output of print mode

mod common;

use serde_json::Value;
use tokenexplorer::print::render_print;

fn inputs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_rows_show_id_binary_and_segment() {
    let tok = common::tokenizer();
    let out = render_print(&tok, inputs(&[common::SAMPLE]), false);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "     258 0000000100000010 \"Test\"");
    assert_eq!(lines[1], "     121 0000000001111001 \"y\"");
    assert_eq!(lines[4], "     264 0000000100001000 \" woo\"");
}

#[test]
fn test_several_inputs_keep_their_order_and_separate_with_blank_lines() {
    let tok = common::tokenizer();
    let out = render_print(&tok, inputs(&["Testy", " woo", "!?"]), false);
    assert_eq!(
        out,
        "     258 0000000100000010 \"Test\"\n\
         \x20    121 0000000001111001 \"y\"\n\
         \n\
         \x20    264 0000000100001000 \" woo\"\n\
         \n\
         \x20    523 0000001000001011 \"!?\"\n"
    );
}

#[test]
fn test_control_characters_are_escaped_in_rows() {
    let tok = common::tokenizer();
    let out = render_print(&tok, inputs(&["a\tb"]), false);
    assert!(out.contains("\"\\t\""));
}

#[test]
fn test_empty_input_prints_nothing() {
    let tok = common::tokenizer();
    assert_eq!(render_print(&tok, inputs(&[""]), false), "");
    assert_eq!(render_print(&tok, Vec::new(), true), "");
}

#[test]
fn test_json_emits_one_object_per_input() {
    let tok = common::tokenizer();
    let out = render_print(&tok, inputs(&[common::SAMPLE, "!?"]), true);
    let objects: Vec<Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0]["encoding"], "p50k_base");
    assert_eq!(objects[0]["text"], common::SAMPLE);
    assert_eq!(
        objects[0]["tokens"],
        serde_json::json!([258, 121, 261, 121, 264])
    );
    assert_eq!(
        objects[0]["segments"],
        serde_json::json!(["Test", "y", " test", "y", " woo"])
    );
    assert_eq!(objects[1]["tokens"], serde_json::json!([523]));
    assert_eq!(objects[1]["segments"], serde_json::json!(["!?"]));
}
