//! End-to-end flows: distributing a record into a compound input tree and
//! driving a dropdown through a full select interaction.

use std::cell::RefCell;
use std::rc::Rc;

use formkit_core::event::{Event, KeyCode, KeyEvent, PointerEvent};
use formkit_core::path::Path;
use formkit_core::value::{Value, ValueMap};
use formkit_inputs::commit::Committable;
use formkit_inputs::dropdown::DropdownMenuInput;
use formkit_inputs::node::{InputNode, distribute};
use formkit_inputs::options::MenuOption;
use formkit_inputs::text::TextInput;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code))
}

#[test]
fn record_distributes_into_subpathed_group() {
    let record = Value::Map(ValueMap::new().with(
        "a",
        ValueMap::new().with("b", "1-200").with("c", "Hello"),
    ));

    let form = InputNode::input()
        .with_subpath(["a"])
        .child(InputNode::input().with_name("b"))
        .child(InputNode::input().with_name("c"));

    let resolved = distribute(&record, &form).unwrap();

    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved[1].path, Path::from(["a", "b"]));
    assert_eq!(resolved[1].value, Some(&Value::text("1-200")));
    assert_eq!(resolved[2].path, Path::from(["a", "c"]));
    assert_eq!(resolved[2].value, Some(&Value::text("Hello")));
}

#[test]
fn deep_record_distributes_through_interspersed_wrappers() {
    let record = Value::Map(
        ValueMap::new()
            .with("objectNumber", "1-200")
            .with("comment", "Hello world!")
            .with(
                "group",
                ValueMap::new().with("nested", "Nested 1").with(
                    "deepGroup",
                    ValueMap::new().with("deeplyNested", "Nested 2"),
                ),
            ),
    );

    let form = InputNode::input()
        .child(InputNode::input().with_name("objectNumber"))
        .child(
            InputNode::structural()
                .child(InputNode::input().with_name("comment"))
                .child(
                    InputNode::input().with_name("group").child(
                        InputNode::structural()
                            .child(InputNode::input().with_name("nested"))
                            .child(
                                InputNode::input()
                                    .with_name("deepGroup")
                                    .child(InputNode::input().with_name("deeplyNested")),
                            ),
                    ),
                ),
        );

    let resolved = distribute(&record, &form).unwrap();
    let lookup = |path: &str| {
        resolved
            .iter()
            .find(|r| r.path.to_string() == path)
            .and_then(|r| r.value)
    };

    assert_eq!(lookup("objectNumber"), Some(&Value::text("1-200")));
    assert_eq!(lookup("comment"), Some(&Value::text("Hello world!")));
    assert_eq!(lookup("group.nested"), Some(&Value::text("Nested 1")));
    assert_eq!(
        lookup("group.deepGroup.deeplyNested"),
        Some(&Value::text("Nested 2"))
    );
}

#[test]
fn anonymous_group_receives_parent_record() {
    let record = Value::Map(
        ValueMap::new()
            .with("objectNumber", "1-200")
            .with("comment", "Hello world!"),
    );

    let form = InputNode::input()
        .child(InputNode::input().with_name("objectNumber"))
        .child(
            InputNode::structural().child(
                InputNode::input().child(InputNode::input().with_name("comment")),
            ),
        );

    let resolved = distribute(&record, &form).unwrap();
    let comment = resolved.last().unwrap();
    assert_eq!(comment.path, Path::from(["comment"]));
    assert_eq!(comment.value, Some(&Value::text("Hello world!")));
}

#[test]
fn dropdown_select_commits_once_then_closes_once() {
    let log = Rc::new(RefCell::new(Vec::new()));

    let open_log = Rc::clone(&log);
    let commit_log = Rc::clone(&log);
    let close_log = Rc::clone(&log);

    let mut input = DropdownMenuInput::new(Path::from(["color"]))
        .with_options(vec![
            MenuOption::new("value1", "Value 1"),
            MenuOption::new("value2", "Value 2"),
            MenuOption::new("value3", "Value 3"),
        ])
        .with_value("value2")
        .on_open(move || open_log.borrow_mut().push("open".to_string()))
        .on_commit(move |path, value| {
            commit_log
                .borrow_mut()
                .push(format!("commit {path}={value}"));
        })
        .on_close(move || close_log.borrow_mut().push("close".to_string()));

    input.handle_event(&Event::Pointer(PointerEvent::down_on_trigger()));
    input.handle_event(&Event::Pointer(PointerEvent::click_item(2)));

    assert_eq!(input.value_label(), "Value 3");
    assert_eq!(input.value(), &Value::text("value3"));
    assert_eq!(
        log.borrow().as_slice(),
        &[
            "open".to_string(),
            "commit color=value3".to_string(),
            "close".to_string(),
        ]
    );
}

#[test]
fn dropdown_empty_label_is_shown_as_empty() {
    let input = DropdownMenuInput::new(Path::from(["field"]))
        .with_options(vec![
            MenuOption::new("v1", "L1"),
            MenuOption::new("v2", ""),
        ])
        .with_value("v2");

    assert_eq!(input.value_label(), "");
}

#[test]
fn dropdown_override_beats_matching_option_label() {
    let input = DropdownMenuInput::new(Path::from(["field"]))
        .with_options(vec![MenuOption::new("value3", "Value 3")])
        .with_value("value3")
        .with_value_label("Some other label");

    assert_eq!(input.value_label(), "Some other label");
}

#[test]
fn dropdown_focus_menu_is_inert_while_closed() {
    let mut input = DropdownMenuInput::new(Path::from(["field"]));
    input.focus_menu();
    assert!(!input.menu_focused());
    assert!(!input.is_open());
}

#[test]
fn typed_text_commits_on_blur() {
    let commits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&commits);

    let mut input = Committable::new(TextInput::new(), Path::from(["comment"]))
        .on_commit(move |path, value| sink.borrow_mut().push((path.clone(), value.clone())));

    for c in "new".chars() {
        input.base_mut().handle_event(&press(KeyCode::Char(c)));
    }
    input.handle_event(&Event::Focus(false));

    assert_eq!(
        commits.borrow().as_slice(),
        &[(Path::from(["comment"]), Value::text("new"))]
    );
}

#[test]
fn default_child_subpath_routes_anonymous_children() {
    let record = Value::Map(
        ValueMap::new().with(
            "common",
            ValueMap::new().with("objectNumber", "1-200"),
        ),
    );

    let form = InputNode::input()
        .with_default_child_subpath("common")
        .child(InputNode::input().child(InputNode::input().with_name("objectNumber")));

    let resolved = distribute(&record, &form).unwrap();
    let leaf = resolved.last().unwrap();
    assert_eq!(leaf.path, Path::from(["common", "objectNumber"]));
    assert_eq!(leaf.value, Some(&Value::text("1-200")));
}
