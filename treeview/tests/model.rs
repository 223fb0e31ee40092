use std::sync::{Arc, Mutex};

use treeview::{
    Command, Direction, Event, Key, KeyCombo, Keymap, Message, Node, RebuildMode, RenderedLine,
    TreeConfig, TreeView,
};

type Item = Arc<Node<u32>>;

fn alice() -> Item {
    Arc::new(
        Node::new(1, "Alice")
            .child(
                Node::new(2, "Bob")
                    .child(Node::new(3, "Charlie").child(Node::new(4, "Diana"))),
            )
            .child(Node::new(5, "Eve")),
    )
}

fn inline_tree(root: Item) -> TreeView<Item> {
    let mut tree = TreeView::new(TreeConfig::new().rebuild(RebuildMode::Inline));
    tree.update(Message::ReplaceTree(root));
    tree
}

/// Run commands synchronously until none are left.
fn drain(tree: &mut TreeView<Item>, mut commands: Vec<Command<Item>>) {
    while !commands.is_empty() {
        let mut next = Vec::new();
        for command in commands {
            next.extend(tree.update(command.execute()));
        }
        commands = next;
    }
}

fn press(c: char) -> Message<Item> {
    Message::Input(Event::Key(KeyCombo::char(c)))
}

// ============================================================================
// Tree replacement
// ============================================================================

#[test]
fn test_new_tree_is_empty() {
    let tree: TreeView<Item> = TreeView::new(TreeConfig::new());
    assert!(tree.is_empty());
    assert_eq!(tree.focused(), None);
    assert_eq!(tree.generation(), 0);
}

#[test]
fn test_first_rebuild_focuses_first_line() {
    let tree = inline_tree(alice());
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.focused(), Some(&1));
    assert_eq!(tree.focused_index(), Some(0));
}

#[test]
fn test_deferred_rebuild_returns_command() {
    let mut tree = TreeView::new(TreeConfig::new());
    let commands = tree.update(Message::ReplaceTree(alice()));

    assert_eq!(commands.len(), 1);
    assert!(matches!(&commands[0], Command::Rebuild(job) if job.generation == 1));
    // Nothing applied until the rebuild comes back
    assert!(tree.is_empty());

    drain(&mut tree, commands);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.focused(), Some(&1));
}

#[test]
fn test_rebuild_keeps_focus_when_still_visible() {
    let mut root = alice();
    let mut tree = inline_tree(root.clone());
    tree.update(Message::SetFocus(5));

    Node::find_mut(&mut root, &2).unwrap().set_expanded(false);
    tree.update(Message::ReplaceTree(root));

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.focused(), Some(&5));
    assert_eq!(tree.focused_index(), Some(2));
}

#[test]
fn test_rebuild_resets_focus_when_focused_line_disappears() {
    let mut root = alice();
    let mut tree = inline_tree(root.clone());
    tree.update(Message::SetFocus(4));
    assert_eq!(tree.focused(), Some(&4));

    Node::find_mut(&mut root, &2).unwrap().set_expanded(false);
    tree.update(Message::ReplaceTree(root));

    assert_eq!(tree.focused(), Some(&1));
}

#[test]
fn test_stale_rebuild_is_discarded() {
    let mut collapsed = alice();
    Node::find_mut(&mut collapsed, &2).unwrap().set_expanded(false);

    let mut tree = TreeView::new(TreeConfig::new());
    let first = tree.update(Message::ReplaceTree(alice()));
    let second = tree.update(Message::ReplaceTree(collapsed));
    assert_eq!(tree.generation(), 2);

    // The newer rebuild finishes first, the older one arrives late
    drain(&mut tree, second);
    drain(&mut tree, first);

    assert_eq!(tree.len(), 3);
    let keys: Vec<u32> = tree.lines().iter().map(|l| l.key).collect();
    assert_eq!(keys, vec![1, 2, 5]);
}

#[test]
fn test_rebuild_for_older_generation_is_dropped() {
    let mut tree = TreeView::new(TreeConfig::new());
    let pending = tree.update(Message::ReplaceTree(alice()));

    // A newer snapshot is issued before the first rebuild finishes
    let _newer = tree.update(Message::ReplaceTree(Arc::new(Node::new(9, "Solo"))));
    drain(&mut tree, pending);

    assert!(tree.is_empty());
    assert_eq!(tree.focused(), None);
}

// ============================================================================
// Focus movement
// ============================================================================

#[test]
fn test_move_next_and_previous_wrap() {
    let mut tree = inline_tree(alice());

    tree.update(Message::Move(Direction::Previous));
    assert_eq!(tree.focused(), Some(&5));

    tree.update(Message::Move(Direction::Next));
    assert_eq!(tree.focused(), Some(&1));

    tree.update(Message::Move(Direction::Next));
    tree.update(Message::Move(Direction::Next));
    assert_eq!(tree.focused(), Some(&3));
}

#[test]
fn test_move_round_trip_returns_to_start() {
    let mut tree = inline_tree(alice());
    let keys: Vec<u32> = tree.lines().iter().map(|l| l.key).collect();

    for key in keys {
        tree.update(Message::SetFocus(key));

        tree.update(Message::Move(Direction::Next));
        tree.update(Message::Move(Direction::Previous));
        assert_eq!(tree.focused(), Some(&key));

        tree.update(Message::Move(Direction::Previous));
        tree.update(Message::Move(Direction::Next));
        assert_eq!(tree.focused(), Some(&key));
    }
}

#[test]
fn test_move_on_single_line_is_noop() {
    let mut tree = inline_tree(Arc::new(Node::new(7, "Solo")));

    tree.update(Message::Move(Direction::Next));
    assert_eq!(tree.focused(), Some(&7));
    tree.update(Message::Move(Direction::Previous));
    assert_eq!(tree.focused(), Some(&7));
}

#[test]
fn test_move_on_empty_tree_is_noop() {
    let mut tree: TreeView<Item> = TreeView::new(TreeConfig::new());
    let commands = tree.update(Message::Move(Direction::Next));
    assert!(commands.is_empty());
    assert_eq!(tree.focused(), None);
}

#[test]
fn test_move_first_and_last() {
    let mut tree = inline_tree(alice());
    tree.update(Message::Move(Direction::Last));
    assert_eq!(tree.focused(), Some(&5));
    tree.update(Message::Move(Direction::First));
    assert_eq!(tree.focused(), Some(&1));
}

// ============================================================================
// Explicit focus
// ============================================================================

#[test]
fn test_set_focus_to_present_key() {
    let mut tree = inline_tree(alice());
    tree.update(Message::SetFocus(3));
    assert_eq!(tree.focused(), Some(&3));
    assert_eq!(tree.focused_line().map(|l| l.text.as_str()), Some("│   └── Charlie"));
}

#[test]
fn test_set_focus_to_absent_key_is_ignored() {
    let root = Arc::new(
        Node::new(1, "Alice")
            .child(Node::new(2, "Bob"))
            .child(Node::new(5, "Eve")),
    );
    let mut tree = inline_tree(root);
    assert_eq!(tree.len(), 3);
    tree.update(Message::SetFocus(2));

    let commands = tree.update(Message::SetFocus(42));

    assert!(commands.is_empty());
    assert_eq!(tree.focused(), Some(&2));
}

#[test]
fn test_set_focus_command_dispatches_message() {
    let mut tree = inline_tree(alice());
    drain(&mut tree, vec![TreeView::set_focus(4)]);
    assert_eq!(tree.focused(), Some(&4));
}

// ============================================================================
// Input and passthrough
// ============================================================================

#[test]
fn test_navigation_keys_move_focus() {
    let mut tree = inline_tree(alice());

    tree.update(press('j'));
    assert_eq!(tree.focused(), Some(&2));
    tree.update(Message::Input(Event::Key(KeyCombo::key(Key::Down))));
    assert_eq!(tree.focused(), Some(&3));
    tree.update(press('k'));
    assert_eq!(tree.focused(), Some(&2));
    tree.update(press('G'));
    assert_eq!(tree.focused(), Some(&5));
}

#[test]
fn test_navigation_keys_are_not_passed_through() {
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);

    let mut tree = inline_tree(alice()).with_callback(move |_, _, _| {
        *counter.lock().unwrap() += 1;
        Vec::new()
    });

    tree.update(press('j'));
    assert_eq!(*calls.lock().unwrap(), 0);
    tree.update(press('x'));
    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn test_passthrough_sees_lines_focus_and_event() {
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);

    let mut tree = inline_tree(alice()).with_callback(move |lines, focused, event| {
        *sink.lock().unwrap() = Some((lines.len(), focused.copied(), event.clone()));
        Vec::new()
    });
    tree.update(Message::SetFocus(3));
    tree.update(press('h'));

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen, Some((5, Some(3), Event::Key(KeyCombo::char('h')))));
}

#[test]
fn test_passthrough_without_callback_is_noop() {
    let mut tree = inline_tree(alice());
    let commands = tree.update(press('h'));
    assert!(commands.is_empty());
    assert_eq!(tree.focused(), Some(&1));
}

#[test]
fn test_callback_drives_collapse() {
    let mut model = alice();
    let initial = model.clone();

    let collapse_parent = move |_: &[RenderedLine<u32>], focused: Option<&u32>, event: &Event| {
        let (Some(&key), Some(combo)) = (focused, event.key()) else {
            return Vec::new();
        };
        if *combo != KeyCombo::char('h') {
            return Vec::new();
        }
        let parent = model.parent_of(&key).map(|p| *p.key());
        let Some(parent) = parent else {
            return Vec::new();
        };
        if let Some(node) = Node::find_mut(&mut model, &parent) {
            node.set_expanded(false);
        }
        vec![
            TreeView::<Item>::replace_tree(model.clone()),
            TreeView::set_focus(parent),
        ]
    };
    let mut tree = TreeView::<Item>::new(TreeConfig::new()).with_callback(collapse_parent);

    let commands = tree.update(Message::ReplaceTree(initial));
    drain(&mut tree, commands);
    tree.update(Message::SetFocus(4));

    let commands = tree.update(press('h'));
    assert_eq!(commands.len(), 2);
    drain(&mut tree, commands);

    let keys: Vec<u32> = tree.lines().iter().map(|l| l.key).collect();
    assert_eq!(keys, vec![1, 2, 3, 5]);
    assert_eq!(tree.focused(), Some(&3));
}

fn collapsed_bob() -> Item {
    let mut root = alice();
    Node::find_mut(&mut root, &2).unwrap().set_expanded(false);
    root
}

#[test]
fn test_deferred_focus_on_newly_exposed_key_is_ignored() {
    let mut tree = TreeView::new(TreeConfig::new());
    let commands = tree.update(Message::ReplaceTree(collapsed_bob()));
    drain(&mut tree, commands);

    // Focus arrives before the rebuild that exposes Charlie
    drain(
        &mut tree,
        vec![TreeView::replace_tree(alice()), TreeView::set_focus(3)],
    );

    assert_eq!(tree.len(), 5);
    assert_eq!(tree.focused(), Some(&1));
}

#[test]
fn test_inline_focus_on_newly_exposed_key_applies() {
    let mut tree = inline_tree(collapsed_bob());

    drain(
        &mut tree,
        vec![TreeView::replace_tree(alice()), TreeView::set_focus(3)],
    );

    assert_eq!(tree.len(), 5);
    assert_eq!(tree.focused(), Some(&3));
}

#[test]
fn test_custom_keymap() {
    let keymap = Keymap::parse([("ctrl+j", Direction::Next)]).unwrap();
    let mut tree = TreeView::new(
        TreeConfig::new()
            .rebuild(RebuildMode::Inline)
            .keymap(keymap),
    );
    tree.update(Message::ReplaceTree(alice()));

    // Default binding no longer applies
    tree.update(press('j'));
    assert_eq!(tree.focused(), Some(&1));

    tree.update(Message::Input(Event::Key(KeyCombo::char('j').ctrl())));
    assert_eq!(tree.focused(), Some(&2));
}

#[test]
fn test_resize_is_passed_through() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut tree = inline_tree(alice()).with_callback(move |_, _, event| {
        sink.lock().unwrap().push(event.clone());
        Vec::new()
    });

    tree.update(Message::Input(Event::Resize {
        width: 80,
        height: 24,
    }));

    assert_eq!(
        *seen.lock().unwrap(),
        vec![Event::Resize {
            width: 80,
            height: 24
        }]
    );
}
