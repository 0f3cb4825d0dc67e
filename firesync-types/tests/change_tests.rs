use firesync_types::{ChangeKind, WriteOp};

// ── Change kind → write op mapping ────────────────────────────────

#[test]
fn created_maps_to_set() {
    assert_eq!(ChangeKind::Created.write_op(), WriteOp::Set);
}

#[test]
fn updated_maps_to_update() {
    assert_eq!(ChangeKind::Updated.write_op(), WriteOp::Update);
}

#[test]
fn deleted_maps_to_delete() {
    assert_eq!(ChangeKind::Deleted.write_op(), WriteOp::Delete);
}

#[test]
fn restored_maps_to_set() {
    // A restore re-publishes the full state, exactly like a create.
    assert_eq!(ChangeKind::Restored.write_op(), WriteOp::Set);
}

// ── Display ───────────────────────────────────────────────────────

#[test]
fn change_kind_display() {
    assert_eq!(ChangeKind::Created.to_string(), "created");
    assert_eq!(ChangeKind::Updated.to_string(), "updated");
    assert_eq!(ChangeKind::Deleted.to_string(), "deleted");
    assert_eq!(ChangeKind::Restored.to_string(), "restored");
}

#[test]
fn write_op_display() {
    assert_eq!(WriteOp::Set.to_string(), "set");
    assert_eq!(WriteOp::Update.to_string(), "update");
    assert_eq!(WriteOp::Delete.to_string(), "delete");
}

// ── Serde ─────────────────────────────────────────────────────────

#[test]
fn change_kind_serde_snake_case() {
    let json = serde_json::to_string(&ChangeKind::Restored).unwrap();
    assert_eq!(json, "\"restored\"");
    let parsed: ChangeKind = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, ChangeKind::Restored);
}

#[test]
fn write_op_serde_snake_case() {
    let json = serde_json::to_string(&WriteOp::Delete).unwrap();
    assert_eq!(json, "\"delete\"");
    let parsed: WriteOp = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, WriteOp::Delete);
}
