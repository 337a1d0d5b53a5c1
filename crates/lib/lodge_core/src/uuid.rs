// Helper for generating UUIDv7 (timestamp-sortable UUIDs).
//
// Availability rows are rewritten on every webhook call, so their ids are
// generated app-side and sort by insertion time. User ids use the same helper.

use uuid::Uuid;

/// Generate a new UUIDv7 (timestamp-sortable).
pub fn uuidv7() -> Uuid {
    Uuid::now_v7()
}
