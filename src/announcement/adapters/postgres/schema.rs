//! Diesel schema for announcement persistence.

diesel::table! {
    /// Single-row table holding the current-task announcement.
    task_announcements (slot) {
        /// Fixed key; the table is constrained to one row.
        slot -> Int2,
        /// Announced task.
        current_task -> Text,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
