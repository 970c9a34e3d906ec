//! Diesel schema for student record persistence.

diesel::table! {
    /// Student records and their review workflow state.
    students (id) {
        /// Student identifier.
        id -> Uuid,
        /// Student name.
        name -> Text,
        /// Assigned task.
        task -> Text,
        /// Free-form deadline.
        deadline -> Text,
        /// Submitted GitHub link, empty until submitted.
        github -> Text,
        /// Review status.
        #[max_length = 20]
        status -> Varchar,
        /// Revision counter used for compare-and-swap updates.
        revision -> Int8,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
