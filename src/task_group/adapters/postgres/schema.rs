//! Diesel schema for task group persistence.

diesel::table! {
    /// Task group records.
    task_groups (id) {
        /// Store-assigned group identifier.
        id -> Int4,
        /// Group description.
        description -> Text,
        /// Earliest task deadline, unset for groups without tasks.
        deadline -> Nullable<Timestamp>,
        /// Completion flag.
        done -> Bool,
        /// Project the group was instantiated from.
        project_id -> Nullable<Int4>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tasks owned by a task group.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Task description.
        description -> Text,
        /// Completion flag.
        done -> Bool,
        /// Absolute deadline.
        deadline -> Timestamp,
        /// Owning group.
        task_group_id -> Int4,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> task_groups (task_group_id));
diesel::allow_tables_to_appear_in_same_query!(task_groups, tasks);
