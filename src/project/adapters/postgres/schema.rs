//! Diesel schema for project persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Store-assigned project identifier.
        id -> Int4,
        /// Project description.
        description -> Text,
    }
}

diesel::table! {
    /// Step templates owned by a project.
    project_steps (id) {
        /// Store-assigned step identifier.
        id -> Int4,
        /// Step description.
        description -> Text,
        /// Deadline offset in days relative to the group reference date.
        days_to_deadline -> Int4,
        /// Owning project.
        project_id -> Int4,
    }
}

diesel::joinable!(project_steps -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, project_steps);
