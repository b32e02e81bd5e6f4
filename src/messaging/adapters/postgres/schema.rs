//! Diesel schema for user and message persistence.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 16]
        name -> Varchar,
        /// Email address in `local@domain` form.
        #[max_length = 64]
        email -> Varchar,
    }
}

diesel::table! {
    /// Messages exchanged between users.
    messages (id) {
        /// Message identifier.
        id -> Uuid,
        /// Identifier of the sending user.
        author_id -> Uuid,
        /// Identifier of the receiving user.
        recipient_id -> Uuid,
        /// Message content.
        #[max_length = 250]
        content -> Varchar,
        /// Creation timestamp.
        sent_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, messages);
