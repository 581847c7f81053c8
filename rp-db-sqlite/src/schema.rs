///////////////////////////////////////////////////////////////////////
// Review tokens
///////////////////////////////////////////////////////////////////////

table! {
    review_tokens (rowid) {
        rowid -> BigInt,
        id -> Text,
        place_id -> Text,
        value -> Text,
        expires_at -> BigInt,
        used_at -> Nullable<BigInt>,
    }
}

///////////////////////////////////////////////////////////////////////
// Reviews
///////////////////////////////////////////////////////////////////////

table! {
    reviews (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_id -> Text,
        place_id -> Text,
        token_id -> Text,
        content -> Text,
        rating -> SmallInt,
        created_at -> BigInt,
        updated_at -> Nullable<BigInt>,
        deleted_at -> Nullable<BigInt>,
    }
}

///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    user_restrictions (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_id -> Text,
        restriction_type -> Text,
        reason -> Text,
        created_at -> BigInt,
        expires_at -> BigInt,
    }
}

table! {
    user_points (user_id) {
        user_id -> Text,
        points -> Integer,
    }
}

allow_tables_to_appear_in_same_query!(review_tokens, reviews, user_restrictions, user_points);
