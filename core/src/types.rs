//! Shared primitive types used across the ranking pipeline.

/// Identifier of a blogger account (`id` in `users.json`).
pub type AccountId = i64;

/// Identifier of a blog post (`id` in `posts.json`).
pub type PostId = i64;

/// Identifier of a comment (`id` in `comments.json`).
pub type CommentId = i64;
