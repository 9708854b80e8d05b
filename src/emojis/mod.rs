/// The [emoji::Emoji] record stored in the lookup table
pub mod emoji;
/// The qualification [emoji_status::Status] of an emoji
pub mod emoji_status;
