//! Pure formatting and derivation helpers
//!
//! Small functions that turn stored records into displayable shapes:
//! two-column splitting of content lists, channel description rendering,
//! and map embed URL building. None of them touch catalog state.

pub mod columns;
pub mod link;
pub mod map_url;

pub use columns::split_columns;
pub use link::rendered_description;
pub use map_url::map_embed_url;
