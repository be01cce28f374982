pub mod avatar_face;
pub mod character_avatar;
pub mod exhibit_header;
pub mod map_view;
pub mod persona_card;
pub mod sketch_map_game;
