pub mod map_transparency;
