//! Models used to load and save entities in the Pokémon database.

pub mod pokemon;
