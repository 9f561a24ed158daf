//! Services implementing the business logic of the Pokémon API.

pub mod pokemon;
