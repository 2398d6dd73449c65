mod error;
mod operations;
mod requests;
mod types;

pub use error::ValidationError;
pub use operations::{validate_field, MAX_FIELD_LEN};
pub use requests::{
    AddFavoriteCharacterRequest, AddFavoritePlanetRequest, CreateCharacterRequest,
    CreatePlanetRequest, CreateUserRequest,
};
pub use types::{
    Character, Favorite, NewCharacter, NewFavorite, NewPlanet, NewUser, Planet, RecordId, User,
};
