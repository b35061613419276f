pub mod auth;
pub mod movies;
pub mod policy;
pub mod reviews;
pub mod scoring;
pub mod users;

pub use auth::AuthService;
pub use movies::MovieService;
pub use reviews::ReviewService;
pub use users::UserService;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::movies::requests::CreateMovieRequest;
    use crate::models::users::{entities::User, requests::NewUser};
    use crate::storage::Storage;

    pub(crate) fn movie_request(name: &str) -> CreateMovieRequest {
        CreateMovieRequest {
            name: name.to_string(),
            year: 1999,
            description: "Test movie".to_string(),
            genre: "Drama".to_string(),
            writers: Some("Someone".to_string()),
            actors: Some("Somebody Else".to_string()),
        }
    }

    pub(crate) async fn seed_user(storage: &dyn Storage, username: &str, is_admin: bool) -> User {
        storage
            .create_user(NewUser {
                username: username.to_string(),
                password_hash: "unused".to_string(),
                is_admin,
            })
            .await
            .unwrap()
    }
}
