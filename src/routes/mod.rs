pub mod auth;

pub mod movies;

pub mod reviews;

pub mod users;

pub use auth::configure_auth_routes;
pub use movies::configure_movie_routes;
pub use reviews::configure_review_routes;
pub use users::configure_user_routes;
