mod navbar;
pub use navbar::Navbar;

mod home;
pub use home::Home;

mod auth;
pub use auth::Auth;

mod profile;
pub use profile::Profile;

mod statistics;
pub use statistics::Statistics;
