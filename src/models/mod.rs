mod interaction;
mod product;
mod profile;
mod user;

pub use interaction::{ActionKind, Interaction};
pub use product::Product;
pub use profile::UserProfile;
pub use user::User;
