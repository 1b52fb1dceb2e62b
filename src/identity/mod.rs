//! Identity slice: registered users, the current session, and the
//! register/login side-effect handler.

mod forms;
mod handler;
mod intent;
mod model;
mod password;
mod reducer;
mod state;

pub use forms::{FormError, LoginForm, LoginRequest, RegisterRequest, RegistrationForm};
pub use handler::IdentityHandler;
pub use intent::IdentityMutation;
pub use model::{Session, SessionUser, User, UserId};
pub use password::{PasswordError, SecretHasher};
pub use reducer::IdentityReducer;
pub use state::{IdentityState, OperationStatus};

/// Reported when registering an email that is already taken.
pub const USER_EXISTS: &str = "A user with this email already exists";
/// Reported for any login mismatch; unknown email and wrong password look the same.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
/// Reported when the secret could not be hashed.
pub const REGISTRATION_FAILED: &str = "Registration failed, please try again";
