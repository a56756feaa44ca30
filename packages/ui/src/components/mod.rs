mod button;
mod card;
mod input;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use input::{FieldError, Input, Label, PasswordInput};
