pub mod badge;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod input;
pub mod textarea;

pub use badge::Badge;
pub use button::{button_class, Button, LinkButton};
pub use card::Card;
pub use checkbox::Checkbox;
pub use input::Input;
pub use textarea::Textarea;
