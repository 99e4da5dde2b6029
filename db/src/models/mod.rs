mod choice;
mod question;

pub use self::choice::*;
pub use self::question::*;
