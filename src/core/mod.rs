pub mod catalog;
pub mod constants;
pub mod drawing;
pub mod hearts;
pub mod pick;
pub mod playback;
pub mod settings;
pub mod sfx;
pub mod shayari;
pub mod slides;

pub use catalog::*;
pub use constants::*;
pub use drawing::*;
pub use hearts::*;
pub use pick::*;
pub use playback::*;
pub use settings::*;
pub use sfx::*;
pub use slides::*;
