pub mod constants;
pub mod counter;
pub mod ease;
pub mod follower;
pub mod nav;
pub mod parallax;
pub mod particles;

pub use constants::*;
pub use counter::*;
pub use ease::*;
pub use follower::*;
pub use nav::*;
pub use parallax::*;
pub use particles::*;
