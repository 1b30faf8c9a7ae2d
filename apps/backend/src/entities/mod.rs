pub mod balls;
pub mod innings;
pub mod matches;
pub mod overs;

pub use balls::Entity as Balls;
pub use innings::Entity as Innings;
pub use matches::Entity as Matches;
pub use overs::Entity as Overs;
