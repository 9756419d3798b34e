pub mod context;
pub mod messages;
pub mod routing;
pub mod understanding;
