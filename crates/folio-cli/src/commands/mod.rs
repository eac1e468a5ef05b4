pub mod banner;
pub mod classify;
pub mod dispatch;
pub mod page;
pub mod profile;
pub mod projects;
pub mod schema;
pub mod social;
pub mod system;
pub mod videos;
