pub mod author;
pub mod chapter;
pub mod contact;
pub mod course;
pub mod enrollment;
pub mod health;
pub mod price;
pub mod profile;
pub mod resource;
pub mod thumbnail;
