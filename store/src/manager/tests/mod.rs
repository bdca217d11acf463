use super::*;

mod entities;
mod flights;
mod properties;
mod users;
