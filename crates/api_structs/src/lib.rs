mod church;
mod event;
mod member;
mod service;
mod status;
mod team;

pub mod dtos {
    pub use crate::church::dtos::*;
    pub use crate::event::dtos::*;
    pub use crate::member::dtos::*;
    pub use crate::service::dtos::*;
    pub use crate::team::dtos::*;
}

pub use crate::church::api::*;
pub use crate::event::api::*;
pub use crate::member::api::*;
pub use crate::service::api::*;
pub use crate::status::api::*;
pub use crate::team::api::*;
