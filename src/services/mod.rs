pub mod show_service;
pub mod show_service_impl;

pub use show_service::{ShowError, ShowService, show_to_dto, shows_to_dtos};
pub use show_service_impl::SeaOrmShowService;
