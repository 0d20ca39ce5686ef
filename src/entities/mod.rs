pub mod prelude;

pub mod shows;
